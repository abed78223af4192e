// File: crates/skycast-chart/src/theme.rs
// Summary: Light/Dark theming for chart chrome (background, grid, labels).

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub tick_label: Rgba,
    pub legend_label: Rgba,
}

impl Theme {
    /// White page with faint black grid and grey labels.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::WHITE,
            grid: Rgba::rgba(0, 0, 0, 0.1),
            tick_label: Rgba::rgb(0x66, 0x66, 0x66),
            legend_label: Rgba::rgb(0x66, 0x66, 0x66),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            grid: Rgba::rgba(255, 255, 255, 0.1),
            tick_label: Rgba::rgb(0xbb, 0xbb, 0xc4),
            legend_label: Rgba::rgb(0xeb, 0xeb, 0xf5),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
