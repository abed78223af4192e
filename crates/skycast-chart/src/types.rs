// File: crates/skycast-chart/src/types.rs
// Summary: Shared types and constants (surface sizes, paddings, font sizes).

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Intrinsic chart width used when the chart is not responsive.
pub const INTRINSIC_WIDTH: i32 = 300;
/// Intrinsic chart height used when the chart is not responsive.
pub const INTRINSIC_HEIGHT: i32 = 150;

/// Width/height ratio kept by responsive line charts.
pub const LINE_ASPECT_RATIO: f32 = 2.0;

pub const TICK_FONT_SIZE: f32 = 12.0;
pub const LEGEND_FONT_SIZE: f32 = 12.0;
/// Vertical space reserved above the plot when a legend is shown.
pub const LEGEND_HEIGHT: u32 = 28;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Room for y tick labels on the left and x tick labels below.
    fn default() -> Self {
        Self::new(44, 16, 16, 32)
    }
}
