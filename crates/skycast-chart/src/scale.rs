// File: crates/skycast-chart/src/scale.rs
// Summary: Category (X) and value (Y) scale transforms from data space to pixels.

use crate::axis::AxisRange;
use crate::grid::linspace;

/// Horizontal category scale: `count` evenly spaced slots, first and last on the plot edges.
#[derive(Clone, Debug)]
pub struct CategoryScale {
    positions: Vec<f32>,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        let positions = linspace(left_px as f64, right_px as f64, count)
            .into_iter()
            .map(|p| p as f32)
            .collect();
        Self { positions }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> Option<f32> {
        self.positions.get(index).copied()
    }
}

/// Vertical value scale mapping an axis range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn from_range(top_px: f32, bottom_px: f32, range: &AxisRange) -> Self {
        Self::new_linear(top_px, bottom_px, range.min, range.max)
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.vmin + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span
    }
}
