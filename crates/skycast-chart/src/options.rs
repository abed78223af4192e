// File: crates/skycast-chart/src/options.rs
// Summary: Render options (sizing, legend, y-axis ticks, labels, theme).

use crate::types::{Insets, INTRINSIC_HEIGHT, INTRINSIC_WIDTH, LINE_ASPECT_RATIO};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendOptions {
    pub display: bool,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self { display: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisOptions {
    /// Force the axis range to include zero.
    pub begin_at_zero: bool,
    /// Fixed distance between ticks; `None` picks a 1/2/5 step.
    pub tick_step_size: Option<f64>,
    pub max_ticks_limit: usize,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self { begin_at_zero: false, tick_step_size: None, max_ticks_limit: 11 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    /// Size the chart from the target surface instead of `width`/`height`.
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub aspect_ratio: f32,
    /// Intrinsic size, used when not responsive.
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub legend: LegendOptions,
    pub y_axis: AxisOptions,
    pub draw_labels: bool,
    pub theme: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: true,
            aspect_ratio: LINE_ASPECT_RATIO,
            width: INTRINSIC_WIDTH,
            height: INTRINSIC_HEIGHT,
            insets: Insets::default(),
            legend: LegendOptions::default(),
            y_axis: AxisOptions::default(),
            draw_labels: true,
            theme: "light".to_string(),
        }
    }
}

impl ChartOptions {
    /// Responsive, no legend, y from zero in steps of 20.
    pub fn rain_forecast() -> Self {
        Self {
            responsive: true,
            legend: LegendOptions { display: false },
            y_axis: AxisOptions { begin_at_zero: true, tick_step_size: Some(20.0), ..AxisOptions::default() },
            ..Self::default()
        }
    }

    /// Chart size in pixels for a surface of `surface_w` x `surface_h`.
    pub fn chart_size(&self, surface_w: i32, surface_h: i32) -> (i32, i32) {
        let (w, h) = if self.responsive {
            let h = if self.maintain_aspect_ratio && self.aspect_ratio > 0.0 {
                ((surface_w as f32 / self.aspect_ratio).round() as i32).min(surface_h)
            } else {
                surface_h
            };
            (surface_w, h)
        } else {
            (self.width.min(surface_w), self.height.min(surface_h))
        };
        (w.max(1), h.max(1))
    }
}
