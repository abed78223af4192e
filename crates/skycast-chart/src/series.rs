// File: crates/skycast-chart/src/series.rs
// Summary: Labeled line series model (labels, values, style) with the hourly rain sample.
// Notes:
// - Fields are private; a series is immutable once built and its labels and
//   values are always index-aligned.

use crate::color::Rgba;
use crate::error::{ChartError, ChartResult};

/// Hour labels of the rain-probability sample.
pub const RAIN_LABELS: [&str; 6] = ["10AM", "11AM", "12PM", "1PM", "2PM", "3PM"];
/// Rain probability per hour, in percent.
pub const RAIN_VALUES: [f64; 6] = [20.0, 50.0, 80.0, 60.0, 40.0, 30.0];
pub const RAIN_LABEL: &str = "Rain %";

/// Visual attributes of a line series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub stroke: Rgba,
    pub fill: Rgba,
    /// Fill the area between the curve and the value-axis origin.
    pub fill_under: bool,
    /// Bezier smoothing; 0 draws straight segments.
    pub tension: f32,
    pub line_width: f32,
    pub point_radius: f32,
    pub point_border_width: f32,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            stroke: Rgba::rgba(0, 0, 0, 0.1),
            fill: Rgba::rgba(0, 0, 0, 0.1),
            fill_under: false,
            tension: 0.0,
            line_width: 3.0,
            point_radius: 3.0,
            point_border_width: 1.0,
        }
    }
}

impl SeriesStyle {
    /// Sky-blue stroke over a translucent fill, smoothed at 0.4.
    pub fn rain() -> Self {
        Self {
            stroke: Rgba::rgb(0x29, 0xB6, 0xF6),
            fill: Rgba::rgba(41, 182, 246, 0.3),
            fill_under: true,
            tension: 0.4,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    label: String,
    labels: Vec<String>,
    values: Vec<f64>,
    style: SeriesStyle,
}

impl ChartSeries {
    /// Build a series, rejecting labels and values of different lengths.
    pub fn try_new(
        label: impl Into<String>,
        labels: Vec<String>,
        values: Vec<f64>,
        style: SeriesStyle,
    ) -> ChartResult<Self> {
        if labels.len() != values.len() {
            return Err(ChartError::LengthMismatch { labels: labels.len(), values: values.len() });
        }
        Ok(Self { label: label.into(), labels, values, style })
    }

    /// The hourly rain-probability sample.
    pub fn rain_probability() -> Self {
        Self {
            label: RAIN_LABEL.to_string(),
            labels: RAIN_LABELS.iter().map(|s| s.to_string()).collect(),
            values: RAIN_VALUES.to_vec(),
            style: SeriesStyle::rain(),
        }
    }

    pub fn label(&self) -> &str { &self.label }
    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn values(&self) -> &[f64] { &self.values }
    pub fn style(&self) -> &SeriesStyle { &self.style }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// `(label, value)` pairs in x order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels.iter().map(String::as_str).zip(self.values.iter().copied())
    }

    /// Smallest and largest finite values.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values.iter().copied().filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Index of the first maximum.
    pub fn peak_index(&self) -> Option<usize> {
        self.extreme_index(|candidate, best| candidate > best)
    }

    /// Index of the first minimum.
    pub fn trough_index(&self) -> Option<usize> {
        self.extreme_index(|candidate, best| candidate < best)
    }

    fn extreme_index(&self, better: impl Fn(f64, f64) -> bool) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &v) in self.values.iter().enumerate() {
            if !v.is_finite() { continue; }
            match best {
                Some(b) if !better(v, self.values[b]) => {}
                _ => best = Some(i),
            }
        }
        best
    }
}
