// File: crates/skycast-chart/src/axis.rs
// Summary: Value-axis range resolution and tick generation (begin-at-zero, fixed step, nice steps).

use tracing::warn;

/// Upper bound on generated ticks before a fixed step is considered unusable.
const MAX_FIXED_TICKS: usize = 1000;

/// Resolved numeric range of a linear axis with its tick spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// A tick mark: data value, display label and pixel position along its axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
    pub px: f32,
}

impl AxisRange {
    /// Resolve the displayed range for data spanning `data_min..=data_max`.
    ///
    /// With `begin_at_zero` the range is stretched to include zero. A fixed
    /// `step` widens both bounds to multiples of it; otherwise a 1/2/5 step
    /// is picked so that at most `max_ticks` ticks are produced.
    pub fn resolve(
        data_min: f64,
        data_max: f64,
        begin_at_zero: bool,
        step: Option<f64>,
        max_ticks: usize,
    ) -> Self {
        let (mut min, mut max) = if data_min.is_finite() && data_max.is_finite() {
            (data_min.min(data_max), data_max.max(data_min))
        } else {
            (0.0, 0.0)
        };

        if begin_at_zero {
            min = min.min(0.0);
            max = max.max(0.0);
        }

        if (max - min).abs() < f64::EPSILON {
            let offset = if max == 0.0 { 1.0 } else { (max * 0.05).abs() };
            max += offset;
            if !begin_at_zero {
                min -= offset;
            }
        }

        let step = match step {
            Some(s) if s > 0.0 && s.is_finite() && ((max - min) / s).ceil() as usize <= MAX_FIXED_TICKS => s,
            Some(s) => {
                warn!(step = s, min, max, "ignoring unusable tick step size");
                nice_step(max - min, max_ticks)
            }
            None => nice_step(max - min, max_ticks),
        };

        Self {
            min: round_to_step((min / step).floor() * step, step),
            max: round_to_step((max / step).ceil() * step, step),
            step,
        }
    }

    /// Tick values from `min` to `max` inclusive.
    pub fn values(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count)
            .map(|i| round_to_step(self.min + i as f64 * self.step, self.step))
            .collect()
    }

    /// Value the area fill is anchored to: zero clamped into the range.
    pub fn base_value(&self) -> f64 {
        0f64.clamp(self.min, self.max)
    }
}

/// Smallest 1/2/5 × 10^k step that splits `span` into at most `max_ticks - 1` intervals.
pub fn nice_step(span: f64, max_ticks: usize) -> f64 {
    let intervals = max_ticks.max(2) as f64 - 1.0;
    let raw = (span.abs() / intervals).max(f64::MIN_POSITIVE);
    let magnitude = 10f64.powf(raw.log10().floor());
    for factor in [1.0, 2.0, 5.0, 10.0] {
        let step = factor * magnitude;
        if step >= raw - raw * 1e-12 {
            return step;
        }
    }
    10.0 * magnitude
}

/// Snap float drift (e.g. 0.30000000000000004) to the step's decimal precision.
fn round_to_step(v: f64, step: f64) -> f64 {
    let decimals = (-step.log10().floor()).max(0.0) as i32 + 2;
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}

/// Label for a tick value: integers without decimals, others trimmed.
pub fn format_tick(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.6}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
