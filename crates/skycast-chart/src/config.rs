// File: crates/skycast-chart/src/config.rs
// Summary: Chart.js-shaped JSON configuration (type/data/options) mapped onto series and options.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Rgba;
use crate::error::{ChartError, ChartResult};
use crate::options::{AxisOptions, ChartOptions, LegendOptions};
use crate::series::{ChartSeries, SeriesStyle, RAIN_LABEL, RAIN_LABELS, RAIN_VALUES};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: DataConfig,
    #[serde(default)]
    pub options: OptionsConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetConfig {
    #[serde(default)]
    pub label: String,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Rgba>,
    #[serde(default)]
    pub fill: bool,
    #[serde(default)]
    pub tension: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintain_aspect_ratio: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f32>,
    #[serde(default)]
    pub plugins: PluginsConfig,
    #[serde(default)]
    pub scales: ScalesConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginsConfig {
    #[serde(default)]
    pub legend: LegendConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalesConfig {
    #[serde(default)]
    pub y: ValueScaleConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueScaleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(default)]
    pub ticks: TicksConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicksConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ticks_limit: Option<usize>,
}

impl ChartConfig {
    /// The hourly rain-probability line chart.
    pub fn rain_forecast() -> Self {
        let style = SeriesStyle::rain();
        Self {
            kind: "line".to_string(),
            data: DataConfig {
                labels: RAIN_LABELS.iter().map(|s| s.to_string()).collect(),
                datasets: vec![DatasetConfig {
                    label: RAIN_LABEL.to_string(),
                    data: RAIN_VALUES.to_vec(),
                    border_color: Some(style.stroke),
                    background_color: Some(style.fill),
                    fill: style.fill_under,
                    tension: style.tension,
                    border_width: None,
                    point_radius: None,
                }],
            },
            options: OptionsConfig {
                responsive: Some(true),
                plugins: PluginsConfig { legend: LegendConfig { display: Some(false) } },
                scales: ScalesConfig {
                    y: ValueScaleConfig {
                        begin_at_zero: Some(true),
                        ticks: TicksConfig { step_size: Some(20.0), max_ticks_limit: None },
                    },
                },
                ..OptionsConfig::default()
            },
        }
    }

    pub fn from_json_str(s: &str) -> ChartResult<Self> {
        serde_json::from_str(s).map_err(|e| ChartError::Config(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading chart config");
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ChartError::Config(e.to_string()))
    }

    /// Resolve into a series and render options.
    ///
    /// Only single-dataset line charts are accepted.
    pub fn build(&self) -> ChartResult<(ChartSeries, ChartOptions)> {
        if !self.kind.eq_ignore_ascii_case("line") {
            return Err(ChartError::Config(format!("unsupported chart type '{}'", self.kind)));
        }
        let dataset = match self.data.datasets.as_slice() {
            [one] => one,
            other => {
                return Err(ChartError::Config(format!(
                    "expected exactly one dataset, found {}",
                    other.len()
                )))
            }
        };

        let defaults = SeriesStyle::default();
        let style = SeriesStyle {
            stroke: dataset.border_color.unwrap_or(defaults.stroke),
            fill: dataset.background_color.unwrap_or(defaults.fill),
            fill_under: dataset.fill,
            tension: dataset.tension.clamp(0.0, 1.0),
            line_width: dataset.border_width.unwrap_or(defaults.line_width),
            point_radius: dataset.point_radius.unwrap_or(defaults.point_radius),
            ..defaults
        };
        let series = ChartSeries::try_new(
            dataset.label.clone(),
            self.data.labels.clone(),
            dataset.data.clone(),
            style,
        )?;

        let base = ChartOptions::default();
        let o = &self.options;
        let y = &o.scales.y;
        let options = ChartOptions {
            responsive: o.responsive.unwrap_or(base.responsive),
            maintain_aspect_ratio: o.maintain_aspect_ratio.unwrap_or(base.maintain_aspect_ratio),
            aspect_ratio: o.aspect_ratio.unwrap_or(base.aspect_ratio),
            legend: LegendOptions { display: o.plugins.legend.display.unwrap_or(base.legend.display) },
            y_axis: AxisOptions {
                begin_at_zero: y.begin_at_zero.unwrap_or(base.y_axis.begin_at_zero),
                tick_step_size: y.ticks.step_size.or(base.y_axis.tick_step_size),
                max_ticks_limit: y.ticks.max_ticks_limit.unwrap_or(base.y_axis.max_ticks_limit),
            },
            ..base
        };
        Ok((series, options))
    }
}
