// File: crates/skycast-chart/src/lib.rs
// Summary: Core library entry point; exports the rain chart model, renderer and host document.

pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod options;
pub mod scale;
pub mod series;
pub mod spline;
pub mod surface;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{AxisRange, Tick};
pub use chart::{ChartRenderer, LegendLayout, RenderedChart, RenderedPoint};
pub use color::Rgba;
pub use config::ChartConfig;
pub use error::{ChartError, ChartResult};
pub use options::{AxisOptions, ChartOptions, LegendOptions};
pub use series::{ChartSeries, SeriesStyle};
pub use surface::{Document, DrawSurface};
pub use theme::Theme;
pub use text::TextShaper;
