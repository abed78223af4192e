// File: crates/skycast-chart/src/error.rs
// Summary: Error type shared by series construction, config parsing, rendering and export.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The named draw surface is not attached to the document.
    #[error("draw surface '{id}' not found in document")]
    TargetNotFound { id: String },

    #[error("labels and values must be index-aligned: {labels} labels, {values} values")]
    LengthMismatch { labels: usize, values: usize },

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("failed to allocate {width}x{height} raster surface")]
    SurfaceAllocation { width: i32, height: i32 },

    #[error("{0} encoding failed")]
    Encode(&'static str),

    #[error("invalid chart config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
