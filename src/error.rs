//! Error types for configuration and sample ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected configuration. Raised eagerly when a chart, buffer, or config
/// file is constructed, never in the middle of a sample stream.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("buffer capacity must be at least 1")]
    ZeroCapacity,

    #[error("channel capacity must be at least 1")]
    ZeroChannelCapacity,

    #[error("`{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("minimum range is zero (range basis {basis}); the axis would collapse onto the floor")]
    ZeroMinimumRange { basis: f64 },

    #[error("title font size must be positive, got {0}")]
    NonPositiveFontSize(f32),

    #[error("auto-fit margin must not be negative, got {0}")]
    NegativeMargin(f64),

    #[error("cannot read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format '{}' (expected .yaml, .yml or .json)", .0.display())]
    UnknownFormat(PathBuf),
}

/// A sample the chart refused to ingest.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SampleError {
    #[error("non-finite sample {0}")]
    NonFinite(f64),
}

/// Failure to open or run the chart window.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("UI error: {0}")]
    Ui(#[from] eframe::Error),
}
