//! Error types for the coco-class-metrics library.

use thiserror::Error;

/// Result type for coco-class-metrics operations.
pub type Result<T> = std::result::Result<T, ClassMetricsError>;

/// Error types that can occur while building a per-category metric table.
#[derive(Error, Debug)]
pub enum ClassMetricsError {
    /// The evaluation parameters or report configuration cannot be resolved,
    /// e.g. the `"all"` area bucket or the 100 max-detections cap is missing.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A precision/recall tensor does not match the indexing scheme implied by `Params`.
    #[error("Shape error: {0}")]
    Shape(String),

    /// Error during JSON parsing or serialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error during I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by polars while building a DataFrame.
    #[cfg(feature = "dataframe")]
    #[error("DataFrame error: {0}")]
    DataFrame(#[from] polars::error::PolarsError),
}
