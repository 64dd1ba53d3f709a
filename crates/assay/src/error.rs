//! Error types for the Assay library.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while loading raw data into a [`Table`](crate::Table).
///
/// Load errors abort the run before any analysis happens. Per-column
/// computational degeneracies (zero variance, too few samples) are never
/// errors; they surface as `None` fields in the report.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The input has no columns.
    #[error("empty table: no columns")]
    NoColumns,

    /// The input has columns but no data rows.
    #[error("empty table: no data rows")]
    NoRows,

    /// Two columns share the same name.
    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    /// A row's cell count does not match the header width.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Fatal errors raised by the analysis engine itself.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Umbrella error type for Assay operations.
#[derive(Debug, Error)]
pub enum AssayError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// JSON serialization/deserialization error at the report boundary.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Assay operations.
pub type Result<T, E = AssayError> = std::result::Result<T, E>;
