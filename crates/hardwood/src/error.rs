//! Error types for the Hardwood library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Hardwood operations.
#[derive(Debug, Error)]
pub enum HardwoodError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to clean.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A column the dataset rules require is missing from the file.
    #[error("Dataset '{dataset}' is missing required column '{column}'")]
    MissingColumn { dataset: String, column: String },

    /// A column name was requested that the dataset does not contain.
    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),

    /// Too few paired observations to compute a correlation.
    #[error(
        "Insufficient data for correlation of '{first}' and '{second}': \
         {observations} paired observation(s), need at least 2"
    )]
    InsufficientData {
        first: String,
        second: String,
        observations: usize,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Hardwood operations.
pub type Result<T> = std::result::Result<T, HardwoodError>;
