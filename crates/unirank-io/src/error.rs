//! I/O error types

use thiserror::Error;

/// Errors raised while reading or writing ranking tables
///
/// Only table-shape problems are errors; malformed cell values
/// (unparseable ranks, coordinates, status text) degrade to absent
/// fields and never fail a run.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format in {path}: {message}")]
    InvalidFormat { path: String, message: String },

    #[error("Source '{source_name}' is missing required column '{column}' (found: {available})")]
    MissingColumn {
        source_name: String,
        column: String,
        available: String,
    },

    #[error("Invalid table spec for source '{source_name}': {message}")]
    InvalidSpec { source_name: String, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
