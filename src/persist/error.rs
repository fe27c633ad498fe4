//! Persistence error types.

use thiserror::Error;

/// Errors that can occur while reading a model.
#[derive(Debug, Error)]
pub enum ReadError {
    /// I/O error during reading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or a record with the wrong shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while writing a model.
#[derive(Debug, Error)]
pub enum WriteError {
    /// JSON has no representation for NaN or infinities.
    #[error("model has non-finite parameters")]
    NonFinite,

    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
