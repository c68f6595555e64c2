//! Error types for the avwx crates.
//!
//! Absence of data is not an error here: the parser and resolver signal "no
//! usable data" with `Option`. These variants cover inputs that are present
//! but genuinely malformed, mainly at the document-deserialization boundary.

use thiserror::Error;

/// Result type alias using AvwxError.
pub type AvwxResult<T> = Result<T, AvwxError>;

/// Primary error type for avwx operations.
#[derive(Debug, Error)]
pub enum AvwxError {
    #[error("invalid change indicator: {0}")]
    InvalidChangeIndicator(String),

    #[error("invalid visibility value: {0}")]
    InvalidVisibility(String),

    #[error("invalid cloud group: {0}")]
    InvalidCloudGroup(String),

    #[error("invalid time value: {0}")]
    InvalidTime(String),

    #[error("document error: {0}")]
    DocumentError(String),
}

impl From<serde_json::Error> for AvwxError {
    fn from(err: serde_json::Error) -> Self {
        AvwxError::DocumentError(format!("JSON error: {}", err))
    }
}
