//! Error types for the hab booking backend.

use thiserror::Error;

/// Errors that can occur in hab operations.
///
/// `Validation`, `NotFound`, `Persistence` and `Internal` render as their bare
/// message, since that message is what API clients get to see.
#[derive(Error, Debug)]
pub enum HabError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Persistence(String),

    #[error("{0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for HabError {
    fn from(e: serde_json::Error) -> Self {
        HabError::Serialization(e.to_string())
    }
}

/// Result type alias for hab operations.
pub type HabResult<T> = Result<T, HabError>;
