//! Error types for Livepos core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-facing messages. Every variant is recoverable at the interaction
//! boundary: the operator retries the action, nothing is fatal.

use thiserror::Error;

/// Result type alias for Livepos operations.
pub type Result<T> = std::result::Result<T, PosError>;

/// Core error type for Livepos operations.
#[derive(Debug, Error)]
pub enum PosError {
    /// A required field was empty or otherwise unusable at submission time
    #[error("Validation error: {0}")]
    Validation(String),

    /// Filesystem trouble reading or writing a session file
    #[error("Storage error: {0}")]
    Storage(String),

    /// A session file could not be parsed; state is left untouched
    #[error("Parse error: {0}")]
    Parse(String),

    /// Refusing to save a session with zero records
    #[error("Session is empty; nothing to save")]
    EmptySession,

    /// Resource not found (session file, ledger row)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for PosError {
    fn from(err: std::io::Error) -> Self {
        PosError::Storage(err.to_string())
    }
}

impl From<csv::Error> for PosError {
    fn from(err: csv::Error) -> Self {
        PosError::Parse(err.to_string())
    }
}
