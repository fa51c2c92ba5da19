//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation. Note that
//! an unrecognized notification name is never an error: the event layer
//! simply yields `None` for it.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the lifecycle observer.
#[derive(Error, Debug)]
pub enum Error {
    /// Rejected arguments (empty notification names and the like).
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown subscription token, notification name or similar lookup miss.
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal errors.
    #[error("internal error: {0}")]
    Internal(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience constructors
impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
