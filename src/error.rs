//! Error types for the cache configuration library
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for configuration and store operations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// A required argument was absent or unusable.
    ///
    /// Carries the fully formatted message verbatim and no underlying cause.
    #[error("{0}")]
    InvalidArgument(String),

    /// Key not found in the store
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Key was present but its TTL has elapsed
    #[error("Key expired: {0}")]
    Expired(String),

    /// Value (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Stored key bytes were not valid UTF-8
    #[error("Key encoding error: {0}")]
    KeyEncoding(#[from] std::string::FromUtf8Error),
}

// == Result Type Alias ==
/// Convenience Result type for the library.
pub type Result<T> = std::result::Result<T, CacheError>;
