//! Error types for grantkey
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using GrantKeyError
pub type Result<T> = std::result::Result<T, GrantKeyError>;

/// Unified error type for grantkey operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrantKeyError {
    // -------------------------------------------------------------------------
    // Key Codec Errors
    // -------------------------------------------------------------------------
    /// An identifier does not fit in its one-byte length field
    #[error("Invalid {field} identifier length: {len} bytes (max 255)")]
    InvalidIdentifierLength { field: &'static str, len: usize },

    /// A key is shorter than its length bytes declare
    #[error("Truncated key: need at least {needed} bytes, got {actual}")]
    TruncatedKey { needed: usize, actual: usize },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<bincode::Error> for GrantKeyError {
    fn from(e: bincode::Error) -> Self {
        GrantKeyError::Serialization(e.to_string())
    }
}
