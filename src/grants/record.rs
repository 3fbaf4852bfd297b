//! Grant record definitions
//!
//! The value stored under a grant key.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Stored grant value
///
/// Held opaquely: the index never interprets the authorization or enforces
/// the expiration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRecord {
    /// Encoded authorization payload
    pub authorization: Vec<u8>,

    /// Expiration (unix seconds), if any
    pub expiration: Option<u64>,
}

impl GrantRecord {
    /// Create a record
    pub fn new(authorization: impl Into<Vec<u8>>, expiration: Option<u64>) -> Self {
        Self {
            authorization: authorization.into(),
            expiration,
        }
    }

    /// Serialize with bincode
    pub fn serialize(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from bincode bytes
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
