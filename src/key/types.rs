//! Key definitions
//!
//! Owned and borrowed forms of a decoded composite key.

use crate::error::Result;
use super::codec;

/// A composite key with owned fields
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GrantKey {
    /// Record family byte
    pub prefix: u8,

    /// First identifier (granter for grant records)
    pub primary: Vec<u8>,

    /// Second identifier (grantee for grant records)
    pub secondary: Vec<u8>,

    /// Trailing label (message type URL for grant records)
    pub label: Vec<u8>,
}

impl GrantKey {
    /// Create a key from its fields
    pub fn new(
        prefix: u8,
        primary: impl Into<Vec<u8>>,
        secondary: impl Into<Vec<u8>>,
        label: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            prefix,
            primary: primary.into(),
            secondary: secondary.into(),
            label: label.into(),
        }
    }

    /// Encode to the flat byte layout
    pub fn encode(&self) -> Result<Vec<u8>> {
        codec::encode(self.prefix, &self.primary, &self.secondary, &self.label)
    }

    /// Size of the encoded key
    pub fn encoded_len(&self) -> usize {
        codec::encoded_len(&self.primary, &self.secondary, &self.label)
    }

    /// Borrow as a key view
    pub fn as_key_ref(&self) -> GrantKeyRef<'_> {
        GrantKeyRef {
            prefix: self.prefix,
            primary: &self.primary,
            secondary: &self.secondary,
            label: &self.label,
        }
    }
}

/// A decoded composite key borrowing from the encoded buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrantKeyRef<'a> {
    pub prefix: u8,
    pub primary: &'a [u8],
    pub secondary: &'a [u8],
    pub label: &'a [u8],
}

impl<'a> GrantKeyRef<'a> {
    /// The label as text, if it is valid UTF-8
    pub fn label_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.label).ok()
    }

    /// Copy the fields out of the encoded buffer
    pub fn to_owned_key(&self) -> GrantKey {
        GrantKey {
            prefix: self.prefix,
            primary: self.primary.to_vec(),
            secondary: self.secondary.to_vec(),
            label: self.label.to_vec(),
        }
    }
}

impl From<GrantKeyRef<'_>> for GrantKey {
    fn from(key: GrantKeyRef<'_>) -> Self {
        key.to_owned_key()
    }
}
