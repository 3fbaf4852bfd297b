//! Key codec
//!
//! Encoding and decoding functions for composite keys.
//!
//! ### Layout
//! ```text
//! [prefix:1][L1:1][primary:L1][L2:1][secondary:L2][label:remaining]
//! ```
//!
//! The label carries no length of its own; it is only unbounded because it
//! is the last field.

use crate::error::{GrantKeyError, Result};
use super::{GrantKeyRef, MAX_IDENTIFIER_LEN, MIN_KEY_LEN};

// =============================================================================
// Encoding
// =============================================================================

/// Encode a composite key
///
/// Format: prefix (1) + L1 (1) + primary + L2 (1) + secondary + label
pub fn encode(prefix: u8, primary: &[u8], secondary: &[u8], label: &[u8]) -> Result<Vec<u8>> {
    let primary_len = identifier_len("primary", primary)?;
    let secondary_len = identifier_len("secondary", secondary)?;

    let mut key = Vec::with_capacity(encoded_len(primary, secondary, label));
    key.push(prefix);
    key.push(primary_len);
    key.extend_from_slice(primary);
    key.push(secondary_len);
    key.extend_from_slice(secondary);
    key.extend_from_slice(label);

    Ok(key)
}

/// Exact size of the key `encode` produces for these fields
pub fn encoded_len(primary: &[u8], secondary: &[u8], label: &[u8]) -> usize {
    3 + primary.len() + secondary.len() + label.len()
}

/// Prepend a one-byte length to an identifier
pub fn length_prefix(identifier: &[u8]) -> Result<Vec<u8>> {
    let len = identifier_len("identifier", identifier)?;

    let mut out = Vec::with_capacity(1 + identifier.len());
    out.push(len);
    out.extend_from_slice(identifier);
    Ok(out)
}

/// Scan prefix shared by every key with this primary identifier
///
/// Format: prefix (1) + L1 (1) + primary
pub fn primary_prefix(prefix: u8, primary: &[u8]) -> Result<Vec<u8>> {
    let primary_len = identifier_len("primary", primary)?;

    let mut out = Vec::with_capacity(2 + primary.len());
    out.push(prefix);
    out.push(primary_len);
    out.extend_from_slice(primary);
    Ok(out)
}

/// Scan prefix shared by every key with this primary and secondary identifier
///
/// Format: prefix (1) + L1 (1) + primary + L2 (1) + secondary
pub fn pair_prefix(prefix: u8, primary: &[u8], secondary: &[u8]) -> Result<Vec<u8>> {
    // Same bytes as a key with an empty label
    encode(prefix, primary, secondary, &[])
}

/// Length of an identifier as its one-byte length field
fn identifier_len(field: &'static str, identifier: &[u8]) -> Result<u8> {
    if identifier.len() > MAX_IDENTIFIER_LEN {
        return Err(GrantKeyError::InvalidIdentifierLength {
            field,
            len: identifier.len(),
        });
    }
    Ok(identifier.len() as u8)
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a composite key
///
/// Returns views into `key`. The prefix byte is returned as-is and never
/// checked; callers scanning a shared store match it before decoding.
pub fn decode(key: &[u8]) -> Result<GrantKeyRef<'_>> {
    ensure_len(key, MIN_KEY_LEN)?;

    let prefix = key[0];
    let primary_len = key[1] as usize;

    // Primary identifier plus the secondary length byte
    let primary_end = MIN_KEY_LEN + primary_len;
    ensure_len(key, primary_end + 1)?;
    let primary = &key[MIN_KEY_LEN..primary_end];

    let secondary_len = key[primary_end] as usize;
    let secondary_start = primary_end + 1;
    let secondary_end = secondary_start + secondary_len;
    ensure_len(key, secondary_end)?;
    let secondary = &key[secondary_start..secondary_end];

    let label = &key[secondary_end..];

    Ok(GrantKeyRef {
        prefix,
        primary,
        secondary,
        label,
    })
}

/// Fail with `TruncatedKey` unless `key` holds at least `needed` bytes
fn ensure_len(key: &[u8], needed: usize) -> Result<()> {
    if key.len() < needed {
        return Err(GrantKeyError::TruncatedKey {
            needed,
            actual: key.len(),
        });
    }
    Ok(())
}
