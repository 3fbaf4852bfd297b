//! Key Module
//!
//! Composite keys for records identified by two addresses and a label.
//!
//! ## Key Format (V1 - Length Prefixed)
//!
//! ```text
//! ┌──────────┬────────┬──────────────┬────────┬──────────────┬─────────────┐
//! │Prefix (1)│ L1 (1) │ Primary (L1) │ L2 (1) │Secondary (L2)│    Label    │
//! └──────────┴────────┴──────────────┴────────┴──────────────┴─────────────┘
//! ```
//!
//! - Prefix: record family, opaque to the codec
//! - L1 / L2: identifier lengths, 0..=255
//! - Label: everything after the secondary identifier (may be empty)
//!
//! ## Ordering
//! Byte-wise order groups keys by primary identifier, then by secondary.
//! `primary_prefix` and `pair_prefix` build the scan prefixes for those
//! groups.

mod codec;
mod types;

pub use codec::{
    decode, encode, encoded_len, length_prefix, pair_prefix, primary_prefix,
};
pub use types::{GrantKey, GrantKeyRef};

/// Prefix byte of the grant record family
pub const GRANT_PREFIX: u8 = 0x01;

/// Largest identifier a one-byte length field can describe
pub const MAX_IDENTIFIER_LEN: usize = u8::MAX as usize;

/// Prefix byte + primary length byte
pub const MIN_KEY_LEN: usize = 2;
