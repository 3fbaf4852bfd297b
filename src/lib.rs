//! # grantkey
//!
//! Composite keys for grant records in an ordered key-value store:
//! - Length-prefixed granter/grantee identifiers (up to 255 bytes each)
//! - Trailing message type label of any length
//! - Byte-wise ordering that groups keys by granter, then grantee
//! - Prefix scans over a pluggable store
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        GrantIndex                            │
//! │              (save / get / delete / scans)                   │
//! └──────────────┬───────────────────────────────┬──────────────┘
//!                │                               │
//!                ▼                               ▼
//!        ┌──────────────┐                ┌──────────────┐
//!        │  Key Codec   │                │   KvStore    │
//!        │encode/decode │                │ (MemStore or │
//!        └──────────────┘                │  host store) │
//!                                        └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod key;
pub mod store;
pub mod grants;
pub mod inspect;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{GrantKeyError, Result};
pub use config::Config;
pub use key::{decode, encode, GrantKey, GrantKeyRef};
pub use store::{KvStore, MemStore};
pub use grants::{GrantIndex, GrantRecord};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of grantkey
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
