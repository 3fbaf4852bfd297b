//! Grants Module
//!
//! Grant records addressed by composite keys.
//!
//! ## Key Mapping
//! ```text
//! [prefix][granter len][granter][grantee len][grantee][msg type url]
//! ```
//!
//! ## Scans
//! - by granter:          `primary_prefix(prefix, granter)`
//! - by granter + grantee: `pair_prefix(prefix, granter, grantee)`
//! - whole family:         `[prefix]`

mod index;
mod record;

pub use index::GrantIndex;
pub use record::GrantRecord;
