//! Store Module
//!
//! The ordered key-value interface composite keys are written to.
//!
//! ## Responsibilities
//! - Point reads, writes and deletes by raw key
//! - Prefix scans returning keys in byte-wise sorted order
//!
//! Persistence is left to real storage engines behind `KvStore`.
//! `MemStore` is the in-memory implementation used by the index and tests.

use std::sync::Arc;

mod memory;

pub use memory::MemStore;

/// An ordered, prefix-scannable key-value store
///
/// All methods take `&self`; implementations handle their own locking.
pub trait KvStore: Send + Sync {
    /// Get a value by key
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Put a key-value pair, replacing any existing value
    fn put(&self, key: Vec<u8>, value: Vec<u8>);

    /// Delete a key, returning whether it was present
    fn delete(&self, key: &[u8]) -> bool;

    /// All entries whose key starts with `prefix`, in byte-wise key order
    fn scan_prefix(&self, prefix: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)>;
}

/// Lets several indexes share one store
impl<T: KvStore + ?Sized> KvStore for Arc<T> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        (**self).get(key)
    }

    fn put(&self, key: Vec<u8>, value: Vec<u8>) {
        (**self).put(key, value)
    }

    fn delete(&self, key: &[u8]) -> bool {
        (**self).delete(key)
    }

    fn scan_prefix(&self, prefix: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
        (**self).scan_prefix(prefix)
    }
}
