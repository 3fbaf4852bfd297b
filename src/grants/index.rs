//! Grant index
//!
//! Writes grant records under composite keys and recovers their identity
//! from keys during prefix scans.

use crate::config::Config;
use crate::error::Result;
use crate::key::{self, GrantKey};
use crate::store::KvStore;

use super::GrantRecord;

/// Grant records for one record family in a key-value store
///
/// Granter is the primary identifier, grantee the secondary, and the
/// message type URL the label.
pub struct GrantIndex<S: KvStore> {
    /// Underlying ordered store
    store: S,

    /// Leading byte of every key this index writes or scans
    prefix: u8,

    /// Trace each decoded key during scans
    trace_scans: bool,
}

impl<S: KvStore> GrantIndex<S> {
    /// Create an index over `store`
    pub fn new(store: S, config: &Config) -> Self {
        tracing::debug!(prefix = config.record_prefix, "grant index created");
        Self {
            store,
            prefix: config.record_prefix,
            trace_scans: config.trace_scans,
        }
    }

    /// Record family prefix byte
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Key a grant is stored under
    pub fn grant_key(&self, granter: &[u8], grantee: &[u8], msg_type: &str) -> Result<Vec<u8>> {
        key::encode(self.prefix, granter, grantee, msg_type.as_bytes())
    }

    // =========================================================================
    // Point Operations
    // =========================================================================

    /// Store a grant, replacing any existing one for the same key
    pub fn save(
        &self,
        granter: &[u8],
        grantee: &[u8],
        msg_type: &str,
        record: &GrantRecord,
    ) -> Result<()> {
        let key = self.grant_key(granter, grantee, msg_type)?;
        let value = record.serialize()?;

        tracing::debug!(msg_type, key_len = key.len(), "saving grant");
        self.store.put(key, value);
        Ok(())
    }

    /// Look up a grant
    pub fn get(&self, granter: &[u8], grantee: &[u8], msg_type: &str) -> Result<Option<GrantRecord>> {
        let key = self.grant_key(granter, grantee, msg_type)?;
        self.store
            .get(&key)
            .map(|value| GrantRecord::deserialize(&value))
            .transpose()
    }

    /// Remove a grant, returning whether it existed
    pub fn delete(&self, granter: &[u8], grantee: &[u8], msg_type: &str) -> Result<bool> {
        let key = self.grant_key(granter, grantee, msg_type)?;
        let removed = self.store.delete(&key);

        tracing::debug!(msg_type, removed, "deleting grant");
        Ok(removed)
    }

    // =========================================================================
    // Prefix Scans
    // =========================================================================

    /// All grants issued by `granter`, ordered by grantee then message type
    pub fn grants_by_granter(&self, granter: &[u8]) -> Result<Vec<(GrantKey, GrantRecord)>> {
        let prefix = key::primary_prefix(self.prefix, granter)?;
        self.scan(&prefix)
    }

    /// All grants from `granter` to `grantee`, ordered by message type
    pub fn grants_by_pair(&self, granter: &[u8], grantee: &[u8]) -> Result<Vec<(GrantKey, GrantRecord)>> {
        let prefix = key::pair_prefix(self.prefix, granter, grantee)?;
        self.scan(&prefix)
    }

    /// Every grant in this record family
    pub fn all_grants(&self) -> Result<Vec<(GrantKey, GrantRecord)>> {
        self.scan(&[self.prefix])
    }

    /// Decode every entry under `prefix`
    ///
    /// Stops at the first malformed key or value; a truncated key is an
    /// integrity violation, not something to skip.
    fn scan(&self, prefix: &[u8]) -> Result<Vec<(GrantKey, GrantRecord)>> {
        let entries = self.store.scan_prefix(prefix);
        let mut grants = Vec::with_capacity(entries.len());

        for (raw_key, value) in entries {
            let decoded = key::decode(&raw_key).map_err(|e| {
                tracing::warn!(key_len = raw_key.len(), error = %e, "malformed grant key");
                e
            })?;

            if self.trace_scans {
                tracing::trace!(
                    granter_len = decoded.primary.len(),
                    grantee_len = decoded.secondary.len(),
                    msg_type = decoded.label_str().unwrap_or("<binary>"),
                    "decoded grant key"
                );
            }

            let record = GrantRecord::deserialize(&value)?;
            grants.push((decoded.to_owned_key(), record));
        }

        tracing::debug!(prefix_len = prefix.len(), found = grants.len(), "grant scan");
        Ok(grants)
    }
}
