//! Configuration for grantkey
//!
//! Centralized configuration with sensible defaults.

use crate::key::GRANT_PREFIX;

/// Configuration for a grant index
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Key Layout Configuration
    // -------------------------------------------------------------------------
    /// Leading byte of every key in this record family
    ///
    /// Scans only ever visit keys that start with this byte, so two indexes
    /// sharing one store must use different prefixes.
    pub record_prefix: u8,

    // -------------------------------------------------------------------------
    // Logging Configuration
    // -------------------------------------------------------------------------
    /// Emit a trace event for every key decoded during a scan
    pub trace_scans: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            record_prefix: GRANT_PREFIX,
            trace_scans: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the record family prefix byte
    pub fn record_prefix(mut self, prefix: u8) -> Self {
        self.config.record_prefix = prefix;
        self
    }

    /// Enable or disable per-key scan tracing
    pub fn trace_scans(mut self, enabled: bool) -> Self {
        self.config.trace_scans = enabled;
        self
    }

    /// Build the config
    pub fn build(self) -> Config {
        self.config
    }
}
