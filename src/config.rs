//! Configuration Module
//!
//! Construction-time cache policy parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cache policy configuration.
///
/// Built once at engine construction and immutable afterwards. Both knobs
/// default to `0`, which disables the corresponding policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold (0 = unbounded)
    pub limit: usize,
    /// Maximum entry age in milliseconds before a read re-fetches (0 = never expires)
    pub expiration_ms: u64,
}

impl CacheConfig {
    // == Constructor ==
    /// Creates a configuration with both policies disabled.
    pub fn new() -> Self {
        Self::default()
    }

    // == Limit ==
    /// Sets the maximum entry count; `0` means unbounded.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    // == Expiration ==
    /// Sets the maximum entry age in milliseconds; `0` means entries never expire.
    pub fn with_expiration_ms(mut self, expiration_ms: u64) -> Self {
        self.expiration_ms = expiration_ms;
        self
    }

    // == Expiration As Duration ==
    /// Returns the expiration as a `Duration`, or `None` when expiry is disabled.
    pub fn expiration(&self) -> Option<Duration> {
        if self.expiration_ms > 0 {
            Some(Duration::from_millis(self.expiration_ms))
        } else {
            None
        }
    }

    // == Is Bounded ==
    /// Returns true if a size limit is configured.
    pub fn is_bounded(&self) -> bool {
        self.limit > 0
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            limit: 0,
            expiration_ms: 0,
        }
    }
}
