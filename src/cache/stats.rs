//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, loads, and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
///
/// Observability only; counters never influence the cache policy. A hit is a
/// `get` that found the key (fresh or stale), a miss is a `get` for an absent
/// key, and a load is any loader invocation regardless of its trigger.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of lookups that found a cached entry
    pub hits: u64,
    /// Number of lookups for keys not in the cache
    pub misses: u64,
    /// Number of loader invocations (miss, expiry re-fetch, or refresh)
    pub loads: u64,
    /// Number of entries evicted to respect the size limit
    pub evictions: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Load ==
    /// Increments the loader-invocation counter.
    pub fn record_load(&mut self) {
        self.loads += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
