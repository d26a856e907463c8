//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with staleness tracking.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached value together with the moment it was stored.
///
/// `created_at` is captured whenever the entry is (re)stored: on initial
/// fetch, on refresh, and on explicit add. An entry never represents "no
/// value" — a loader producing nothing is simply not cached.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Monotonic timestamp captured when the entry was stored
    pub created_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry timestamped now.
    pub fn new(value: V) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived the given expiration.
    ///
    /// Boundary condition: an entry is stale once its age is greater than
    /// or equal to the expiration, so a read at exactly the expiration
    /// boundary already triggers a re-fetch attempt.
    pub fn is_stale(&self, expiration: Duration) -> bool {
        self.age() >= expiration
    }

    // == Age ==
    /// Returns how long ago the entry was stored.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_fresh_on_creation() {
        let entry = CacheEntry::new("test_value");

        assert_eq!(entry.value, "test_value");
        assert!(!entry.is_stale(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_becomes_stale() {
        let entry = CacheEntry::new(42u32);

        assert!(!entry.is_stale(Duration::from_millis(50)));

        sleep(Duration::from_millis(60));

        assert!(entry.is_stale(Duration::from_millis(50)));
    }

    #[test]
    fn test_entry_age_increases() {
        let entry = CacheEntry::new(());

        let first = entry.age();
        sleep(Duration::from_millis(10));
        let second = entry.age();

        assert!(second > first);
    }

    #[test]
    fn test_staleness_boundary_condition() {
        // Zero expiration means any age qualifies as stale.
        let entry = CacheEntry::new("test");
        assert!(entry.is_stale(Duration::ZERO), "entry should be stale at boundary");
    }
}
