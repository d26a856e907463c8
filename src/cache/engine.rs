//! Cache Engine Module
//!
//! The read-through policy engine: lazy population on miss, time-based
//! expiration with re-fetch, size-bounded storage with recency-biased
//! eviction, and explicit mutation.

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, RecencyMap, RecencyStore};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Loader ==
/// Caller-supplied function mapping a key to a value, or `None` when the
/// backing source has nothing for that key.
///
/// Invoked on cache miss, on expiry re-fetch, and on explicit refresh; it
/// must tolerate being called repeatedly for the same key.
pub type Loader<K, V> = Box<dyn FnMut(&K) -> Option<V>>;

/// Outcome of a store lookup, resolved before the loader may run.
enum Lookup<V> {
    Fresh(V),
    Stale(V),
    Miss,
}

// == Cache Engine ==
/// Read-through cache combining a recency store with a loader function.
///
/// The engine is the sole owner of all cache entries and the sole caller of
/// the loader. It is single-threaded and non-reentrant: every operation
/// takes `&mut self` and mutates the store in place. Lookups return owned
/// clones of cached values, never references into the store.
///
/// The backing container defaults to [`RecencyMap`] but any
/// [`RecencyStore`] implementation can be substituted via
/// [`CacheEngine::with_store`].
pub struct CacheEngine<K, V, S = RecencyMap<K, CacheEntry<V>>> {
    /// Value source consulted on miss, expiry, and refresh
    loader: Loader<K, V>,
    /// Entry storage with recency tracking
    store: S,
    /// Immutable policy configuration
    config: CacheConfig,
    /// Performance statistics
    stats: CacheStats,
}

impl<K, V> CacheEngine<K, V> {
    // == Constructor ==
    /// Creates an engine with default configuration (unbounded, no expiry).
    pub fn new(loader: impl FnMut(&K) -> Option<V> + 'static) -> Self {
        Self::with_config(loader, CacheConfig::default())
    }

    /// Creates an engine with the given policy configuration.
    pub fn with_config(loader: impl FnMut(&K) -> Option<V> + 'static, config: CacheConfig) -> Self {
        Self::with_store(loader, config, RecencyMap::new())
    }

    // == Builder ==
    /// Returns a builder for step-by-step construction.
    ///
    /// The builder is the fallible construction path: `build()` reports a
    /// [`CacheError::MissingLoader`] when no loader was supplied.
    pub fn builder() -> CacheEngineBuilder<K, V> {
        CacheEngineBuilder::new()
    }
}

impl<K, V, S> CacheEngine<K, V, S> {
    /// Creates an engine on top of a caller-supplied recency store.
    pub fn with_store(
        loader: impl FnMut(&K) -> Option<V> + 'static,
        config: CacheConfig,
        store: S,
    ) -> Self {
        Self {
            loader: Box::new(loader),
            store,
            config,
            stats: CacheStats::new(),
        }
    }
}

impl<K, V, S> CacheEngine<K, V, S>
where
    K: Clone,
    V: Clone,
    S: RecencyStore<K, CacheEntry<V>> + Default,
{
    // == Get ==
    /// Retrieves the value for a key, loading it on a miss.
    ///
    /// - Cached and fresh: returns the stored value.
    /// - Cached but older than the configured expiration: invokes the loader;
    ///   a new value replaces the entry under the same key (count unchanged),
    ///   while an empty loader result keeps serving the stale value —
    ///   expiration alone never produces a miss.
    /// - Not cached: invokes the loader; a value is stored (evicting to stay
    ///   under the limit) and returned, an empty result caches nothing.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let lookup = match self.store.get(key) {
            Some(entry) => {
                let stale = self
                    .config
                    .expiration()
                    .map_or(false, |expiration| entry.is_stale(expiration));
                if stale {
                    Lookup::Stale(entry.value.clone())
                } else {
                    Lookup::Fresh(entry.value.clone())
                }
            }
            None => Lookup::Miss,
        };

        match lookup {
            Lookup::Fresh(value) => {
                trace!("cache hit");
                self.stats.record_hit();
                Some(value)
            }
            Lookup::Stale(stale_value) => {
                self.stats.record_hit();
                self.stats.record_load();
                match (self.loader)(key) {
                    Some(value) => {
                        debug!("expired entry re-fetched");
                        // Replace in place under the key being read; the
                        // entry count does not change, so no eviction.
                        self.store.insert(key.clone(), CacheEntry::new(value.clone()));
                        self.stats.set_total_entries(self.store.len());
                        Some(value)
                    }
                    None => {
                        debug!("loader found nothing for expired entry, serving stale value");
                        Some(stale_value)
                    }
                }
            }
            Lookup::Miss => {
                trace!("cache miss");
                self.stats.record_miss();
                self.stats.record_load();
                match (self.loader)(key) {
                    Some(value) => {
                        self.insert_bounded(key.clone(), CacheEntry::new(value.clone()));
                        Some(value)
                    }
                    None => None,
                }
            }
        }
    }

    // == Add ==
    /// Unconditionally stores a value, bypassing the loader and freshness
    /// checks.
    ///
    /// An existing key is replaced in place with a fresh timestamp; a new key
    /// goes through the same bounded insertion as a loaded value.
    pub fn add(&mut self, key: K, value: V) {
        if self.store.get(&key).is_some() {
            self.store.insert(key, CacheEntry::new(value));
            self.stats.set_total_entries(self.store.len());
        } else {
            self.insert_bounded(key, CacheEntry::new(value));
        }
    }

    // == Remove ==
    /// Removes the entry for a key, returning its value if it was cached.
    ///
    /// Removing an absent key is a silent no-op, never an error.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self.store.remove(key).map(|entry| entry.value);
        self.stats.set_total_entries(self.store.len());
        removed
    }

    // == Remove All ==
    /// Discards every entry by swapping in a fresh empty store.
    ///
    /// Every previously cached key behaves as a first-time miss afterwards.
    pub fn remove_all(&mut self) {
        self.store = S::default();
        self.stats.set_total_entries(0);
        debug!("cache cleared");
    }

    // == Refresh ==
    /// Forces a re-fetch for a currently cached key, returning the new value.
    ///
    /// The stored entry is dropped first, so the subsequent lookup loads
    /// regardless of age. A key that was never cached returns `None` without
    /// invoking the loader — refresh never creates an entry.
    pub fn refresh(&mut self, key: &K) -> Option<V> {
        if self.store.remove(key).is_none() {
            return None;
        }
        debug!("refreshing cached entry");
        self.stats.set_total_entries(self.store.len());
        self.get(key)
    }

    // == Length ==
    /// Returns the current entry count, including entries that are already
    /// stale but not yet re-fetched (staleness is resolved lazily on read,
    /// never swept proactively).
    pub fn len(&self) -> usize {
        self.store.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.store.len());
        stats
    }

    // == Config ==
    /// Returns the policy configuration the engine was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Bounded Insertion ==
    /// Inserts an entry for a key known to be absent, evicting
    /// least-recently-touched entries first when a limit is configured.
    ///
    /// The loop stops as soon as the store names no candidate, so a
    /// pathological or empty store cannot spin it forever.
    fn insert_bounded(&mut self, key: K, entry: CacheEntry<V>) {
        if self.config.is_bounded() {
            while self.store.len() >= self.config.limit {
                let Some(victim) = self.store.least_recently_touched().cloned() else {
                    break;
                };
                self.store.remove(&victim);
                self.stats.record_eviction();
                debug!("evicted least-recently-touched entry");
            }
        }
        self.store.insert(key, entry);
        self.stats.set_total_entries(self.store.len());
    }
}

// == Builder ==
/// Step-by-step construction for [`CacheEngine`].
///
/// A loader is the one mandatory ingredient; [`build`](Self::build) fails
/// with [`CacheError::MissingLoader`] without one. Policy knobs default to
/// disabled.
pub struct CacheEngineBuilder<K, V> {
    loader: Option<Loader<K, V>>,
    config: CacheConfig,
}

impl<K, V> CacheEngineBuilder<K, V> {
    /// Creates a builder with no loader and default configuration.
    pub fn new() -> Self {
        Self {
            loader: None,
            config: CacheConfig::default(),
        }
    }

    /// Sets the loader function.
    pub fn loader(mut self, loader: impl FnMut(&K) -> Option<V> + 'static) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    /// Sets the maximum entry count; `0` means unbounded.
    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = limit;
        self
    }

    /// Sets the maximum entry age in milliseconds; `0` means never expire.
    pub fn expiration_ms(mut self, expiration_ms: u64) -> Self {
        self.config.expiration_ms = expiration_ms;
        self
    }

    /// Replaces the whole configuration at once.
    pub fn config(mut self, config: CacheConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the engine, failing if no loader was supplied.
    pub fn build(self) -> Result<CacheEngine<K, V>> {
        let loader = self.loader.ok_or(CacheError::MissingLoader)?;
        Ok(CacheEngine {
            loader,
            store: RecencyMap::new(),
            config: self.config,
            stats: CacheStats::new(),
        })
    }
}

impl<K, V> Default for CacheEngineBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
