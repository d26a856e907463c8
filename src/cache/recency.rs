//! Recency Store Module
//!
//! The ordered keyed container the engine delegates to, specified as a trait
//! so the backing structure can be swapped. The engine only relies on the
//! recency signal: reading or writing a key marks it recently touched, and
//! the store can always name its least-recently-touched key as the eviction
//! candidate.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

// == Recency Store Contract ==
/// A keyed container that tracks access recency.
///
/// Any structure satisfying these rules is conformant — a self-adjusting
/// tree, an access-order list, a clock, and so on:
/// - `get` and `insert` mark the key as the most recently touched.
/// - `least_recently_touched` returns `None` exactly when the store is empty.
/// - At most one value is held per key; `insert` replaces.
pub trait RecencyStore<K, V> {
    /// Looks up a key, marking it recently touched on a hit.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Adds or replaces the value for a key, marking it recently touched.
    fn insert(&mut self, key: K, value: V);

    /// Removes a key, returning the stored value if it was present.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns true if the store holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current eviction candidate without removing it.
    ///
    /// Must be `None` only when the store is empty.
    fn least_recently_touched(&self) -> Option<&K>;
}

// == Recency Map ==
/// Default `RecencyStore` backed by a HashMap plus an access-order list.
///
/// Keys live in a VecDeque where:
/// - Front = most recently touched
/// - Back = least recently touched (eviction candidate)
#[derive(Debug)]
pub struct RecencyMap<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Order of keys by access time
    order: VecDeque<K>,
}

impl<K, V> RecencyMap<K, V> {
    // == Constructor ==
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }
}

impl<K, V> Default for RecencyMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> RecencyMap<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Touch ==
    /// Marks a key as recently touched (moves it to the front).
    fn touch(&mut self, key: &K) {
        self.order.retain(|k| k != key);
        self.order.push_front(key.clone());
    }
}

impl<K, V> RecencyStore<K, V> for RecencyMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        if self.entries.contains_key(key) {
            self.touch(key);
        }
        self.entries.get(key)
    }

    fn insert(&mut self, key: K, value: V) {
        self.touch(&key);
        self.entries.insert(key, value);
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.order.retain(|k| k != key);
        }
        removed
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn least_recently_touched(&self) -> Option<&K> {
        self.order.back()
    }
}
