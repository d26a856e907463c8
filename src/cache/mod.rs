//! Cache Module
//!
//! Read-through caching with lazy loading, TTL re-fetch, and recency-biased
//! eviction.

mod engine;
mod entry;
mod recency;
mod stats;


// Re-export public types
pub use engine::{CacheEngine, CacheEngineBuilder, Loader};
pub use entry::CacheEntry;
pub use recency::{RecencyMap, RecencyStore};
pub use stats::CacheStats;
