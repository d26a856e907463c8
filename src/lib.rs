//! Readthrough - a transparent read-through in-memory cache
//!
//! Callers ask for a value by key; on a miss a supplied loader produces the
//! value, which is cached for subsequent lookups. Entries can expire after a
//! configurable age (triggering a re-fetch on the next read) and the cache
//! can be size-bounded, evicting the least-recently-touched entry first.
//!
//! ```
//! use readthrough::{CacheConfig, CacheEngine};
//!
//! let mut cache = CacheEngine::with_config(
//!     |key: &u32| Some(key.to_string()),
//!     CacheConfig::new().with_limit(100).with_expiration_ms(60_000),
//! );
//!
//! assert_eq!(cache.get(&1), Some("1".to_string()));
//! assert_eq!(cache.len(), 1);
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheEngine, CacheEngineBuilder, CacheEntry, CacheStats, RecencyMap, RecencyStore};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
