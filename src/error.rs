//! Error types for the cache library
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache construction.
///
/// The error surface is deliberately small: missing keys, expired entries
/// and loaders that find nothing are all expressed as `None` results, never
/// as errors. The only failure the library itself signals is a misconfigured
/// construction.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Engine was built without a loader function
    #[error("a loader is required: it is invoked whenever a key is not found in the cache")]
    MissingLoader,
}

// == Result Type Alias ==
/// Convenience Result type for the cache library.
pub type Result<T> = std::result::Result<T, CacheError>;
