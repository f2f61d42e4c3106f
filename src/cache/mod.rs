//! Cache Module
//!
//! Provides an in-memory cache whose TTL, key, and serialization behavior is
//! driven by a configuration snapshot.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
