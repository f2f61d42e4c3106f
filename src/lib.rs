//! Cachekit - cache configuration snapshots with pluggable TTL policies
//!
//! Provides immutable, builder-style cache configuration (TTL policy, key and
//! value serialization, key conversion and prefixing), argument assertions,
//! and an in-memory store driven by a configuration snapshot.

pub mod assertions;
pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheEntry, CacheStats, CacheStore};
pub use config::{CacheConfiguration, FixedTtl, TtlFunction};
pub use error::{CacheError, Result};
