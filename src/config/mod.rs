//! Configuration Module
//!
//! Immutable cache configuration snapshots and the policies they bundle:
//! TTL computation, key/value serialization, key conversion and prefixing.

mod convert;
mod serializer;
mod snapshot;
mod ttl;

// Re-export public types
pub use convert::ConversionRegistry;
pub use serializer::{JsonValueSerializer, KeySerializer, StringKeySerializer, ValueSerializer};
pub use snapshot::CacheConfiguration;
pub use ttl::{FixedTtl, TtlFunction};
