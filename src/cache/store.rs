//! Cache Store Module
//!
//! An in-memory cache driven entirely by a [`CacheConfiguration`] snapshot:
//! entry TTLs come from the configured TTL policy, keys are prefixed and
//! converted per the snapshot, values go through the configured serializer.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, trace};

use crate::assertions::require_object_with;
use crate::cache::{CacheEntry, CacheStats};
use crate::config::CacheConfiguration;
use crate::error::{CacheError, Result};

// == Cache Store ==
/// In-memory store honoring a cache configuration snapshot.
///
/// The snapshot is captured at construction; replacing policies on a config
/// afterwards never changes the behavior of an existing store.
#[derive(Debug)]
pub struct CacheStore {
    /// Cache name, fed to the key-prefix policy
    name: String,
    /// Configuration snapshot captured at construction
    config: CacheConfiguration,
    /// Key-value storage, keyed by the fully prefixed key
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a named store backed by the given configuration snapshot.
    pub fn new(name: impl Into<String>, config: CacheConfiguration) -> Self {
        Self {
            name: name.into(),
            config,
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    /// The cache name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configuration snapshot this store was built from.
    pub fn config(&self) -> &CacheConfiguration {
        &self.config
    }

    // == Put ==
    /// Stores a value under `key`, overwriting any previous entry.
    ///
    /// The entry TTL is computed by the configured TTL policy from the key
    /// and value as supplied by the caller. A `None` value is stored as JSON
    /// null when the configuration allows null caching, and rejected with an
    /// invalid-argument error otherwise.
    pub fn put(&mut self, key: &str, value: Option<Value>) -> Result<()> {
        let value = if self.config.allows_null_values() {
            value.unwrap_or(Value::Null)
        } else {
            require_object_with(value, || {
                format!(
                    "Cache '{}' does not allow 'None' values; enable null-value caching or store a concrete value",
                    self.name
                )
            })?
        };

        let ttl = self
            .config
            .ttl_function()
            .compute_time_to_live(key, Some(&value));
        let bytes = self.config.value_serialization_pair().serialize(&value)?;
        let full_key = self.config.compute_key(&self.name, key);

        debug!(cache = %self.name, key, ttl_ms = ttl.as_millis() as u64, "put");

        self.entries.insert(full_key, CacheEntry::new(bytes, ttl));
        self.stats.update_entry_count(self.entries.len());
        Ok(())
    }

    /// Stores a value under a typed key routed through the conversion
    /// registry.
    pub fn put_with_key<K: 'static>(&mut self, key: &K, value: Option<Value>) -> Result<()> {
        let key = self.config.convert_key(key)?;
        self.put(&key, value)
    }

    // == Get ==
    /// Retrieves and deserializes the value stored under `key`.
    ///
    /// Expiry is applied lazily: an entry whose TTL has elapsed is removed
    /// here and reported as [`CacheError::Expired`].
    pub fn get(&mut self, key: &str) -> Result<Value> {
        let full_key = self.config.compute_key(&self.name, key);

        let Some(entry) = self.entries.get(&full_key) else {
            self.stats.record_miss();
            trace!(cache = %self.name, key, "miss");
            return Err(CacheError::NotFound(key.to_string()));
        };

        if entry.is_expired() {
            self.entries.remove(&full_key);
            self.stats.record_expiration();
            self.stats.record_miss();
            self.stats.update_entry_count(self.entries.len());
            debug!(cache = %self.name, key, "expired on read");
            return Err(CacheError::Expired(key.to_string()));
        }

        let value = self
            .config
            .value_serialization_pair()
            .deserialize(&entry.value)?;
        self.stats.record_hit();
        trace!(cache = %self.name, key, "hit");
        Ok(value)
    }

    /// Retrieves the value stored under a typed key.
    pub fn get_with_key<K: 'static>(&mut self, key: &K) -> Result<Value> {
        let key = self.config.convert_key(key)?;
        self.get(&key)
    }

    // == Delete ==
    /// Removes the entry stored under `key`.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        let full_key = self.config.compute_key(&self.name, key);

        match self.entries.remove(&full_key) {
            Some(_) => {
                self.stats.update_entry_count(self.entries.len());
                debug!(cache = %self.name, key, "delete");
                Ok(())
            }
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == TTL Inspection ==
    /// Remaining TTL in whole seconds for `key`, `None` when the entry is
    /// persistent.
    pub fn ttl_remaining(&self, key: &str) -> Result<Option<u64>> {
        let full_key = self.config.compute_key(&self.name, key);
        let entry = self
            .entries
            .get(&full_key)
            .ok_or_else(|| CacheError::NotFound(key.to_string()))?;
        Ok(entry.ttl_remaining())
    }

    // == Purge Expired ==
    /// Removes every entry whose TTL has elapsed, returning the count.
    pub fn purge_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();

        if removed > 0 {
            for _ in 0..removed {
                self.stats.record_expiration();
            }
            self.stats.update_entry_count(self.entries.len());
            debug!(cache = %self.name, removed, "purged expired entries");
        }
        removed
    }

    // == Introspection ==
    /// Current number of entries, expired-but-unswept included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A snapshot of the performance counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }
}
