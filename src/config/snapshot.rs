//! Cache Configuration Snapshot Module
//!
//! An immutable bundle of TTL policy, serialization strategy, key conversion
//! and prefixing rules. Builder methods consume the snapshot and return a new
//! one, so a previously obtained snapshot never changes behind its holder.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::assertions::require_object_with;
use crate::config::convert::{key_type_name, ConversionRegistry};
use crate::config::serializer::{
    JsonValueSerializer, KeySerializer, StringKeySerializer, ValueSerializer,
};
use crate::config::ttl::{FixedTtl, TtlFunction};
use crate::error::Result;

// == Key Prefix ==
/// Policy mapping a cache name to the prefix prepended to every key.
#[derive(Clone)]
enum KeyPrefix {
    Disabled,
    Computed(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl KeyPrefix {
    fn prefixed() -> Self {
        KeyPrefix::Computed(Arc::new(|cache_name: &str| format!("{cache_name}::")))
    }
}

// == Cache Configuration ==
/// Immutable cache configuration snapshot.
///
/// All shared state lives behind `Arc`, so cloning is cheap and snapshots are
/// safe to hand across threads. Builder methods take `self` and return the
/// modified copy; clone first to keep the original around.
#[derive(Clone)]
pub struct CacheConfiguration {
    ttl: Arc<dyn TtlFunction>,
    key_serializer: Arc<dyn KeySerializer>,
    value_serializer: Arc<dyn ValueSerializer>,
    conversion: ConversionRegistry,
    cache_null_values: bool,
    key_prefix: KeyPrefix,
}

impl CacheConfiguration {
    // == Constructor ==
    /// Creates the default configuration: persistent entries (zero TTL means
    /// no expiration), UTF-8 string keys, JSON values, the stock key
    /// converters, null-value caching enabled, and a `"{name}::"` key prefix.
    pub fn default_config() -> Self {
        Self {
            ttl: Arc::new(FixedTtl::persistent()),
            key_serializer: Arc::new(StringKeySerializer),
            value_serializer: Arc::new(JsonValueSerializer),
            conversion: ConversionRegistry::with_default_converters(),
            cache_null_values: true,
            key_prefix: KeyPrefix::prefixed(),
        }
    }

    // == TTL ==
    /// Replaces the TTL policy with a fixed duration applied to every entry.
    pub fn entry_ttl(self, duration: Duration) -> Self {
        self.entry_ttl_with(FixedTtl::new(duration))
    }

    /// Replaces the TTL policy with a custom function.
    pub fn entry_ttl_with(mut self, ttl: impl TtlFunction + 'static) -> Self {
        self.ttl = Arc::new(ttl);
        self
    }

    /// Returns the TTL policy invoked at entry write time.
    pub fn ttl_function(&self) -> &dyn TtlFunction {
        self.ttl.as_ref()
    }

    // == Serializers ==
    /// Replaces the key serialization strategy.
    pub fn serialize_keys_with(mut self, serializer: impl KeySerializer + 'static) -> Self {
        self.key_serializer = Arc::new(serializer);
        self
    }

    /// Replaces the value serialization strategy.
    pub fn serialize_values_with(mut self, serializer: impl ValueSerializer + 'static) -> Self {
        self.value_serializer = Arc::new(serializer);
        self
    }

    /// Returns the key serialization strategy.
    pub fn key_serialization_pair(&self) -> &dyn KeySerializer {
        self.key_serializer.as_ref()
    }

    /// Returns the value serialization strategy.
    pub fn value_serialization_pair(&self) -> &dyn ValueSerializer {
        self.value_serializer.as_ref()
    }

    // == Key Conversion ==
    /// Registers key converters against a copy of the conversion registry and
    /// returns the updated snapshot.
    pub fn configure_key_converters(mut self, configure: impl FnOnce(&mut ConversionRegistry)) -> Self {
        configure(&mut self.conversion);
        self
    }

    /// Returns the conversion registry used for typed cache keys.
    pub fn conversion_service(&self) -> &ConversionRegistry {
        &self.conversion
    }

    /// Renders a typed cache key through the conversion registry.
    ///
    /// Raises an invalid-argument error naming the key type when no converter
    /// to `String` is registered; the message is only built on failure.
    pub fn convert_key<K: 'static>(&self, key: &K) -> Result<String> {
        require_object_with(self.conversion.convert_key(key), || {
            format!(
                "Cannot convert cache key of type '{}' to String; register a converter via configure_key_converters",
                key_type_name::<K>()
            )
        })
    }

    // == Null Values ==
    /// Disables caching of absent values; the store then rejects `None` puts.
    pub fn disable_caching_null_values(mut self) -> Self {
        self.cache_null_values = false;
        self
    }

    /// Returns whether absent values may be cached.
    pub fn allows_null_values(&self) -> bool {
        self.cache_null_values
    }

    // == Key Prefix ==
    /// Disables key prefixing entirely.
    pub fn disable_key_prefix(mut self) -> Self {
        self.key_prefix = KeyPrefix::Disabled;
        self
    }

    /// Replaces the prefix computation with a custom cache-name mapping.
    pub fn compute_prefix_with(
        mut self,
        prefix: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.key_prefix = KeyPrefix::Computed(Arc::new(prefix));
        self
    }

    /// Returns the prefix for a cache name, empty when prefixing is disabled.
    pub fn prefix_for(&self, cache_name: &str) -> String {
        match &self.key_prefix {
            KeyPrefix::Disabled => String::new(),
            KeyPrefix::Computed(compute) => compute(cache_name),
        }
    }

    /// Builds the full storage key for a cache name and entry key.
    pub fn compute_key(&self, cache_name: &str, key: &str) -> String {
        format!("{}{}", self.prefix_for(cache_name), key)
    }
}

impl Default for CacheConfiguration {
    fn default() -> Self {
        Self::default_config()
    }
}

impl fmt::Debug for CacheConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConfiguration")
            .field("conversion", &self.conversion)
            .field("cache_null_values", &self.cache_null_values)
            .field(
                "key_prefix",
                &matches!(self.key_prefix, KeyPrefix::Computed(_)),
            )
            .finish()
    }
}
