//! Conversion Registry Module
//!
//! Type-indexed converter registrations used to render typed cache keys as
//! strings before they reach the store.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type ConverterFn = Arc<dyn Fn(&dyn Any) -> Box<dyn Any> + Send + Sync>;

// == Conversion Registry ==
/// Registry of converter functions keyed by (source, target) type pair.
///
/// Cloning the registry shares the registered converter functions but copies
/// the index, so adding a converter to a clone never affects the original.
#[derive(Clone, Default)]
pub struct ConversionRegistry {
    converters: HashMap<(TypeId, TypeId), ConverterFn>,
}

impl ConversionRegistry {
    // == Constructor ==
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-loaded with the stock key conversions:
    /// `String` and the common integer types to `String`.
    pub fn with_default_converters() -> Self {
        let mut registry = Self::new();
        registry.add_converter(|s: &String| s.clone());
        registry.add_converter(|n: &u64| n.to_string());
        registry.add_converter(|n: &i64| n.to_string());
        registry.add_converter(|n: &u32| n.to_string());
        registry.add_converter(|n: &i32| n.to_string());
        registry
    }

    // == Add Converter ==
    /// Registers a converter from `S` to `T`, replacing any previous
    /// registration for the same type pair.
    pub fn add_converter<S, T, F>(&mut self, convert: F)
    where
        S: 'static,
        T: 'static,
        F: Fn(&S) -> T + Send + Sync + 'static,
    {
        let erased: ConverterFn = Arc::new(move |source: &dyn Any| {
            // The map key guarantees the downcast succeeds.
            let source = source
                .downcast_ref::<S>()
                .unwrap_or_else(|| unreachable!("converter invoked with wrong source type"));
            Box::new(convert(source))
        });
        self.converters
            .insert((TypeId::of::<S>(), TypeId::of::<T>()), erased);
    }

    // == Can Convert ==
    /// Returns whether a converter from `S` to `T` is registered.
    pub fn can_convert<S: 'static, T: 'static>(&self) -> bool {
        self.converters
            .contains_key(&(TypeId::of::<S>(), TypeId::of::<T>()))
    }

    // == Convert ==
    /// Converts `source` to `T`, or `None` if no converter is registered.
    pub fn convert<S: 'static, T: 'static>(&self, source: &S) -> Option<T> {
        let converter = self.converters.get(&(TypeId::of::<S>(), TypeId::of::<T>()))?;
        converter(source).downcast::<T>().ok().map(|boxed| *boxed)
    }

    /// Converts a typed cache key to its string form, or `None` if the key
    /// type has no registered converter to `String`.
    pub fn convert_key<K: 'static>(&self, key: &K) -> Option<String> {
        self.convert::<K, String>(key)
    }

    /// Number of registered converters.
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Returns whether the registry has no converters.
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl fmt::Debug for ConversionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionRegistry")
            .field("converters", &self.converters.len())
            .finish()
    }
}

/// Human-readable name of a key type, for error messages.
pub(crate) fn key_type_name<K>() -> &'static str {
    type_name::<K>()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    struct DomainType {
        id: u64,
    }

    #[test]
    fn test_registered_converter_is_discoverable() {
        let mut registry = ConversionRegistry::new();
        assert!(!registry.can_convert::<DomainType, String>());

        registry.add_converter(|d: &DomainType| format!("domain:{}", d.id));

        assert!(registry.can_convert::<DomainType, String>());
    }

    #[test]
    fn test_convert_applies_registered_function() {
        let mut registry = ConversionRegistry::new();
        registry.add_converter(|d: &DomainType| format!("domain:{}", d.id));

        let converted = registry.convert_key(&DomainType { id: 7 });
        assert_eq!(converted.as_deref(), Some("domain:7"));
    }

    #[test]
    fn test_convert_without_registration_is_none() {
        let registry = ConversionRegistry::new();
        assert!(registry.convert_key(&DomainType { id: 7 }).is_none());
    }

    #[test]
    fn test_default_converters_cover_common_key_types() {
        let registry = ConversionRegistry::with_default_converters();

        assert_eq!(registry.convert_key(&"k1".to_string()).as_deref(), Some("k1"));
        assert_eq!(registry.convert_key(&42u64).as_deref(), Some("42"));
        assert_eq!(registry.convert_key(&-3i32).as_deref(), Some("-3"));
    }

    #[test]
    fn test_clone_isolates_later_registrations() {
        let original = ConversionRegistry::new();
        let mut clone = original.clone();

        clone.add_converter(|d: &DomainType| format!("domain:{}", d.id));

        assert!(clone.can_convert::<DomainType, String>());
        assert!(!original.can_convert::<DomainType, String>());
    }
}
