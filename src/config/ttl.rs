//! TTL Policy Module
//!
//! Defines the pluggable time-to-live policy invoked by the store at write
//! time to decide entry expiration.

use std::time::Duration;

use serde_json::Value;

// == TTL Function ==
/// Strategy computing the time-to-live for a cache entry.
///
/// The owning store invokes this with the entry key and the value being
/// written (`None` when caching an absent value). The returned duration is
/// used as-is: no clamping or validation is applied, and `Duration::ZERO`
/// means the entry never expires.
pub trait TtlFunction: Send + Sync {
    /// Computes the time-to-live for the given key and value.
    fn compute_time_to_live(&self, key: &str, value: Option<&Value>) -> Duration;
}

// Any matching closure is a TTL policy.
impl<F> TtlFunction for F
where
    F: Fn(&str, Option<&Value>) -> Duration + Send + Sync,
{
    fn compute_time_to_live(&self, key: &str, value: Option<&Value>) -> Duration {
        self(key, value)
    }
}

// == Fixed TTL ==
/// Adapter lifting a constant [`Duration`] into a [`TtlFunction`].
///
/// Pure and stateless: every invocation returns the identical duration,
/// regardless of key or value (including an absent value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTtl(Duration);

impl FixedTtl {
    // == Constructor ==
    /// Creates a policy that always returns `duration`.
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    /// Creates a policy under which entries never expire.
    pub fn persistent() -> Self {
        Self(Duration::ZERO)
    }

    /// Returns the fixed duration.
    pub fn duration(&self) -> Duration {
        self.0
    }
}

impl TtlFunction for FixedTtl {
    fn compute_time_to_live(&self, _key: &str, _value: Option<&Value>) -> Duration {
        self.0
    }
}

impl From<Duration> for FixedTtl {
    fn from(duration: Duration) -> Self {
        Self::new(duration)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fixed_ttl_returns_duration_for_any_input() {
        let ttl = FixedTtl::new(Duration::from_secs(10));

        assert_eq!(
            ttl.compute_time_to_live("any-key", Some(&json!("value"))),
            Duration::from_secs(10)
        );
        assert_eq!(
            ttl.compute_time_to_live("other-key", Some(&json!(42))),
            Duration::from_secs(10)
        );
        assert_eq!(
            ttl.compute_time_to_live("", None),
            Duration::from_secs(10)
        );
    }

    #[test]
    fn test_fixed_ttl_is_stable_across_repeated_calls() {
        let ttl = FixedTtl::new(Duration::from_secs(10));

        for _ in 0..3 {
            assert_eq!(ttl.compute_time_to_live("key", None), Duration::from_secs(10));
        }
    }

    #[test]
    fn test_persistent_ttl_is_zero() {
        let ttl = FixedTtl::persistent();
        assert_eq!(ttl.compute_time_to_live("key", None), Duration::ZERO);
    }

    #[test]
    fn test_closure_output_is_forwarded_exactly() {
        let ttl = |_key: &str, value: Option<&Value>| {
            Duration::from_secs(value.and_then(Value::as_u64).unwrap_or(0) + 10)
        };

        assert_eq!(
            ttl.compute_time_to_live("key", Some(&json!(10))),
            Duration::from_secs(20)
        );
        assert_eq!(
            ttl.compute_time_to_live("key", Some(&json!(20))),
            Duration::from_secs(30)
        );
    }

    #[test]
    fn test_closure_receives_key_and_value_unmodified() {
        let ttl = |key: &str, value: Option<&Value>| {
            assert_eq!(key, "sessions::42");
            assert_eq!(value, Some(&json!({"user": 42})));
            Duration::from_secs(1)
        };

        let computed = ttl.compute_time_to_live("sessions::42", Some(&json!({"user": 42})));
        assert_eq!(computed, Duration::from_secs(1));
    }
}
