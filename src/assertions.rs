//! Argument Assertions Module
//!
//! Null-precondition checks that return the checked value unchanged or raise
//! an invalid-argument error with a caller-supplied message.

use crate::error::{CacheError, Result};

// == Require Object (eager message) ==
/// Returns the contained value if present, otherwise raises
/// [`CacheError::InvalidArgument`] with the given message.
///
/// The value is passed through untouched on success. Format the message at
/// the call site when substitution is needed:
///
/// ```
/// use cachekit::assertions::require_object;
///
/// let port = require_object(Some(6379), format!("port for {} is required", "redis"))?;
/// assert_eq!(port, 6379);
/// # Ok::<(), cachekit::CacheError>(())
/// ```
pub fn require_object<T>(value: Option<T>, message: impl Into<String>) -> Result<T> {
    value.ok_or_else(|| CacheError::InvalidArgument(message.into()))
}

// == Require Object (lazy message) ==
/// Returns the contained value if present, otherwise invokes `message`
/// exactly once and raises [`CacheError::InvalidArgument`] with its result.
///
/// The supplier is never invoked when the value is present, so an expensive
/// message computation costs nothing on the success path.
pub fn require_object_with<T, F>(value: Option<T>, message: F) -> Result<T>
where
    F: FnOnce() -> String,
{
    value.ok_or_else(|| CacheError::InvalidArgument(message()))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_require_object_returns_value_unchanged() {
        let result = require_object(Some("test"), "Test message").unwrap();
        assert_eq!(result, "test");
    }

    #[test]
    fn test_require_object_raises_with_formatted_message() {
        let err = require_object(None::<&str>, format!("This is a {}", "test")).unwrap_err();

        assert!(matches!(err, CacheError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "This is a test");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_require_object_with_never_invokes_supplier_on_success() {
        let calls = Cell::new(0u32);

        let result = require_object_with(Some("mock"), || {
            calls.set(calls.get() + 1);
            "Mock message".to_string()
        })
        .unwrap();

        assert_eq!(result, "mock");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_require_object_with_invokes_supplier_exactly_once() {
        let calls = Cell::new(0u32);

        let err = require_object_with(None::<&str>, || {
            calls.set(calls.get() + 1);
            "Mock message".to_string()
        })
        .unwrap_err();

        assert_eq!(calls.get(), 1);
        assert!(matches!(err, CacheError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Mock message");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_require_object_preserves_non_copy_value() {
        let original = vec![1, 2, 3];
        let ptr = original.as_ptr();

        let returned = require_object(Some(original), "must be present").unwrap();

        // Same allocation comes back, not a copy.
        assert_eq!(returned.as_ptr(), ptr);
    }
}
