//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cache entry: serialized value bytes plus expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The serialized value
    pub value: Vec<u8>,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring after `ttl`.
    ///
    /// A zero duration means the entry is persistent and never expires.
    pub fn new(value: Vec<u8>, ttl: Duration) -> Self {
        let now = current_timestamp_ms();
        let expires_at = if ttl.is_zero() {
            None
        } else {
            Some(now + ttl.as_millis() as u64)
        };

        Self {
            value,
            created_at: now,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to the expiration time.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, or None if no expiration is set.
    ///
    /// Returns `Some(0)` once the TTL has elapsed.
    pub fn ttl_remaining_ms(&self) -> Option<u64> {
        self.expires_at.map(|expires| {
            let now = current_timestamp_ms();
            expires.saturating_sub(now)
        })
    }

    /// Returns remaining TTL in whole seconds, or None if no expiration is set.
    pub fn ttl_remaining(&self) -> Option<u64> {
        self.ttl_remaining_ms().map(|ms| ms / 1000)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
