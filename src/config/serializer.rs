//! Serialization Pair Module
//!
//! Reader/writer abstractions for cache keys and values, with UTF-8 string
//! keys and JSON values as the stock implementations.

use serde_json::Value;

use crate::error::Result;

// == Key Serializer ==
/// Serializes cache keys to bytes and back.
pub trait KeySerializer: Send + Sync {
    /// Serializes a key to its byte representation.
    fn serialize(&self, key: &str) -> Result<Vec<u8>>;

    /// Reads a key back from its byte representation.
    fn deserialize(&self, bytes: &[u8]) -> Result<String>;
}

// == Value Serializer ==
/// Serializes cache values to bytes and back.
pub trait ValueSerializer: Send + Sync {
    /// Serializes a value to its byte representation.
    fn serialize(&self, value: &Value) -> Result<Vec<u8>>;

    /// Reads a value back from its byte representation.
    fn deserialize(&self, bytes: &[u8]) -> Result<Value>;
}

// == String Key Serializer ==
/// Keys as plain UTF-8 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringKeySerializer;

impl KeySerializer for StringKeySerializer {
    fn serialize(&self, key: &str) -> Result<Vec<u8>> {
        Ok(key.as_bytes().to_vec())
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

// == JSON Value Serializer ==
/// Values as compact JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonValueSerializer;

impl ValueSerializer for JsonValueSerializer {
    fn serialize(&self, value: &Value) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(value)?)
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Value> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
