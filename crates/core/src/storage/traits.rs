//! Storage traits
//!
//! The tracker only needs JSON documents saved and loaded by key, so any
//! backend (SQLite, in-memory, mock) can sit behind this interface.

use serde_json::Value;
use tracing::warn;

use crate::error::Result;

/// Key-value persistence of JSON documents
pub trait KeyValueStore {
    /// Store `value` under `key`, replacing any previous value
    fn save(&self, key: &str, value: &Value) -> Result<()>;

    /// Fetch the value stored under `key`
    fn load(&self, key: &str) -> Result<Option<Value>>;

    /// Fetch the value under `key`, falling back to `default` when it is
    /// missing or cannot be read. Read failures are logged, never returned.
    fn load_or(&self, key: &str, default: Value) -> Value {
        match self.load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                warn!(key, error = %e, "Failed to load stored value, using default");
                default
            }
        }
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn save(&self, key: &str, value: &Value) -> Result<()> {
        (**self).save(key, value)
    }

    fn load(&self, key: &str) -> Result<Option<Value>> {
        (**self).load(key)
    }
}
