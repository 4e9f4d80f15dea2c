//! Repository Layer - Core Traits
//!
//! Abstract string key-value store. The browser's `localStorage` is one
//! implementation, the in-memory map used by tests is another.

use crate::error::StorageError;

/// Persistent, origin-scoped string store
pub trait KeyValueStore {
    /// Read a value. Returns `Ok(None)` if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite a value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value. Succeeds even if the key did not exist.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
