//! Browser Storage
//!
//! `window.localStorage` as a catalog key-value store.

use catalog_core::{KeyValueStore, StorageError};
use wasm_bindgen::{JsCast, JsValue};

pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    /// Bind to the origin's local storage
    pub fn local() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(|e| to_storage_error("localStorage", e))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

fn to_storage_error(key: &str, err: JsValue) -> StorageError {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(ex) if ex.name() == "QuotaExceededError" => StorageError::QuotaExceeded { key: key.to_owned() },
        Some(ex) if ex.name() == "SecurityError" => StorageError::Unavailable,
        Some(ex) => StorageError::Backend(format!("{}: {}", ex.name(), ex.message())),
        None => StorageError::Backend(format!("{:?}", err)),
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| to_storage_error(key, e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| to_storage_error(key, e))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(|e| to_storage_error(key, e))
    }
}
