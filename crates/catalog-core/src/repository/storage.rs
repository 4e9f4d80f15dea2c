//! Product Storage Adapter
//!
//! The whole collection lives in one JSON blob under one key. Every save is a
//! full snapshot replace.

use tracing::{debug, warn};

use super::traits::KeyValueStore;
use crate::config::{CatalogConfig, DEFAULT_STORAGE_KEY};
use crate::domain::Product;
use crate::error::CatalogResult;

pub struct ProductStorage<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ProductStorage<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn from_config(store: S, config: &CatalogConfig) -> Self {
        Self::with_key(store, config.storage_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the blob. A missing key is an empty catalog; a malformed blob is an error.
    ///
    /// Price text that is not canonical is kept verbatim and logged, never rejected.
    pub fn load(&self) -> CatalogResult<Vec<Product>> {
        let Some(blob) = self.store.get(&self.key)? else {
            debug!(key = %self.key, "no product blob, starting empty");
            return Ok(Vec::new());
        };

        let products: Vec<Product> = serde_json::from_str(&blob)?;
        for product in products.iter().filter(|p| p.price.is_stored()) {
            let (id, price) = (&product.id, &product.price);
            match price.cents() {
                Some(cents) => warn!(%id, %price, cents, "non-canonical price kept as saved"),
                None => warn!(%id, %price, "unreadable price kept as saved"),
            }
        }
        debug!(key = %self.key, count = products.len(), "loaded products");
        Ok(products)
    }

    /// Overwrite the blob with the full collection
    pub fn save(&mut self, products: &[Product]) -> CatalogResult<()> {
        let blob = serde_json::to_string(products)?;
        self.store.set(&self.key, &blob)?;
        debug!(key = %self.key, count = products.len(), bytes = blob.len(), "saved products");
        Ok(())
    }

    /// Drop the blob entirely
    pub fn clear(&mut self) -> CatalogResult<()> {
        self.store.remove(&self.key)?;
        debug!(key = %self.key, "cleared products");
        Ok(())
    }
}
