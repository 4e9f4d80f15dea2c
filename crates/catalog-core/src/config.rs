//! Catalog settings.

use std::time::Duration;

/// Key the product blob is stored under
pub const DEFAULT_STORAGE_KEY: &str = "products";

/// How long a toast stays on screen
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub storage_key: String,
    pub toast_duration: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }
}
