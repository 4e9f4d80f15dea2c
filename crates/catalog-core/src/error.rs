//! Catalog error types.

use thiserror::Error;

use crate::domain::{ProductId, ValidationError};

/// Failures reported by a key-value store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage quota exceeded while writing {key:?}")]
    QuotaExceeded { key: String },
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Top-level error for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Form input rejected; nothing was changed
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No product with this id (stale edit or deleted elsewhere)
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// The highest id already in use is `u64::MAX`
    #[error("no product ids left")]
    IdsExhausted,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The product blob could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
