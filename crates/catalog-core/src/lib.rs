//! Catalog Core
//!
//! Layered architecture:
//! - domain: Product entity, price type, form validation
//! - repository: Key-value storage abstraction and the product blob adapter
//! - controller: In-memory catalog state, edit mode and mutations

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod repository;

pub use config::CatalogConfig;
pub use controller::{
    CatalogController, CatalogView, Clock, DeleteRequest, EditMode, Notice, NullView, Severity,
    Submitted, SystemClock,
};
pub use domain::{Entity, Field, Price, PriceError, Product, ProductId, ProductInput, ValidationError};
pub use error::{CatalogError, CatalogResult, StorageError};
pub use repository::{KeyValueStore, MemoryStore, ProductStorage};
