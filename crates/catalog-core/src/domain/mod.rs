//! Domain Layer
//!
//! Entities and value types. Nothing here touches storage.

mod entity;
mod input;
mod price;
mod product;

pub use entity::Entity;
pub use input::{Field, ProductDraft, ProductInput, ValidationError};
pub use price::{Price, PriceError};
pub use product::{Product, ProductId};
