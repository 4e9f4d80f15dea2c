//! Product Entity
//!
//! The single record kept in the catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::input::ProductDraft;
use super::price::Price;

/// Time-derived product identifier (milliseconds since the Unix epoch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog product
///
/// Field order matches the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, fixed at creation
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Price,
    /// Optional notes; empty when not given
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Build a new product from validated form fields
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            price: draft.price,
            description: draft.description,
        }
    }

    /// Overwrite every mutable field, keeping the id
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.category = draft.category;
        self.price = draft.price;
        self.description = draft.description;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            category: "Stationery".to_string(),
            price: Price::from_cents(150),
            description: "Blue ink".to_string(),
        }
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut product = Product::from_draft(ProductId::new(7), draft("Pen"));
        product.apply(ProductDraft {
            description: String::new(),
            ..draft("Pencil")
        });

        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.name, "Pencil");
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_json_layout() {
        let product = Product::from_draft(ProductId::new(1700000000000), draft("Pen"));
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(
            json,
            r#"{"id":1700000000000,"name":"Pen","category":"Stationery","price":"1.50","description":"Blue ink"}"#
        );
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let product: Product =
            serde_json::from_str(r#"{"id":1,"name":"Pen","category":"Stationery","price":"2"}"#).unwrap();
        assert_eq!(product.description, "");
        assert_eq!(product.price.cents(), Some(200));
        assert_eq!(product.price.to_string(), "2");
    }
}
