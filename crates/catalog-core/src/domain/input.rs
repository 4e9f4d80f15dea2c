//! Form Input and Validation
//!
//! Raw form text goes in, a trimmed and parsed draft comes out.

use std::fmt;

use thiserror::Error;

use super::price::{Price, PriceError};
use super::product::Product;

/// Required form fields, reported when left blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Category,
    Price,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Price => "price",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", field_list(.0))]
    MissingFields(Vec<Field>),
    #[error("invalid price: {0}")]
    InvalidPrice(#[from] PriceError),
}

fn field_list(fields: &[Field]) -> String {
    fields.iter().map(Field::label).collect::<Vec<_>>().join(", ")
}

/// Raw text as typed into the product form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductInput {
    pub name: String,
    pub category: String,
    pub price: String,
    pub description: String,
}

/// Validated field values for create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: Price,
    pub description: String,
}

impl ProductInput {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price: price.into(),
            description: description.into(),
        }
    }

    /// Trim every field, require name/category/price, then parse the price.
    ///
    /// All blank required fields are reported together.
    pub fn validate(&self) -> Result<ProductDraft, ValidationError> {
        let name = self.name.trim();
        let category = self.category.trim();
        let price = self.price.trim();

        let missing: Vec<Field> = [(Field::Name, name), (Field::Category, category), (Field::Price, price)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(ProductDraft {
            name: name.to_owned(),
            category: category.to_owned(),
            price: price.parse()?,
            description: self.description.trim().to_owned(),
        })
    }
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
        }
    }
}
