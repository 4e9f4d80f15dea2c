//! User-facing notices shown as toasts.

use crate::domain::ValidationError;
use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn created() -> Self {
        Self::success("Product added successfully!")
    }

    pub fn updated() -> Self {
        Self::success("Product updated successfully!")
    }

    pub fn deleted() -> Self {
        Self::success("Product deleted successfully!")
    }
}

impl From<&CatalogError> for Notice {
    fn from(err: &CatalogError) -> Self {
        match err {
            CatalogError::Validation(ValidationError::MissingFields(_)) => {
                Notice::error("Please fill out all fields")
            }
            CatalogError::Validation(ValidationError::InvalidPrice(_)) => {
                Notice::error("Please enter a valid price")
            }
            CatalogError::NotFound(_) => Notice::warning("That product no longer exists"),
            CatalogError::IdsExhausted => Notice::error("Could not add product"),
            CatalogError::Storage(_) | CatalogError::Serialization(_) => {
                Notice::error("Could not save products")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Field, PriceError, ProductId};
    use crate::error::StorageError;

    #[test]
    fn test_error_notices() {
        let missing = CatalogError::Validation(ValidationError::MissingFields(vec![Field::Name]));
        assert_eq!(Notice::from(&missing), Notice::error("Please fill out all fields"));

        let price = CatalogError::Validation(ValidationError::InvalidPrice(PriceError::Negative));
        assert_eq!(Notice::from(&price).severity, Severity::Error);

        let gone = CatalogError::NotFound(ProductId::new(1));
        assert_eq!(Notice::from(&gone).severity, Severity::Warning);

        let storage = CatalogError::Storage(StorageError::Unavailable);
        assert_eq!(Notice::from(&storage).message, "Could not save products");

        assert_eq!(Notice::from(&CatalogError::IdsExhausted), Notice::error("Could not add product"));
    }
}
