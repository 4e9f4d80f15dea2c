//! Frontend Models
//!
//! Catalog types shared with `catalog-core`, plus table row and form helpers.

pub use catalog_core::{
    CatalogResult, DeleteRequest, EditMode, Notice, Product, ProductId, ProductInput, Severity, Submitted,
};

/// A product with its 1-based position in the table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberedRow {
    pub ordinal: usize,
    pub product: Product,
}

impl NumberedRow {
    /// Price as shown in the table, e.g. `$1.50`
    pub fn price_cell(&self) -> String {
        format!("${}", self.product.price)
    }
}

/// Number products in list order, starting at 1
pub fn numbered_rows(products: &[Product]) -> Vec<NumberedRow> {
    products
        .iter()
        .enumerate()
        .map(|(index, product)| NumberedRow {
            ordinal: index + 1,
            product: product.clone(),
        })
        .collect()
}

/// Form contents and toast after a submit. A rejected submit keeps what was typed.
pub fn after_submit(typed: ProductInput, outcome: &CatalogResult<Submitted>) -> (ProductInput, Notice) {
    match outcome {
        Ok(submitted) => (ProductInput::default(), submitted.notice()),
        Err(err) => (typed, Notice::from(err)),
    }
}

/// Form contents after clicking Edit on a row
pub fn after_begin_edit(typed: ProductInput, outcome: &CatalogResult<Product>) -> ProductInput {
    match outcome {
        Ok(product) => ProductInput::from(product),
        Err(_) => typed,
    }
}

/// Whether a delete should empty the form: only when it removed the product being edited
pub fn delete_clears_form(mode_before: EditMode, deleted: ProductId, outcome: &CatalogResult<()>) -> bool {
    outcome.is_ok() && mode_before.is_editing(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{CatalogError, Price, StorageError};

    fn make_product(id: u64, name: &str, cents: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: "Stationery".to_string(),
            price: Price::from_cents(cents),
            description: String::new(),
        }
    }

    #[test]
    fn test_numbered_rows() {
        let products = vec![make_product(30, "Pen", 150), make_product(10, "Ruler", 99)];

        let rows = numbered_rows(&products);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ordinal, 1);
        assert_eq!(rows[0].product.name, "Pen");
        assert_eq!(rows[1].ordinal, 2);
        assert_eq!(rows[1].product.id, ProductId::new(10));
    }

    #[test]
    fn test_price_cell() {
        let rows = numbered_rows(&[make_product(1, "Pen", 150)]);
        assert_eq!(rows[0].price_cell(), "$1.50");
    }

    #[test]
    fn test_empty_catalog_has_no_rows() {
        assert!(numbered_rows(&[]).is_empty());
    }

    fn typed() -> ProductInput {
        ProductInput::new("Pen", "", "1.50", "Blue ink")
    }

    #[test]
    fn test_submit_success_resets_form() {
        let outcome = Ok(Submitted::Created(make_product(1, "Pen", 150)));
        let (form, notice) = after_submit(typed(), &outcome);

        assert_eq!(form, ProductInput::default());
        assert_eq!(notice, Notice::created());
    }

    #[test]
    fn test_failed_submit_keeps_typed_input() {
        let invalid = ProductInput::new("Pen", "", "1.50", "").validate().unwrap_err();
        let (form, notice) = after_submit(typed(), &Err(CatalogError::Validation(invalid)));
        assert_eq!(form, typed());
        assert_eq!(notice.severity, Severity::Error);

        let quota = Err(CatalogError::Storage(StorageError::QuotaExceeded { key: "products".into() }));
        let (form, _) = after_submit(typed(), &quota);
        assert_eq!(form, typed());
    }

    #[test]
    fn test_begin_edit_fills_or_keeps_form() {
        let product = make_product(7, "Ruler", 99);
        let form = after_begin_edit(typed(), &Ok(product.clone()));
        assert_eq!(form, ProductInput::from(&product));
        assert_eq!(form.price, "0.99");

        let stale = after_begin_edit(typed(), &Err(CatalogError::NotFound(ProductId::new(7))));
        assert_eq!(stale, typed());
    }

    #[test]
    fn test_deleting_edited_product_clears_form() {
        let id = ProductId::new(7);
        let other = ProductId::new(8);

        assert!(delete_clears_form(EditMode::Editing(id), id, &Ok(())));
        assert!(!delete_clears_form(EditMode::Editing(other), id, &Ok(())));
        assert!(!delete_clears_form(EditMode::Idle, id, &Ok(())));

        let failed = Err(CatalogError::Storage(StorageError::Unavailable));
        assert!(!delete_clears_form(EditMode::Editing(id), id, &failed));
    }
}
