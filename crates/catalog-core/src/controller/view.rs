//! View contract.

use super::mode::EditMode;
use crate::domain::Product;

/// Receives the full product list after every change and renders it
pub trait CatalogView {
    fn render(&self, products: &[Product], mode: EditMode);
}

/// Discards renders (headless use)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl CatalogView for NullView {
    fn render(&self, _products: &[Product], _mode: EditMode) {}
}
