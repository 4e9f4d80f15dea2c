//! UI Components
//!
//! Leptos components for the catalog page.

mod confirm_dialog;
mod load_error;
mod product_form;
mod product_row;
mod product_table;
mod toast;

pub use confirm_dialog::ConfirmDialog;
pub use load_error::LoadErrorBanner;
pub use product_form::ProductForm;
pub use product_row::ProductRow;
pub use product_table::ProductTable;
pub use toast::Toast;
