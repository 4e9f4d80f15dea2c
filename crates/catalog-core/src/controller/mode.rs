//! Edit mode of the product form.

use crate::domain::ProductId;

/// Whether the form creates a new product or updates an existing one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EditMode {
    #[default]
    Idle,
    Editing(ProductId),
}

impl EditMode {
    pub fn editing_id(self) -> Option<ProductId> {
        match self {
            EditMode::Idle => None,
            EditMode::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(self, id: ProductId) -> bool {
        self == EditMode::Editing(id)
    }

    /// Label for the form's submit button
    pub fn submit_label(self) -> &'static str {
        match self {
            EditMode::Idle => "Create",
            EditMode::Editing(_) => "Update",
        }
    }
}
