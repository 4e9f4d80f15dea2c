//! Catalog Controller
//!
//! Owns the in-memory product list and the edit mode. Every mutation is staged
//! on a copy, written through the storage adapter, and only then committed to
//! memory, so memory and the persisted blob agree after each call returns.

mod ids;
mod mode;
mod notice;
mod view;


use tracing::{error, info, warn};

use crate::domain::{Entity, Product, ProductDraft, ProductId, ProductInput};
use crate::error::{CatalogError, CatalogResult};
use crate::repository::{KeyValueStore, ProductStorage};

pub use ids::{Clock, IdGenerator, SystemClock};
pub use mode::EditMode;
pub use notice::{Notice, Severity};
pub use view::{CatalogView, NullView};

/// Result of a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    Created(Product),
    Updated(Product),
}

impl Submitted {
    pub fn product(&self) -> &Product {
        match self {
            Submitted::Created(product) | Submitted::Updated(product) => product,
        }
    }

    pub fn notice(&self) -> Notice {
        match self {
            Submitted::Created(_) => Notice::created(),
            Submitted::Updated(_) => Notice::updated(),
        }
    }
}

/// A pending delete awaiting user confirmation.
///
/// Confirming consumes the request; dropping it cancels.
#[must_use = "a delete request does nothing until it is confirmed"]
#[derive(Debug, PartialEq, Eq)]
pub struct DeleteRequest {
    id: ProductId,
}

impl DeleteRequest {
    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn confirm<S, V>(self, controller: &mut CatalogController<S, V>) -> CatalogResult<()>
    where
        S: KeyValueStore,
        V: CatalogView,
    {
        controller.delete(self.id)
    }
}

pub struct CatalogController<S, V> {
    storage: ProductStorage<S>,
    view: V,
    products: Vec<Product>,
    mode: EditMode,
    ids: IdGenerator,
}

impl<S: KeyValueStore, V: CatalogView> CatalogController<S, V> {
    /// Load the persisted catalog and render it once
    pub fn open(storage: ProductStorage<S>, view: V) -> CatalogResult<Self> {
        let products = storage.load()?;
        let ids = seeded_ids(SystemClock, &products);
        info!(key = storage.key(), count = products.len(), "catalog opened");

        let controller = Self {
            storage,
            view,
            products,
            mode: EditMode::Idle,
            ids,
        };
        controller.render();
        Ok(controller)
    }

    /// Replace the id clock
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.ids = seeded_ids(clock, &self.products);
        self
    }

    /// Products in insertion order
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn storage(&self) -> &ProductStorage<S> {
        &self.storage
    }

    /// Validate and append a new product with a fresh id
    pub fn create(&mut self, input: &ProductInput) -> CatalogResult<Product> {
        let draft = validate(input)?;
        let id = self.ids.next_id().ok_or(CatalogError::IdsExhausted)?;
        let product = Product::from_draft(id, draft);

        let mut staged = self.products.clone();
        staged.push(product.clone());
        self.commit(staged)?;

        info!(id = %product.id, name = %product.name, "product created");
        self.mode = EditMode::Idle;
        self.render();
        Ok(product)
    }

    /// Overwrite all mutable fields of an existing product
    pub fn update(&mut self, id: ProductId, input: &ProductInput) -> CatalogResult<Product> {
        let draft = validate(input)?;
        let Some(index) = self.position(id) else {
            warn!(%id, "update of unknown product");
            return Err(CatalogError::NotFound(id));
        };

        let mut staged = self.products.clone();
        staged[index].apply(draft);
        let updated = staged[index].clone();
        self.commit(staged)?;

        info!(%id, name = %updated.name, "product updated");
        self.mode = EditMode::Idle;
        self.render();
        Ok(updated)
    }

    /// Select a product for editing and return its current values
    pub fn begin_edit(&mut self, id: ProductId) -> CatalogResult<Product> {
        let Some(product) = self.get(id).cloned() else {
            warn!(%id, "edit of unknown product");
            return Err(CatalogError::NotFound(id));
        };

        self.mode = EditMode::Editing(id);
        self.render();
        Ok(product)
    }

    /// Leave editing mode without saving
    pub fn cancel_edit(&mut self) {
        if self.mode != EditMode::Idle {
            self.mode = EditMode::Idle;
            self.render();
        }
    }

    /// Remove the product with this id. Unknown ids are a no-op.
    pub fn delete(&mut self, id: ProductId) -> CatalogResult<()> {
        let staged: Vec<Product> = self
            .products
            .iter()
            .filter(|product| product.id() != id)
            .cloned()
            .collect();
        let removed = self.products.len() - staged.len();
        self.commit(staged)?;

        info!(%id, removed, "product deleted");
        if self.mode.is_editing(id) {
            self.mode = EditMode::Idle;
        }
        self.render();
        Ok(())
    }

    /// Start a delete that only happens once the returned request is confirmed
    pub fn request_delete(&self, id: ProductId) -> DeleteRequest {
        DeleteRequest { id }
    }

    /// Create or update depending on the current edit mode
    pub fn submit(&mut self, input: &ProductInput) -> CatalogResult<Submitted> {
        match self.mode {
            EditMode::Idle => self.create(input).map(Submitted::Created),
            EditMode::Editing(id) => self.update(id, input).map(Submitted::Updated),
        }
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|product| product.id() == id)
    }

    fn commit(&mut self, staged: Vec<Product>) -> CatalogResult<()> {
        self.storage
            .save(&staged)
            .inspect_err(|err| error!(%err, "failed to persist products"))?;
        self.products = staged;
        Ok(())
    }

    fn render(&self) {
        self.view.render(&self.products, self.mode);
    }
}

fn validate(input: &ProductInput) -> CatalogResult<ProductDraft> {
    input.validate().map_err(|err| {
        warn!(%err, "rejected product input");
        CatalogError::from(err)
    })
}

fn seeded_ids(clock: impl Clock + 'static, products: &[Product]) -> IdGenerator {
    let mut ids = IdGenerator::new(clock);
    for product in products {
        ids.observe(product.id());
    }
    ids
}
