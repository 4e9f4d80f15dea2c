//! Product Catalog App
//!
//! Opens the catalog against browser storage and lays out form, table,
//! confirmation dialog and toast.

use catalog_core::{CatalogConfig, CatalogController, CatalogError, ProductStorage};
use leptos::prelude::*;

use crate::components::{ConfirmDialog, LoadErrorBanner, ProductForm, ProductTable, Toast};
use crate::context::{CatalogContext, Controller, SignalView};
use crate::models::{EditMode, Product};
use crate::storage::WebStorage;

fn open_catalog(config: &CatalogConfig, view: SignalView) -> Result<Controller, CatalogError> {
    let store = WebStorage::local()?;
    CatalogController::open(ProductStorage::from_config(store, config), view)
}

#[component]
pub fn App() -> impl IntoView {
    let config = CatalogConfig::default();

    // State rendered by the controller
    let (products, set_products) = signal(Vec::<Product>::new());
    let (mode, set_mode) = signal(EditMode::Idle);

    match open_catalog(&config, SignalView::new(set_products, set_mode)) {
        Ok(controller) => {
            tracing::info!(count = products.with_untracked(Vec::len), "catalog ready");
            provide_context(CatalogContext::new(controller, products, mode, config.toast_duration));

            view! {
                <main class="catalog-layout">
                    <h1>"Product Catalog"</h1>
                    <section class="form-panel">
                        <ProductForm />
                    </section>
                    <section class="table-panel">
                        <ProductTable />
                    </section>
                    <ConfirmDialog />
                    <Toast />
                </main>
            }
            .into_any()
        }
        Err(err) => {
            // The stored blob is only removed if the user confirms a reset.
            tracing::error!(%err, "failed to open product catalog");
            view! {
                <main class="catalog-layout">
                    <h1>"Product Catalog"</h1>
                    <LoadErrorBanner message=err.to_string() config=config />
                </main>
            }
            .into_any()
        }
    }
}
