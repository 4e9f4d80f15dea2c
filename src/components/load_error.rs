//! Load Error Banner
//!
//! Shown when the saved catalog cannot be opened. Offers a two-step
//! "Reset catalog" that drops the saved blob and reloads the page.

use catalog_core::{CatalogConfig, CatalogResult, ProductStorage};
use leptos::prelude::*;

use crate::storage::WebStorage;

/// Remove the saved product blob
fn reset_catalog(config: &CatalogConfig) -> CatalogResult<()> {
    let store = WebStorage::local()?;
    ProductStorage::from_config(store, config).clear()
}

fn reload_page() {
    let reloaded = web_sys::window().map(|w| w.location().reload());
    if !matches!(reloaded, Some(Ok(()))) {
        tracing::warn!("page reload failed after reset");
    }
}

#[component]
pub fn LoadErrorBanner(message: String, config: CatalogConfig) -> impl IntoView {
    let confirming = RwSignal::new(false);
    let reset_error = RwSignal::new(None::<String>);
    let config = StoredValue::new(config);

    let on_reset = move |_| {
        match config.with_value(reset_catalog) {
            Ok(()) => {
                tracing::warn!("saved catalog cleared by user");
                reload_page();
            }
            Err(err) => {
                tracing::error!(%err, "catalog reset failed");
                reset_error.set(Some(err.to_string()));
            }
        }
        confirming.set(false);
    };

    view! {
        <div class="fatal-banner" role="alert">
            <strong>"Could not load saved products."</strong>
            <p>{message}</p>
            <Show
                when=move || confirming.get()
                fallback=move || view! {
                    <div class="banner-actions">
                        <button class="reset-btn" on:click=move |_| confirming.set(true)>
                            "Reset catalog"
                        </button>
                    </div>
                }
            >
                <p>"This permanently deletes all saved products."</p>
                <div class="banner-actions">
                    <button class="confirm-btn" on:click=on_reset>"Yes, reset it"</button>
                    <button class="cancel-btn" on:click=move |_| confirming.set(false)>"Cancel"</button>
                </div>
            </Show>
            {move || reset_error.get().map(|e| view! { <p class="reset-error">{e}</p> })}
        </div>
    }
}
