//! Application Context
//!
//! The catalog controller and the signals it renders into, provided via the
//! Leptos Context API.

use std::time::Duration;

use catalog_core::{CatalogController, CatalogView};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;

use crate::models::{
    after_begin_edit, after_submit, delete_clears_form, DeleteRequest, EditMode, Notice, Product, ProductId,
    ProductInput,
};
use crate::storage::WebStorage;

pub type Controller = CatalogController<WebStorage, SignalView>;

/// Pushes controller renders into Leptos signals
pub struct SignalView {
    products: WriteSignal<Vec<Product>>,
    mode: WriteSignal<EditMode>,
}

impl SignalView {
    pub fn new(products: WriteSignal<Vec<Product>>, mode: WriteSignal<EditMode>) -> Self {
        Self { products, mode }
    }
}

impl CatalogView for SignalView {
    fn render(&self, products: &[Product], mode: EditMode) {
        self.products.set(products.to_vec());
        self.mode.set(mode);
    }
}

/// Text signals bound to the product form inputs
#[derive(Clone, Copy)]
pub struct FormFields {
    pub name: RwSignal<String>,
    pub category: RwSignal<String>,
    pub price: RwSignal<String>,
    pub description: RwSignal<String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
        }
    }

    pub fn input(&self) -> ProductInput {
        ProductInput {
            name: self.name.get_untracked(),
            category: self.category.get_untracked(),
            price: self.price.get_untracked(),
            description: self.description.get_untracked(),
        }
    }

    pub fn set(&self, input: ProductInput) {
        self.name.set(input.name);
        self.category.set(input.category);
        self.price.set(input.price);
        self.description.set(input.description);
    }

    pub fn reset(&self) {
        self.set(ProductInput::default());
    }
}

/// A notice on screen, tagged so stale timers don't dismiss a newer one
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveToast {
    pub seq: u32,
    pub notice: Notice,
}

/// App-wide catalog state provided via context
#[derive(Clone, Copy)]
pub struct CatalogContext {
    controller: StoredValue<Controller, LocalStorage>,
    /// Products as last rendered by the controller
    pub products: ReadSignal<Vec<Product>>,
    /// Create vs. update mode of the form
    pub mode: ReadSignal<EditMode>,
    pub form: FormFields,
    /// Toast currently shown, if any
    pub toast: RwSignal<Option<ActiveToast>>,
    toast_seq: StoredValue<u32>,
    pending_delete: RwSignal<Option<DeleteRequest>>,
    toast_duration: Duration,
}

impl CatalogContext {
    pub fn new(
        controller: Controller,
        products: ReadSignal<Vec<Product>>,
        mode: ReadSignal<EditMode>,
        toast_duration: Duration,
    ) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            products,
            mode,
            form: FormFields::new(),
            toast: RwSignal::new(None),
            toast_seq: StoredValue::new(0),
            pending_delete: RwSignal::new(None),
            toast_duration,
        }
    }

    /// Create or update from the current form contents
    pub fn submit(&self) {
        let input = self.form.input();
        let Some(outcome) = self.controller.try_update_value(|c| c.submit(&input)) else {
            return;
        };
        let (form, notice) = after_submit(input, &outcome);
        self.form.set(form);
        self.notify(notice);
    }

    /// Load a product into the form and switch to update mode
    pub fn begin_edit(&self, id: ProductId) {
        let Some(outcome) = self.controller.try_update_value(|c| c.begin_edit(id)) else {
            return;
        };
        if let Err(err) = &outcome {
            self.notify(Notice::from(err));
        }
        self.form.set(after_begin_edit(self.form.input(), &outcome));
    }

    /// Empty the form and drop any edit selection
    pub fn clear_form(&self) {
        self.form.reset();
        self.controller.update_value(|c| c.cancel_edit());
    }

    /// Ask for confirmation before deleting
    pub fn request_delete(&self, id: ProductId) {
        let request = self.controller.try_with_value(|c| c.request_delete(id));
        self.pending_delete.set(request);
    }

    /// Id awaiting delete confirmation
    pub fn pending_delete(&self) -> Option<ProductId> {
        self.pending_delete.with(|pending| pending.as_ref().map(DeleteRequest::id))
    }

    pub fn confirm_delete(&self) {
        let Some(request) = self.pending_delete.try_update(Option::take).flatten() else {
            return;
        };
        let id = request.id();
        let mode_before = self.mode.get_untracked();

        let Some(outcome) = self.controller.try_update_value(|c| request.confirm(c)) else {
            return;
        };
        if delete_clears_form(mode_before, id, &outcome) {
            self.form.reset();
        }
        match &outcome {
            Ok(()) => self.notify(Notice::deleted()),
            Err(err) => self.notify(Notice::from(err)),
        }
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    /// Show a toast and dismiss it after the configured interval
    pub fn notify(&self, notice: Notice) {
        let seq = self
            .toast_seq
            .try_update_value(|n| {
                *n = n.wrapping_add(1);
                *n
            })
            .unwrap_or_default();
        self.toast.set(Some(ActiveToast { seq, notice }));

        let toast = self.toast;
        let millis = u32::try_from(self.toast_duration.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            if toast.with_untracked(|t| t.as_ref().is_some_and(|t| t.seq == seq)) {
                toast.set(None);
            }
        });
    }
}

/// Get the catalog context
pub fn use_catalog() -> CatalogContext {
    expect_context::<CatalogContext>()
}
