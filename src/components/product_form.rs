//! Product Form Component
//!
//! Four labelled inputs with a submit button that reads "Create" or "Update"
//! depending on the controller's edit mode.

use leptos::prelude::*;

use crate::context::use_catalog;

/// Form for creating and updating products
#[component]
pub fn ProductForm() -> impl IntoView {
    let ctx = use_catalog();
    let form = ctx.form;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form id="product-form" class="product-form" on:submit=on_submit>
            <TextField id="product_name" label="Product Name" value=form.name />
            <TextField id="product_category" label="Category" value=form.category />
            <TextField id="product_price" label="Price" value=form.price placeholder="0.00" />

            <div class="form-field">
                <label for="product_desc">"Description"</label>
                <textarea
                    id="product_desc"
                    rows="3"
                    prop:value=move || form.description.get()
                    on:input=move |ev| form.description.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-actions">
                <button
                    id="create-btn"
                    type="submit"
                    class=move || if ctx.mode.get().editing_id().is_some() { "submit-btn updating" } else { "submit-btn" }
                >
                    {move || ctx.mode.get().submit_label()}
                </button>
                <button id="clear-btn" type="button" class="clear-btn" on:click=move |_| ctx.clear_form()>
                    "Clear"
                </button>
            </div>
        </form>
    }
}

/// Single-line labelled text input bound to a signal
#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            <input
                id=id
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
