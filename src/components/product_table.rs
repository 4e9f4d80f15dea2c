//! Product Table Component
//!
//! Renders the controller's product list, one row per product.

use leptos::prelude::*;

use crate::components::ProductRow;
use crate::context::use_catalog;
use crate::models::numbered_rows;

#[component]
pub fn ProductTable() -> impl IntoView {
    let ctx = use_catalog();
    let rows = move || ctx.products.with(|products| numbered_rows(products));
    let is_empty = move || ctx.products.with(Vec::is_empty);

    view! {
        <div class="table-wrapper">
            <table class="product-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Price"</th>
                        <th>"Description"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody id="table-body">
                    // Keyed on the whole row so edits and renumbering re-render
                    <For each=rows key=|row| row.clone() let:row>
                        <ProductRow row=row />
                    </For>
                </tbody>
            </table>
            <Show when=is_empty>
                <p id="warning-msg" class="warning-msg">"No products found"</p>
            </Show>
        </div>
    }
}
