//! Product Row Component

use leptos::prelude::*;

use crate::context::use_catalog;
use crate::models::NumberedRow;

/// A single product row with edit/delete triggers
#[component]
pub fn ProductRow(row: NumberedRow) -> impl IntoView {
    let ctx = use_catalog();

    let id = row.product.id;
    let price = row.price_cell();
    let NumberedRow { ordinal, product } = row;

    view! {
        <tr class=move || if ctx.mode.get().is_editing(id) { "product-row editing" } else { "product-row" }>
            <td>{ordinal}</td>
            <td>{product.name}</td>
            <td>{product.category}</td>
            <td>{price}</td>
            <td>{product.description}</td>
            <td class="row-actions">
                <button class="edit-btn" on:click=move |_| ctx.begin_edit(id)>"Edit"</button>
                <button class="delete-btn" on:click=move |_| ctx.request_delete(id)>"Delete"</button>
            </td>
        </tr>
    }
}
