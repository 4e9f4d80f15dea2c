//! Confirm Dialog Component
//!
//! Modal delete confirmation. Shown while a delete request is pending;
//! confirming consumes the request, cancelling drops it.

use leptos::prelude::*;

use crate::context::use_catalog;

#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let ctx = use_catalog();

    view! {
        <Show when=move || ctx.pending_delete().is_some()>
            <div class="modal-backdrop" on:click=move |_| ctx.cancel_delete()>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <div class="modal-icon warning">"!"</div>
                    <h2>"Are you sure?"</h2>
                    <p>"You will not be able to recover this product!"</p>
                    <div class="modal-actions">
                        <button
                            class="confirm-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                ctx.confirm_delete();
                            }
                        >
                            "Yes, delete it!"
                        </button>
                        <button
                            class="cancel-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                ctx.cancel_delete();
                            }
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
