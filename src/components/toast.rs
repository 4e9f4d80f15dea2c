//! Toast Component
//!
//! Transient notice in the corner of the screen. Dismissal timing lives in
//! `CatalogContext::notify`.

use leptos::prelude::*;

use crate::context::use_catalog;
use crate::models::Severity;

fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Error => "✗",
        Severity::Warning => "!",
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_catalog();

    move || {
        ctx.toast.get().map(|toast| {
            let severity = toast.notice.severity;
            view! {
                <div class=format!("toast toast-{}", severity.as_str()) role="status">
                    <span class="toast-icon">{icon(severity)}</span>
                    <span class="toast-message">{toast.notice.message}</span>
                </div>
            }
        })
    }
}
