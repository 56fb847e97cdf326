//! Success Toast Component
//!
//! Confirmation after a form is delivered. Hides itself after the
//! configured time or on ×.

use leptos::prelude::*;

use crate::context::use_studio;
use crate::store::PageStateStoreFields;

#[component]
pub fn SuccessToast() -> impl IntoView {
    let ctx = use_studio();
    let toast = ctx.store.toast();

    view! {
        <div class="success-toast" class:show=move || toast.get().is_visible() role="status">
            <span class="toast-icon">"✓"</span>
            <div class="toast-body">
                <strong>"Message sent!"</strong>
                <p>"Thank you. We'll get back to you within 24 hours."</p>
            </div>
            <button class="toast-close" aria-label="Dismiss" on:click=move |_| ctx.close_toast()>
                "×"
            </button>
        </div>
    }
}
