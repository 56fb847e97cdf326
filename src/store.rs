//! Page State Store
//!
//! The little state the page shell shares between sections, with
//! field-level reactivity from reactive_stores.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::machines::{Dismissal, Toast};

#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Quote request modal is showing
    pub quote_modal_open: bool,
    /// Success notification
    pub toast: Toast,
    /// Global sound mute, mirrored from the audio session
    pub muted: bool,
    /// Intro overlay has finished
    pub entered: bool,
}

pub type PageStore = Store<PageState>;

// ========================
// Store Helper Functions
// ========================

/// Show the toast; returns the dismiss timer to arm
pub fn store_show_toast(store: &PageStore) -> Dismissal {
    store.toast().write().show()
}

/// Hide the toast if it is still the one `generation` refers to
pub fn store_dismiss_toast(store: &PageStore, generation: u32) {
    let current = store.toast().get();
    let mut toast = current;
    if toast.dismiss(generation) {
        *store.toast().write() = toast;
    }
}

pub fn store_close_toast(store: &PageStore) {
    store.toast().write().close();
}

pub fn store_set_quote_modal(store: &PageStore, open: bool) {
    if store.quote_modal_open().get() != open {
        *store.quote_modal_open().write() = open;
    }
}
