//! Studio Context
//!
//! Page-wide handles provided via the Leptos Context API: the page store,
//! the audio session and the toast timer.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::audio::{AudioSession, Cue, LoopKind, SharedAudio};
use crate::config::studio;
use crate::machines::Toast;
use crate::store::{
    store_close_toast, store_dismiss_toast, store_set_quote_modal, store_show_toast, PageState, PageStore,
    PageStateStoreFields,
};

#[derive(Clone, Copy)]
pub struct StudioContext {
    pub store: PageStore,
    audio: SharedAudio,
    toast_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl StudioContext {
    pub fn new() -> Self {
        Self {
            store: PageStore::new(PageState {
                toast: Toast::new(studio().toast_ms),
                ..PageState::default()
            }),
            audio: StoredValue::new_local(Rc::new(AudioSession::new())),
            toast_timer: StoredValue::new_local(None),
        }
    }

    pub fn provide(self) {
        provide_context(self);
    }

    pub fn play(&self, cue: Cue) {
        let _ = self.audio.try_with_value(|a| a.play(cue));
    }

    pub fn start_loop(&self, kind: LoopKind) {
        let _ = self.audio.try_with_value(|a| a.start_loop(kind));
    }

    pub fn stop_loop(&self, kind: LoopKind) {
        let _ = self.audio.try_with_value(|a| a.stop_loop(kind));
    }

    pub fn toggle_mute(&self) {
        let muted = self.audio.with_value(|a| a.toggle_mute());
        *self.store.muted().write() = muted;
        log::info!("sound {}", if muted { "muted" } else { "on" });
    }

    pub fn open_quote(&self) {
        store_set_quote_modal(&self.store, true);
        set_body_scroll_locked(true);
    }

    pub fn close_quote(&self) {
        store_set_quote_modal(&self.store, false);
        set_body_scroll_locked(false);
    }

    /// Show the success toast and dismiss it after the configured time.
    /// A newer toast replaces the pending timer.
    pub fn show_toast(&self) {
        let store = self.store;
        let dismissal = store_show_toast(&store);
        let timer = Timeout::new(dismissal.after_ms, move || store_dismiss_toast(&store, dismissal.generation));
        self.toast_timer.set_value(Some(timer));
    }

    pub fn close_toast(&self) {
        self.toast_timer.set_value(None);
        store_close_toast(&self.store);
    }
}

pub fn use_studio() -> StudioContext {
    expect_context::<StudioContext>()
}

/// Stop the page behind a modal from scrolling
fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        log::warn!("body overflow: {:?}", e);
    }
}
