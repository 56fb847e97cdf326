//! Leptos ScrollFx Utilities
//!
//! Scroll- and pointer-driven effects for Leptos pages.
//! `motion` holds the pure curves; `dom` holds listeners and observers
//! that unsubscribe when their owner is cleaned up.

pub mod dom;
pub mod motion;

pub use dom::{
    hold_until_cleanup, listen, now_ms, on_document, on_window_scroll, scroll_metrics, FrameLoop,
    Subscription, VisibilityWatch, WatchOptions,
};
pub use motion::{
    count_up_value, ease_out_cubic, magnetic_offset, scroll_progress, split_words, tilt_transform,
    word_delay_ms, GlitchGate, Timecode,
};
