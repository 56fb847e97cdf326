//! Visibility hooks shared by the sections.

use leptos::html::ElementType;
use leptos::prelude::*;
use leptos_scrollfx::{hold_until_cleanup, VisibilityWatch, WatchOptions};
use wasm_bindgen::JsCast;

/// Call `handler` with the visibility of `node` once it is mounted. The
/// observer lives until the owning component is torn down.
pub fn watch_visibility<E>(node: NodeRef<E>, options: WatchOptions, handler: impl FnMut(bool) + 'static)
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let mut handler = Some(handler);
    Effect::new(move |_| {
        let Some(el) = node.get() else { return };
        let Some(mut handler) = handler.take() else { return };
        let Some(watch) = VisibilityWatch::new(options.clone(), move |_, visible| handler(visible)) else {
            log::warn!("IntersectionObserver unavailable");
            return;
        };
        watch.observe(el.unchecked_ref::<web_sys::Element>());
        hold_until_cleanup(watch);
    });
}

/// Fire `handler` the first time `node` scrolls into view
pub fn on_first_visible<E>(node: NodeRef<E>, threshold: f64, handler: impl FnOnce() + 'static)
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let mut handler = Some(handler);
    let options = WatchOptions {
        threshold,
        ..WatchOptions::default()
    };
    watch_visibility(node, options, move |visible| {
        if visible {
            if let Some(handler) = handler.take() {
                handler();
            }
        }
    });
}
