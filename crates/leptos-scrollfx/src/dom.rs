//! Scoped DOM Subscriptions
//!
//! Event listeners, visibility observers and animation-frame loops that
//! release themselves when dropped. Tie them to a component with
//! [`hold_until_cleanup`] so unmounting always unsubscribes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// An event listener that is removed on drop
pub struct Subscription {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

fn subscribe<E, F>(target: &web_sys::EventTarget, event: &'static str, passive: bool, mut handler: F) -> Option<Subscription>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        handler(ev.unchecked_into::<E>());
    });
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;
    Some(Subscription {
        target: target.clone(),
        event,
        callback,
    })
}

/// Listen for `event` on any target
pub fn listen<E, F>(target: &web_sys::EventTarget, event: &'static str, handler: F) -> Option<Subscription>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    subscribe(target, event, false, handler)
}

/// Passive window `scroll` listener
pub fn on_window_scroll(handler: impl FnMut(web_sys::Event) + 'static) -> Option<Subscription> {
    let window = web_sys::window()?;
    subscribe(&window, "scroll", true, handler)
}

/// Passive document-level listener (mousemove, mouseleave, ...)
pub fn on_document<E, F>(event: &'static str, handler: F) -> Option<Subscription>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let document = web_sys::window()?.document()?;
    subscribe(&document, event, true, handler)
}

/// Current vertical scroll offset, page height and viewport height
pub fn scroll_metrics() -> Option<(f64, f64, f64)> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let height = window.document()?.document_element()?.scroll_height() as f64;
    Some((scroll_y, height, viewport))
}

/// `performance.now()` in milliseconds, 0 when unavailable
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Options for [`VisibilityWatch`]
#[derive(Clone, Debug)]
pub struct WatchOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    /// Stop watching an element after its first intersection
    pub once: bool,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px",
            once: true,
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// IntersectionObserver that disconnects on drop.
///
/// The handler receives the element and whether it is intersecting. With
/// `once`, exits are not reported and the element is unobserved after its
/// first entry.
pub struct VisibilityWatch {
    observer: web_sys::IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilityWatch {
    pub fn new(options: WatchOptions, mut handler: impl FnMut(web_sys::Element, bool) + 'static) -> Option<Self> {
        let once = options.once;
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let visible = entry.is_intersecting();
                    if once {
                        if !visible {
                            continue;
                        }
                        observer.unobserve(&target);
                    }
                    handler(target, visible);
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &web_sys::Element) {
        self.observer.observe(element);
    }

    /// Observe every element matching a CSS selector
    pub fn observe_all(&self, selector: &str) -> usize {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return 0;
        };
        let Ok(nodes) = document.query_selector_all(selector) else {
            return 0;
        };
        let mut count = 0;
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                self.observer.observe(&el);
                count += 1;
            }
        }
        count
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

type FrameClosure = Closure<dyn FnMut(f64)>;

struct FrameInner {
    closure: RefCell<Option<FrameClosure>>,
    running: Cell<bool>,
    raf_id: Cell<i32>,
}

/// A requestAnimationFrame loop, cancelled on drop.
///
/// The callback gets milliseconds since the loop started and returns
/// whether another frame is wanted.
pub struct FrameLoop {
    inner: Rc<FrameInner>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(FrameInner {
            closure: RefCell::new(None),
            running: Cell::new(true),
            raf_id: Cell::new(0),
        });
        let started = Cell::new(None::<f64>);
        let weak = Rc::downgrade(&inner);
        let closure: FrameClosure = Closure::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else { return };
            if !inner.running.get() {
                return;
            }
            let origin = match started.get() {
                Some(t) => t,
                None => {
                    started.set(Some(timestamp));
                    timestamp
                }
            };
            if on_frame(timestamp - origin) {
                if let Some(cb) = inner.closure.borrow().as_ref() {
                    inner.raf_id.set(request_animation_frame(cb.as_ref()));
                }
            } else {
                inner.running.set(false);
            }
        });
        inner.raf_id.set(request_animation_frame(closure.as_ref()));
        *inner.closure.borrow_mut() = Some(closure);
        Self { inner }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if self.inner.running.replace(false) {
            cancel_animation_frame(self.inner.raf_id.get());
        }
    }
}

/// Keep `value` alive until the current reactive owner is cleaned up,
/// then drop it (removing listeners, disconnecting observers).
pub fn hold_until_cleanup<T: 'static>(value: T) {
    let slot = StoredValue::new_local(Some(value));
    on_cleanup(move || {
        let _ = slot.try_update_value(|v| v.take());
    });
}
