//! Page Effects
//!
//! Page-wide scroll and pointer reactions that are not tied to one section:
//! progress bar, fast-scroll glitch, custom cursor, fade-ins, the exit
//! letterbox and smooth in-page anchors. Every listener is released when
//! the page shell is torn down.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_scrollfx::{
    hold_until_cleanup, listen, now_ms, on_document, on_window_scroll, scroll_metrics, scroll_progress, GlitchGate,
    VisibilityWatch, WatchOptions,
};
use wasm_bindgen::JsCast;

use crate::audio::Cue;
use crate::config::studio;
use crate::context::use_studio;
use crate::store::PageStateStoreFields;

/// Letterbox bars retract this long before they are removed
const LETTERBOX_EXIT_MS: u32 = 700;

/// Fixed ring of cursor trail positions; the newest overwrites the oldest
#[derive(Clone, Debug, PartialEq)]
pub struct TrailPool {
    slots: Vec<Option<(f64, f64)>>,
    head: usize,
}

impl TrailPool {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len.max(1)],
            head: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.slots[self.head] = Some((x, y));
        self.head = (self.head + 1) % self.slots.len();
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }

    pub fn position(&self, slot: usize) -> Option<(f64, f64)> {
        self.slots.get(slot).copied().flatten()
    }

    /// 1.0 for the newest point, falling toward 0 for the oldest
    pub fn opacity(&self, slot: usize) -> f64 {
        let len = self.slots.len();
        if self.position(slot).is_none() {
            return 0.0;
        }
        let age = (self.head + len - 1 - slot) % len;
        1.0 - age as f64 / len as f64
    }
}

#[component]
fn ScrollProgress() -> impl IntoView {
    let (progress, set_progress) = signal(0.0f64);
    if let Some(sub) = on_window_scroll(move |_| {
        if let Some((y, height, viewport)) = scroll_metrics() {
            set_progress.set(scroll_progress(y, height, viewport));
        }
    }) {
        hold_until_cleanup(sub);
    }

    view! {
        <div class="scroll-progress" style:transform=move || format!("scaleX({:.4})", progress.get())></div>
    }
}

#[component]
fn VhsGlitch() -> impl IntoView {
    let ctx = use_studio();
    let cfg = &studio().scroll;
    let (active, set_active) = signal(false);
    let start_y = scroll_metrics().map(|(y, _, _)| y).unwrap_or(0.0);
    let gate = StoredValue::new_local(GlitchGate::new(cfg.glitch_velocity, start_y, now_ms()));
    let release = StoredValue::new_local(None::<Timeout>);
    let glitch_ms = cfg.glitch_ms;

    if let Some(sub) = on_window_scroll(move |_| {
        let Some((y, _, _)) = scroll_metrics() else { return };
        let triggered = gate.try_update_value(|g| g.sample(y, now_ms())).unwrap_or(false);
        if !triggered {
            return;
        }
        set_active.set(true);
        ctx.play(Cue::VhsStatic);
        release.set_value(Some(Timeout::new(glitch_ms, move || {
            gate.update_value(|g| g.release());
            set_active.set(false);
        })));
    }) {
        hold_until_cleanup(sub);
    }

    view! { <div class="vhs-glitch" class:active=move || active.get() aria-hidden="true"></div> }
}

fn fine_pointer() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(hover: hover) and (pointer: fine)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

#[component]
fn CustomCursor() -> impl IntoView {
    if !fine_pointer() {
        return None;
    }
    let trail_len = studio().scroll.trail_slots;
    let (pointer, set_pointer) = signal(None::<(f64, f64)>);
    let trail = RwSignal::new(TrailPool::new(trail_len));

    if let Some(sub) = on_document("mousemove", move |ev: web_sys::MouseEvent| {
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        set_pointer.set(Some((x, y)));
        trail.update(|t| t.push(x, y));
    }) {
        hold_until_cleanup(sub);
    }
    if let Some(sub) = on_document("mouseleave", move |_: web_sys::MouseEvent| {
        set_pointer.set(None);
        trail.update(|t| t.clear());
    }) {
        hold_until_cleanup(sub);
    }

    let at = move || {
        pointer
            .get()
            .map(|(x, y)| format!("translate({}px, {}px)", x, y))
            .unwrap_or_default()
    };
    let hidden = move || pointer.get().is_none();
    let slots = (0..trail.with_untracked(|t| t.len()))
        .map(|slot| {
            view! {
                <div
                    class="cursor-trail"
                    style:transform=move || {
                        trail
                            .with(|t| t.position(slot))
                            .map(|(x, y)| format!("translate({}px, {}px)", x, y))
                            .unwrap_or_default()
                    }
                    style:opacity=move || format!("{:.2}", trail.with(|t| t.opacity(slot)) * 0.6)
                ></div>
            }
        })
        .collect_view();

    Some(view! {
        <div class="cursor-layer" class:hidden=hidden aria-hidden="true">
            {slots}
            <div class="cursor-glow" style:transform=at></div>
            <div class="cursor-dot" style:transform=at></div>
        </div>
    })
}

/// Reveal `.animate-on-scroll` elements as they enter the viewport
fn watch_fade_ins() {
    let mut started = false;
    Effect::new(move |_| {
        if started {
            return;
        }
        started = true;
        let options = WatchOptions {
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px",
            once: true,
        };
        let Some(watch) = VisibilityWatch::new(options, |el, _| {
            if let Err(e) = el.class_list().add_1("visible") {
                log::warn!("fade-in: {:?}", e);
            }
        }) else {
            return;
        };
        let count = watch.observe_all(".animate-on-scroll");
        log::debug!("watching {} fade-in elements", count);
        hold_until_cleanup(watch);
    });
}

/// Smooth-scroll clicks on in-page `#anchor` links
fn smooth_anchors() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let lookup = document.clone();
    let sub = listen(&document, "click", move |ev: web_sys::MouseEvent| {
        let Some(link) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a[href^='#']").ok().flatten())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href").filter(|h| h.len() > 1) else {
            return;
        };
        let Ok(Some(target)) = lookup.query_selector(&href) else {
            return;
        };
        ev.prevent_default();
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    });
    if let Some(sub) = sub {
        hold_until_cleanup(sub);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bars {
    Hidden,
    Shown,
    Retracting,
}

/// Cinematic bars shown when the intro hands over to the page
#[component]
fn Letterbox() -> impl IntoView {
    let ctx = use_studio();
    let entered = ctx.store.entered();
    let (bars, set_bars) = signal(Bars::Hidden);
    let timers = StoredValue::new_local(Vec::<Timeout>::new());
    let hold_ms = studio().reel.letterbox_ms;

    let mut shown = false;
    Effect::new(move |_| {
        if !entered.get() || shown {
            return;
        }
        shown = true;
        set_bars.set(Bars::Shown);
        let retract = Timeout::new(hold_ms, move || set_bars.set(Bars::Retracting));
        let remove = Timeout::new(hold_ms + LETTERBOX_EXIT_MS, move || set_bars.set(Bars::Hidden));
        timers.set_value(vec![retract, remove]);
    });

    move || {
        let phase = bars.get();
        (phase != Bars::Hidden).then(|| {
            view! {
                <div class="letterbox" class:retract=phase == Bars::Retracting aria-hidden="true">
                    <div class="letterbox-bar top"></div>
                    <div class="letterbox-bar bottom"></div>
                </div>
            }
        })
    }
}

#[component]
pub fn PageEffects() -> impl IntoView {
    watch_fade_ins();
    smooth_anchors();

    view! {
        <ScrollProgress />
        <VhsGlitch />
        <CustomCursor />
        <Letterbox />
        <div class="film-grain" aria-hidden="true"></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_pool_overwrites_oldest() {
        let mut pool = TrailPool::new(3);
        for i in 0..4 {
            pool.push(i as f64, 0.0);
        }
        // slot 0 held point 0, now point 3
        assert_eq!(pool.position(0), Some((3.0, 0.0)));
        assert_eq!(pool.position(1), Some((1.0, 0.0)));
        assert_eq!(pool.position(2), Some((2.0, 0.0)));
    }

    #[test]
    fn test_trail_pool_newest_is_brightest() {
        let mut pool = TrailPool::new(4);
        pool.push(0.0, 0.0);
        pool.push(1.0, 1.0);
        assert_eq!(pool.opacity(1), 1.0);
        assert!(pool.opacity(0) < pool.opacity(1));
        assert_eq!(pool.opacity(2), 0.0);
    }

    #[test]
    fn test_trail_pool_clear() {
        let mut pool = TrailPool::new(2);
        pool.push(5.0, 5.0);
        pool.clear();
        assert_eq!(pool.position(0), None);
        assert_eq!(pool.len(), 2);
    }
}
