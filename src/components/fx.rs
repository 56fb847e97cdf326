//! Pointer Effects
//!
//! Event handlers for magnetic buttons, tilting cards and the service-card
//! spotlight. Attach them with `on:mousemove` / `on:mouseleave`.

use leptos_scrollfx::{magnetic_offset, tilt_transform};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::config::studio;

fn current(ev: &MouseEvent) -> Option<HtmlElement> {
    ev.current_target()?.dyn_into::<HtmlElement>().ok()
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn magnetic_move(ev: MouseEvent) {
    let Some(el) = current(&ev) else { return };
    let rect = el.get_bounding_client_rect();
    let center = (rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0);
    let pointer = (ev.client_x() as f64, ev.client_y() as f64);
    let (dx, dy) = magnetic_offset(pointer, center, studio().scroll.magnetic_strength);
    set_style(&el, "transform", &format!("translate({:.1}px, {:.1}px)", dx, dy));
}

pub fn magnetic_reset(ev: MouseEvent) {
    if let Some(el) = current(&ev) {
        set_style(&el, "transform", "");
    }
}

pub fn tilt_enter(ev: MouseEvent) {
    let Some(el) = current(&ev) else { return };
    set_style(&el, "transition", "transform 0.15s ease, box-shadow 0.3s ease");
    set_style(&el, "transform", "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(0px)");
}

pub fn tilt_move(ev: MouseEvent) {
    let Some(el) = current(&ev) else { return };
    let rect = el.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    let x = (ev.client_x() as f64 - rect.left()) / rect.width() - 0.5;
    let y = (ev.client_y() as f64 - rect.top()) / rect.height() - 0.5;
    set_style(&el, "transition", "none");
    set_style(&el, "transform", &tilt_transform(x, y, studio().scroll.tilt_max_deg));
}

pub fn tilt_leave(ev: MouseEvent) {
    let Some(el) = current(&ev) else { return };
    set_style(&el, "transition", "transform 0.55s ease, box-shadow 0.3s ease");
    set_style(&el, "transform", "");
}

/// Move the card's glow to where the pointer came in
pub fn spotlight(ev: MouseEvent) {
    let Some(el) = current(&ev) else { return };
    let x = ev.page_x() - el.offset_left();
    let y = ev.page_y() - el.offset_top();
    set_style(&el, "--x", &format!("{}px", x));
    set_style(&el, "--y", &format!("{}px", y));
}
