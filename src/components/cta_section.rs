//! CTA Section Component
//!
//! Closing call to action under a neon "On Air" sign that crackles to life
//! and buzzes while it is on screen.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos_scrollfx::WatchOptions;

use super::fx::{magnetic_move, magnetic_reset};
use super::watch::watch_visibility;
use crate::audio::{Cue, LoopKind};
use crate::context::use_studio;

const SIGN_TEXT: &str = "ON AIR";
/// How long the letters stutter before holding steady
const FLICKER_MS: u32 = 900;
const LETTER_STAGGER_MS: usize = 70;

#[component]
fn OnAirSign() -> impl IntoView {
    let ctx = use_studio();
    let sign = NodeRef::<html::Div>::new();
    let (lit, set_lit) = signal(false);
    let (flickering, set_flickering) = signal(false);
    let settle = StoredValue::new_local(None::<Timeout>);

    let options = WatchOptions {
        threshold: 0.5,
        once: false,
        ..WatchOptions::default()
    };
    watch_visibility(sign, options, move |visible| {
        if visible {
            set_lit.set(true);
            set_flickering.set(true);
            ctx.play(Cue::NeonCrackle);
            ctx.start_loop(LoopKind::NeonBuzz);
            settle.set_value(Some(Timeout::new(FLICKER_MS, move || set_flickering.set(false))));
        } else {
            settle.set_value(None);
            set_flickering.set(false);
            set_lit.set(false);
            ctx.stop_loop(LoopKind::NeonBuzz);
        }
    });
    on_cleanup(move || ctx.stop_loop(LoopKind::NeonBuzz));

    let letters = SIGN_TEXT
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let style = format!("animation-delay: {}ms", i * LETTER_STAGGER_MS);
            if c == ' ' {
                view! { <span class="on-air-gap"></span> }.into_any()
            } else {
                view! { <span class="on-air-letter" style=style>{c.to_string()}</span> }.into_any()
            }
        })
        .collect_view();

    view! {
        <div
            class="on-air-sign"
            class:lit=move || lit.get()
            class:flickering=move || flickering.get()
            node_ref=sign
        >
            {letters}
        </div>
    }
}

#[component]
pub fn CtaSection() -> impl IntoView {
    let ctx = use_studio();

    view! {
        <section class="cta-section">
            <div class="cta-content animate-on-scroll">
                <OnAirSign />
                <h2>"Ready to Start Your Next Project?"</h2>
                <p>"Let's collaborate and create content that makes an impact"</p>
                <button
                    class="btn btn-primary btn-large"
                    on:mousemove=magnetic_move
                    on:mouseleave=magnetic_reset
                    on:click=move |_| ctx.open_quote()
                >
                    "Get Started Today"
                </button>
            </div>
        </section>
    }
}
