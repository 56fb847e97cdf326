//! Stats Section Component
//!
//! Headline numbers that count up once when they first scroll into view.

use leptos::html;
use leptos::prelude::*;
use leptos_scrollfx::{count_up_value, FrameLoop};

use super::watch::on_first_visible;
use crate::config::studio;
use crate::models::{Stat, STATS};

#[component]
fn CountUp(target: u32) -> impl IntoView {
    let number = NodeRef::<html::Span>::new();
    let (value, set_value) = signal(0u32);
    let animation = StoredValue::new_local(None::<FrameLoop>);
    let duration = studio().scroll.count_up_ms as f64;

    on_first_visible(number, 0.4, move || {
        let frames = FrameLoop::start(move |elapsed| {
            set_value.set(count_up_value(elapsed, duration, target));
            elapsed < duration
        });
        animation.set_value(Some(frames));
    });

    view! { <span class="stat-number" node_ref=number>{move || value.get()}</span> }
}

#[component]
pub fn StatsSection() -> impl IntoView {
    view! {
        <section class="stats-section">
            <div class="stats-grid">
                {STATS
                    .iter()
                    .map(|&Stat { value, suffix, label }| {
                        view! {
                            <div class="stat-item animate-on-scroll">
                                <div class="stat-value">
                                    <CountUp target=value />
                                    <span class="stat-suffix">{suffix}</span>
                                </div>
                                <div class="stat-label">{label}</div>
                                <div class="stat-line"></div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
