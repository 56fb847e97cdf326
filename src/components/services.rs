//! Services Component
//!
//! Grid of service cards with a pointer spotlight and 3D tilt.

use leptos::prelude::*;

use super::fx::{spotlight, tilt_enter, tilt_leave, tilt_move};
use super::SectionHeader;
use crate::models::SERVICE_CARDS;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section class="services" id="services">
            <SectionHeader
                title="Our Creative Services"
                subtitle="From concept to completion, we offer a complete suite of audio-visual production services"
            />
            <div class="service-grid">
                {SERVICE_CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <div
                                class="service-card animate-on-scroll"
                                on:mouseenter=move |ev| {
                                    spotlight(ev.clone());
                                    tilt_enter(ev);
                                }
                                on:mousemove=tilt_move
                                on:mouseleave=tilt_leave
                            >
                                <div class="service-icon">{card.icon}</div>
                                <h3>{card.title}</h3>
                                <p>{card.blurb}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
