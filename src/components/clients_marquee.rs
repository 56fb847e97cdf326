//! Clients Marquee Component
//!
//! Two rows of client logos scrolling in opposite directions. Hidden when
//! no logos were found at build time.

use leptos::prelude::*;

use super::SectionHeader;
use crate::models::assets::{client_logo_url, CLIENT_LOGOS};

/// One marquee row, rendered twice so the scroll loops seamlessly
fn marquee_row(class: &'static str, logos: &'static [&'static str], offset: usize) -> impl IntoView {
    let cards = move || {
        logos
            .iter()
            .enumerate()
            .map(|(i, file)| {
                view! {
                    <div class="client-logo-card">
                        <img src=client_logo_url(file) alt=format!("Client {}", offset + i + 1) loading="lazy" />
                    </div>
                }
            })
            .collect_view()
    };
    view! { <div class=format!("clients-marquee {}", class)>{cards()}{cards()}</div> }
}

#[component]
pub fn ClientsMarquee() -> impl IntoView {
    if CLIENT_LOGOS.is_empty() {
        return None;
    }
    let mid = CLIENT_LOGOS.len().div_ceil(2);
    let (first, second) = CLIENT_LOGOS.split_at(mid);

    Some(view! {
        <section class="clients-section" id="clients">
            <SectionHeader title="Trusted By Industry Leaders" subtitle=" brands have chosen us to tell their story">
                <span class="client-count">{format!("{}+", CLIENT_LOGOS.len())}</span>
            </SectionHeader>
            <div class="clients-marquee-wrapper">
                {marquee_row("row-1", first, 0)}
                {(!second.is_empty()).then(|| marquee_row("row-2", second, mid))}
            </div>
        </section>
    })
}
