//! Navbar Component
//!
//! Fixed top navigation. Shrinks once the page scrolls, folds into a menu on
//! small screens and carries the global sound toggle.

use leptos::prelude::*;
use leptos_scrollfx::{hold_until_cleanup, on_window_scroll, scroll_metrics};

use crate::config::studio;
use crate::context::use_studio;
use crate::store::PageStateStoreFields;

const LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#portfolio", "Portfolio"),
    ("#clients", "Clients"),
    ("#services", "Services"),
    ("#process", "Process"),
    ("#team", "Team"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_studio();
    let muted = ctx.store.muted();
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let threshold = studio().scroll.navbar_scrolled_px;
    if let Some(sub) = on_window_scroll(move |_| {
        let y = scroll_metrics().map(|(y, _, _)| y).unwrap_or(0.0);
        let past = y > threshold;
        if past != scrolled.get_untracked() {
            set_scrolled.set(past);
        }
    }) {
        hold_until_cleanup(sub);
    }

    view! {
        <nav id="navbar" class:scrolled=move || scrolled.get()>
            <div class="nav-container">
                <div class="logo">
                    <img src="/Emotion.png" alt="E-Motion Production" height="120" />
                </div>
                <ul class="nav-links" class:open=move || menu_open.get()>
                    {LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <a href=*href on:click=move |_| set_menu_open.set(false)>
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="sound-toggle"
                    class:muted=move || muted.get()
                    aria-label=move || if muted.get() { "Unmute sound" } else { "Mute sound" }
                    on:click=move |_| ctx.toggle_mute()
                >
                    {move || if muted.get() { "🔇" } else { "🔊" }}
                </button>
                <div class="menu-toggle" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>
        </nav>
    }
}
