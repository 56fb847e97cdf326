//! Hero Component
//!
//! Landing section: headline, calls to action, and the projector-driven
//! showreel.

use leptos::prelude::*;

use super::fx::{magnetic_move, magnetic_reset};
use super::projector_widget::{Projector, ProjectorWidget};
use crate::context::use_studio;

const PARTICLES: usize = 50;
const SHOWREEL_SRC: &str = "https://drive.google.com/file/d/1UyGUcylQZ8M2eGNEkhYtPQ2RREZTeiP5/preview";

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_studio();
    let projector = Projector::new();
    let on = projector.is_on();

    let r = js_sys::Math::random;
    let particles = (0..PARTICLES)
        .map(|_| {
            let style = format!(
                "left:{:.2}%; animation-delay:{:.2}s; animation-duration:{:.2}s",
                r() * 100.0,
                r() * 20.0,
                r() * 20.0 + 20.0
            );
            view! { <div class="particle" style=style></div> }
        })
        .collect_view();

    view! {
        <section class="hero" id="home">
            <div class="hero-bg">{particles}</div>
            <div class="hero-content">
                <div class="hero-text">
                    <h1>"Bring Your Brand to Life"</h1>
                    <p>
                        "We create compelling audio-visual content that captivates audiences and drives results. "
                        "From voice-overs to full production, we're your creative partners."
                    </p>
                    <div class="cta-buttons">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| ctx.open_quote()
                            on:mousemove=magnetic_move
                            on:mouseleave=magnetic_reset
                        >
                            "Get Free Quote"
                        </button>
                        <a href="#portfolio" class="btn btn-secondary">"View Portfolio"</a>
                    </div>
                </div>
                <div class="hero-visual">
                    <div class="video-frame" class:projecting=move || on.get()>
                        <Show
                            when=move || on.get()
                            fallback=move || {
                                view! {
                                    <div class="reel-overlay" on:click=move |_| projector.toggle()>
                                        <span>"▶ Play showreel"</span>
                                    </div>
                                }
                            }
                        >
                            <iframe src=SHOWREEL_SRC allow="autoplay; encrypted-media" allowfullscreen=true></iframe>
                        </Show>
                    </div>
                    <ProjectorWidget projector=projector />
                </div>
            </div>
        </section>
    }
}
