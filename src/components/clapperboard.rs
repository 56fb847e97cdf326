//! Clapperboard Divider Component
//!
//! Section break styled as a film slate. The arm snaps shut, with a clap,
//! the first time it comes into view.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use super::watch::on_first_visible;
use crate::audio::Cue;
use crate::config::studio;
use crate::context::use_studio;

#[component]
pub fn Clapperboard(scene: u32, #[prop(into)] title: String) -> impl IntoView {
    let ctx = use_studio();
    let divider = NodeRef::<html::Div>::new();
    let (snapped, set_snapped) = signal(false);
    let pending = StoredValue::new_local(None::<Timeout>);

    let delay = studio().scroll.clapper_delay_ms;
    on_first_visible(divider, 0.5, move || {
        pending.set_value(Some(Timeout::new(delay, move || {
            set_snapped.set(true);
            ctx.play(Cue::ClapperSnap);
        })));
    });

    view! {
        <div class="clapper-divider" node_ref=divider>
            <div class="clapper-board">
                <div class="clapper-arm" class:snapped=move || snapped.get()></div>
                <div class="clapper-base">
                    <span class="clapper-label">"SCENE"</span>
                    <span class="clapper-scene-num">{format!("{:02}", scene)}</span>
                    <span class="clapper-title">{title}</span>
                    <span class="clapper-take">"TAKE\u{a0}1"</span>
                </div>
            </div>
        </div>
    }
}
