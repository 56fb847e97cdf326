//! Film HUD Component
//!
//! Corner readout that turns scroll position into a running timecode.

use leptos::prelude::*;
use leptos_scrollfx::{hold_until_cleanup, on_window_scroll, scroll_metrics, scroll_progress, Timecode};

fn current_timecode() -> Timecode {
    let progress = scroll_metrics()
        .map(|(y, height, viewport)| scroll_progress(y, height, viewport))
        .unwrap_or(0.0);
    Timecode::from_progress(progress)
}

#[component]
pub fn FilmHud() -> impl IntoView {
    let (timecode, set_timecode) = signal(current_timecode());

    if let Some(sub) = on_window_scroll(move |_| set_timecode.set(current_timecode())) {
        hold_until_cleanup(sub);
    }

    view! {
        <div class="film-hud" aria-hidden="true">
            <span class="hud-rec">"● REC"</span>
            <span class="hud-timecode">{move || timecode.with(|t| t.clock())}</span>
            <span class="hud-frame">{move || timecode.with(|t| t.frame_label())}</span>
        </div>
    }
}
