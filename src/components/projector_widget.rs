//! Projector Widget Component
//!
//! Vintage film projector under the hero reel. Clicking it (or the reel
//! overlay) toggles the showreel; the hum runs for a few seconds on its own.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::audio::LoopKind;
use crate::config::studio;
use crate::context::{use_studio, StudioContext};
use crate::machines::{ProjectorEffect, ProjectorEvent, ProjectorState};

/// Projector state shared by the hero reel and the widget
#[derive(Clone, Copy)]
pub struct Projector {
    state: StoredValue<ProjectorState, LocalStorage>,
    timers: StoredValue<Vec<Timeout>, LocalStorage>,
    on: RwSignal<bool>,
    ctx: StudioContext,
}

impl Projector {
    pub fn new() -> Self {
        let ctx = use_studio();
        let projector = Self {
            state: StoredValue::new_local(ProjectorState::new(studio().projector.clone())),
            timers: StoredValue::new_local(Vec::new()),
            on: RwSignal::new(false),
            ctx,
        };
        on_cleanup(move || {
            let _ = projector.timers.try_update_value(|t| t.clear());
            ctx.stop_loop(LoopKind::ProjectorHum);
        });
        projector
    }

    pub fn is_on(&self) -> Signal<bool> {
        self.on.into()
    }

    pub fn toggle(self) {
        self.send(ProjectorEvent::Toggle);
    }

    fn send(self, event: ProjectorEvent) {
        let Some(effects) = self.state.try_update_value(|s| s.handle(event)) else {
            return;
        };
        if let Some(on) = self.state.try_with_value(|s| s.is_on()) {
            self.on.set(on);
        }
        let ctx = self.ctx;
        for effect in effects {
            match effect {
                ProjectorEffect::Play(cue) => ctx.play(cue),
                ProjectorEffect::StartLoop(kind) => ctx.start_loop(kind),
                ProjectorEffect::StopLoop(kind) => ctx.stop_loop(kind),
                ProjectorEffect::CancelTimers => self.timers.update_value(|t| t.clear()),
                ProjectorEffect::Schedule { after_ms, event } => {
                    let timer = Timeout::new(after_ms, move || self.send(event));
                    self.timers.update_value(|t| t.push(timer));
                }
            }
        }
    }
}

#[component]
pub fn ProjectorWidget(projector: Projector) -> impl IntoView {
    let on = projector.is_on();

    view! {
        <div class="projector-wrap" class:on=move || on.get()>
            <div class="projector-unit">
                <div class="projector-beam" aria-hidden="true"></div>
                <div
                    class="projector"
                    role="button"
                    aria-pressed=move || on.get().to_string()
                    aria-label="Toggle projector"
                    on:click=move |_| projector.toggle()
                >
                    <div class="projector-body">
                        <div class="projector-reel"></div>
                        <div class="projector-lens"></div>
                        <div class="projector-reel"></div>
                    </div>
                </div>
                <div class="projector-tripod" aria-hidden="true">
                    <span></span>
                    <span></span>
                </div>
                <p class="projector-prompt">
                    {move || if on.get() { "Now Playing" } else { "Click to play showreel" }}
                </p>
            </div>
        </div>
    }
}
