//! Intro Sequence Component
//!
//! Door, light switch, logo and "Enter Studio", driven by [`IntroMachine`].
//! This component only turns the machine's effects into timers, sounds and
//! classes.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use super::agency_reel::{reel_selection, AgencyReel};
use crate::audio::Cue;
use crate::config::studio;
use crate::context::{use_studio, StudioContext};
use crate::machines::{IntroEffect, IntroEvent, IntroMachine, IntroPhase};
use crate::models::assets::CLIENT_LOGOS;

const DUST_PARTICLES: usize = 20;

/// Bulb flicker before it settles on: (offset ms, lit, click sound)
const FLICKER: &[(u32, bool, bool)] = &[(200, true, true), (300, false, false), (400, true, true), (480, false, false)];

/// Signals the view reads
#[derive(Clone, Copy)]
struct IntroView {
    phase: RwSignal<IntroPhase>,
    switch_on: RwSignal<bool>,
    light_on: RwSignal<bool>,
    enter_shown: RwSignal<bool>,
    flicker_lit: RwSignal<bool>,
    switch_touched: RwSignal<bool>,
    reel_visible: RwSignal<bool>,
    reel_fading: RwSignal<bool>,
    overlay_hidden: RwSignal<bool>,
    gone: RwSignal<bool>,
}

impl IntroView {
    fn new() -> Self {
        Self {
            phase: RwSignal::new(IntroPhase::Door),
            switch_on: RwSignal::new(false),
            light_on: RwSignal::new(false),
            enter_shown: RwSignal::new(false),
            flicker_lit: RwSignal::new(false),
            switch_touched: RwSignal::new(false),
            reel_visible: RwSignal::new(false),
            reel_fading: RwSignal::new(false),
            overlay_hidden: RwSignal::new(false),
            gone: RwSignal::new(false),
        }
    }
}

#[derive(Clone, Copy)]
struct IntroDriver {
    machine: StoredValue<IntroMachine, LocalStorage>,
    timers: StoredValue<Vec<Timeout>, LocalStorage>,
    view: IntroView,
    ctx: StudioContext,
    on_complete: Callback<()>,
}

impl IntroDriver {
    fn send(self, event: IntroEvent) {
        let Some(effects) = self.machine.try_update_value(|m| m.handle(event)) else {
            return;
        };
        self.sync();
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Copy machine state into the view signals
    fn sync(self) {
        let Some((phase, switch_on, light_on, enter_shown)) = self
            .machine
            .try_with_value(|m| (m.phase(), m.switch_on(), m.light_on(), m.enter_shown()))
        else {
            return;
        };
        self.view.phase.set(phase);
        self.view.switch_on.set(switch_on);
        self.view.light_on.set(light_on);
        self.view.enter_shown.set(enter_shown);
        if !switch_on {
            self.view.flicker_lit.set(false);
        }
    }

    fn after(self, ms: u32, f: impl FnOnce() + 'static) {
        self.timers.update_value(|t| t.push(Timeout::new(ms, f)));
    }

    fn apply(self, effect: IntroEffect) {
        match effect {
            IntroEffect::Play(cue) => self.ctx.play(cue),
            IntroEffect::StartLoop(kind) => self.ctx.start_loop(kind),
            IntroEffect::StopLoop(kind) => self.ctx.stop_loop(kind),
            IntroEffect::Schedule { after_ms, event } => self.after(after_ms, move || self.send(event)),
            IntroEffect::Flicker => self.flicker(),
            IntroEffect::ScrollToTop => {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
            IntroEffect::Finish { montage } => self.finish(montage),
        }
    }

    fn flicker(self) {
        for &(offset, lit, click) in FLICKER {
            self.after(offset, move || {
                self.view.flicker_lit.set(lit);
                if click {
                    self.ctx.play(Cue::BulbFlicker);
                }
            });
        }
    }

    fn finish(self, montage: bool) {
        let config = studio();
        if montage {
            log::info!("intro done, rolling client reel");
            self.view.reel_visible.set(true);
            self.after(config.reel.display_ms, move || self.reel_done());
        } else {
            log::info!("intro done");
            self.view.overlay_hidden.set(true);
            self.after(config.intro.exit_fade_ms, move || self.complete());
        }
    }

    /// Overlay fades out under the reel, then the reel fades over the site
    fn reel_done(self) {
        let reel = &studio().reel;
        let reel_fade_ms = reel.reel_fade_ms;
        self.view.overlay_hidden.set(true);
        self.after(reel.overlay_fade_ms, move || {
            self.view.reel_fading.set(true);
            self.after(reel_fade_ms, move || self.complete());
        });
    }

    fn complete(self) {
        self.view.reel_visible.set(false);
        self.view.gone.set(true);
        self.on_complete.run(());
    }
}

#[component]
pub fn IntroSequence(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    let ctx = use_studio();
    let config = studio();
    let view_state = IntroView::new();
    let driver = IntroDriver {
        machine: StoredValue::new_local(IntroMachine::new(config.intro.clone(), !CLIENT_LOGOS.is_empty())),
        timers: StoredValue::new_local(Vec::new()),
        view: view_state,
        ctx,
        on_complete,
    };

    let reel_logos = reel_selection(CLIENT_LOGOS, config.reel.max_logos, js_sys::Math::random);

    let r = js_sys::Math::random;
    let dust: Vec<String> = (0..DUST_PARTICLES)
        .map(|_| {
            format!(
                "left:{:.2}%; top:{:.2}%; animation-delay:{:.2}s; animation-duration:{:.2}s",
                r() * 100.0,
                r() * 100.0,
                r() * 8.0,
                6.0 + r() * 6.0
            )
        })
        .collect();

    let IntroView {
        phase,
        switch_on,
        light_on,
        enter_shown,
        flicker_lit,
        switch_touched,
        reel_visible,
        reel_fading,
        overlay_hidden,
        gone,
    } = view_state;
    let door_open = move || phase.get() != IntroPhase::Door;
    let room_visible = move || matches!(phase.get(), IntroPhase::Switch | IntroPhase::LogoRevealed | IntroPhase::Done);
    let logo_visible = move || matches!(phase.get(), IntroPhase::LogoRevealed | IntroPhase::Done);

    view! {
        <Show when=move || reel_visible.get()>
            <AgencyReel logos=reel_logos.clone() fading=reel_fading />
        </Show>
        <Show when=move || !gone.get()>
            <div class="intro-overlay" class:hidden=move || overlay_hidden.get()>
                <div class="scene">
                    {dust.iter().map(|style| view! { <div class="dust" style=style.clone()></div> }).collect_view()}
                    <div class="hallway" class:faded=room_visible></div>

                    <div class="door-frame" class:cracked=door_open class:faded=room_visible>
                        <div class="door-light-spill"></div>
                        <div class="door" class:opening=door_open on:click=move |_| driver.send(IntroEvent::TapDoor)>
                            <div class="door-panel top"></div>
                            <div class="door-panel bottom"></div>
                            <div class="door-handle"></div>
                        </div>
                        <div class="door-prompt" class:faded=door_open>"Tap the door"</div>
                    </div>

                    <div class="room" class:visible=room_visible>
                        <div class="room-wall"></div>
                        <div class="bulb-container">
                            <div class="bulb-wire"></div>
                            <div class="bulb-fixture"></div>
                            <div class="bulb" class:lit=move || light_on.get() || flicker_lit.get()>
                                <div class="filament"></div>
                            </div>
                        </div>
                        <div class="light-cone" class:on=move || light_on.get()></div>
                        <div class="room-light" class:on=move || light_on.get()></div>

                        <div
                            class="switch-container"
                            on:click=move |_| {
                                switch_touched.set(true);
                                driver.send(IntroEvent::ToggleSwitch);
                            }
                        >
                            <div class="switch-prompt" class:faded=move || switch_touched.get()>"Flip the switch"</div>
                            <div class="switch-plate">
                                <div class="switch-toggle" class:on=move || switch_on.get()></div>
                            </div>
                        </div>

                        <div class="intro-logo" class:visible=logo_visible>
                            <img src="/Emotion.png" alt="E-Motion Production" width="400" height="400" />
                            <p>"Production"</p>
                            <button
                                class="enter-btn"
                                class:show=move || enter_shown.get()
                                on:click=move |_| driver.send(IntroEvent::Enter)
                            >
                                "Enter Studio"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
