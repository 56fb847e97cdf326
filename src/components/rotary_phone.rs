//! Rotary Phone Component
//!
//! CSS-drawn telephone beside the contact form. Rings when it scrolls into
//! view, retries a few times, and picking it up focuses the form.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use super::watch::on_first_visible;
use crate::config::studio;
use crate::context::{use_studio, StudioContext};
use crate::machines::{CallEffect, CallEvent, CallSimulator, RingState};

/// Dial hole angles, degrees clockwise from twelve o'clock
const HOLE_ANGLES: [f64; 10] = [300.0, 330.0, 0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0];
const DIAL_RADIUS_PX: f64 = 46.0;

#[derive(Clone, Copy)]
struct PhoneLine {
    sim: StoredValue<CallSimulator, LocalStorage>,
    timers: StoredValue<Vec<Timeout>, LocalStorage>,
    state: RwSignal<RingState>,
    ctx: StudioContext,
    on_connect: Callback<u32>,
}

impl PhoneLine {
    fn send(self, event: CallEvent) {
        let Some(effects) = self.sim.try_update_value(|s| s.handle(event)) else {
            return;
        };
        if let Some(state) = self.sim.try_with_value(|s| s.state()) {
            self.state.set(state);
        }
        for effect in effects {
            match effect {
                CallEffect::Schedule { after_ms, event } => {
                    let timer = Timeout::new(after_ms, move || self.send(event));
                    self.timers.update_value(|t| t.push(timer));
                }
                CallEffect::CancelTimers => self.timers.update_value(|t| t.clear()),
                CallEffect::StartLoop(kind) => self.ctx.start_loop(kind),
                CallEffect::StopLoop(kind) => self.ctx.stop_loop(kind),
                CallEffect::Play(cue) => self.ctx.play(cue),
                CallEffect::FocusContact { after_ms } => self.on_connect.run(after_ms),
            }
        }
        if event == CallEvent::RingTimeout {
            let missed = self.sim.try_with_value(|s| s.missed()).unwrap_or(0);
            log::debug!("missed call {}", missed);
        }
    }
}

/// `on_connect` receives the delay before the contact form should take focus
#[component]
pub fn RotaryPhone(#[prop(into)] on_connect: Callback<u32>) -> impl IntoView {
    let ctx = use_studio();
    let line = PhoneLine {
        sim: StoredValue::new_local(CallSimulator::new(studio().call.clone())),
        timers: StoredValue::new_local(Vec::new()),
        state: RwSignal::new(RingState::Idle),
        ctx,
        on_connect,
    };
    on_cleanup(move || {
        let _ = line.timers.try_update_value(|t| t.clear());
        ctx.stop_loop(crate::audio::LoopKind::PhoneRing);
    });

    let phone = NodeRef::<html::Div>::new();
    on_first_visible(phone, 0.5, move || line.send(CallEvent::EnteredView));

    let state = line.state;
    let holes = HOLE_ANGLES
        .iter()
        .map(|angle| {
            let rad = (angle - 90.0).to_radians();
            let style = format!(
                "transform: translate({:.1}px, {:.1}px)",
                rad.cos() * DIAL_RADIUS_PX,
                rad.sin() * DIAL_RADIUS_PX
            );
            view! { <div class="dial-hole" style=style></div> }
        })
        .collect_view();

    view! {
        <div
            class="rotary-phone"
            class:ringing=move || state.get() == RingState::Ringing
            class:picked-up=move || state.get() == RingState::Connected
            node_ref=phone
            on:click=move |_| line.send(CallEvent::PickUp)
        >
            <div class="phone-handset">
                <div class="handset-ear"></div>
                <div class="handset-body"></div>
                <div class="handset-mouth"></div>
            </div>
            <div class="phone-body">
                <div class="phone-dial">
                    {holes}
                    <div class="dial-center"></div>
                </div>
            </div>
            <div class="phone-prompt" class:visible=move || state.get() == RingState::Missed>
                "Click to connect"
            </div>
        </div>
    }
}
