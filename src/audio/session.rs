//! Audio Session
//!
//! Owns the one `AudioContext` of the page. The context is created on first
//! use (browsers only let it run after a user gesture) and every failure
//! degrades to silence.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AudioBuffer, AudioBufferSourceNode, AudioContext, AudioContextState, AudioScheduledSourceNode,
    BiquadFilterType, GainNode, OscillatorNode, OscillatorType,
};

use super::loops::LoopRegistry;
use super::synth;
use super::{Cue, LoopKind};

const DOOR_CREAK_PATH: &str = "/audio/door-creek.mp3";
const RING_CYCLE_MS: u32 = 1800;
const RING_SECOND_BURST_MS: u32 = 300;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("audio context unavailable")]
    NoContext,

    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("web audio: {0}")]
    Js(String),
}

impl From<JsValue> for AudioError {
    fn from(value: JsValue) -> Self {
        AudioError::Js(format!("{:?}", value))
    }
}

type AudioResult<T = ()> = Result<T, AudioError>;

/// A running loop
enum Voice {
    /// Oscillator bank behind one master gain
    Tone {
        master: GainNode,
        oscillators: Vec<OscillatorNode>,
        release: f64,
    },
    /// Timer-driven repeating bursts
    Pulse {
        alive: Rc<Cell<bool>>,
        _interval: Interval,
    },
}

impl Voice {
    fn release(self, ctx: Option<&AudioContext>) {
        match self {
            Voice::Tone { master, oscillators, release } => {
                let Some(ctx) = ctx else { return };
                let now = ctx.current_time();
                let _ = master.gain().linear_ramp_to_value_at_time(0.0, now + release);
                for osc in oscillators {
                    let _ = stop_at(&osc, now + release + 0.05);
                }
            }
            Voice::Pulse { alive, .. } => alive.set(false),
        }
    }
}

/// Shared sound engine
pub struct AudioSession {
    ctx: RefCell<Option<AudioContext>>,
    loops: RefCell<LoopRegistry<Voice>>,
    door_buffer: RefCell<Option<AudioBuffer>>,
}

/// Handle kept in [`crate::context::StudioContext`]; `Copy` so closures can capture it freely
pub type SharedAudio = StoredValue<Rc<AudioSession>, LocalStorage>;

fn random() -> f32 {
    js_sys::Math::random() as f32
}

impl AudioSession {
    pub fn new() -> Self {
        Self {
            ctx: RefCell::new(None),
            loops: RefCell::new(LoopRegistry::new()),
            door_buffer: RefCell::new(None),
        }
    }

    /// Lazily create the context and resume it if the browser suspended it
    fn context(&self) -> Option<AudioContext> {
        let mut slot = self.ctx.borrow_mut();
        if slot.is_none() {
            match AudioContext::new() {
                Ok(ctx) => {
                    log::debug!("audio context created");
                    *slot = Some(ctx);
                }
                Err(e) => {
                    log::warn!("audio context unavailable: {:?}", e);
                    return None;
                }
            }
        }
        let ctx = slot.as_ref()?.clone();
        if ctx.state() == AudioContextState::Suspended {
            let _ = ctx.resume();
        }
        Some(ctx)
    }

    pub fn is_muted(&self) -> bool {
        self.loops.borrow().is_muted()
    }

    /// Mute silences cues and stops every loop at once
    pub fn set_muted(&self, muted: bool) {
        let drained = self.loops.borrow_mut().set_muted(muted);
        let ctx = self.ctx.borrow().clone();
        for (kind, voice) in drained {
            log::debug!("mute stopped {:?}", kind);
            voice.release(ctx.as_ref());
        }
    }

    pub fn toggle_mute(&self) -> bool {
        let muted = !self.is_muted();
        self.set_muted(muted);
        muted
    }

    /// Fire a one-shot cue
    pub fn play(self: &Rc<Self>, cue: Cue) {
        if self.is_muted() {
            return;
        }
        if cue == Cue::DoorCreak {
            let session = Rc::clone(self);
            spawn_local(async move {
                if let Err(e) = session.door_creak().await {
                    log::warn!("door creak: {}", e);
                }
            });
            return;
        }
        let Some(ctx) = self.context() else { return };
        let result = match cue {
            Cue::SwitchClick => click(&ctx, 0.035, 8, Some(1200.0), 0.35),
            Cue::FaderClick => click(&ctx, 0.008, 10, None, 0.2),
            Cue::BulbFlicker => bulb_flicker(&ctx),
            Cue::LogoReveal => logo_reveal(&ctx),
            Cue::EnterWhoosh => enter_whoosh(&ctx),
            Cue::ProjectorStart => projector_start(&ctx),
            Cue::NeonCrackle => neon_crackle(&ctx),
            Cue::PhonePickup => phone_pickup(&ctx),
            Cue::ClapperSnap => clapper_snap(&ctx),
            Cue::VhsStatic => vhs_static(&ctx),
            Cue::DoorCreak => Ok(()),
        };
        if let Err(e) = result {
            log::debug!("cue {:?} failed: {}", cue, e);
        }
    }

    /// Start a loop unless it is already running
    pub fn start_loop(&self, kind: LoopKind) {
        let mut loops = self.loops.borrow_mut();
        let started = loops.start_with(kind, || {
            let ctx = self.context()?;
            let voice = match kind {
                LoopKind::BulbHum => tone_bank(&ctx, &[(120.0, 0.018)], 0.6, 0.3),
                LoopKind::ProjectorHum => tone_bank(&ctx, &[(82.0, 0.018), (164.0, 0.028), (246.0, 0.008)], 0.4, 0.4),
                LoopKind::NeonBuzz => tone_bank(&ctx, &[(120.0, 0.014), (240.0, 0.022), (360.0, 0.006)], 0.15, 0.2),
                LoopKind::PhoneRing => Ok(phone_ring(ctx)),
            };
            voice.map_err(|e| log::debug!("loop {:?} failed: {}", kind, e)).ok()
        });
        if started {
            log::debug!("loop {:?} started", kind);
        }
    }

    /// Stop a loop; no-op when it is not running
    pub fn stop_loop(&self, kind: LoopKind) {
        let voice = self.loops.borrow_mut().stop(kind);
        if let Some(voice) = voice {
            let ctx = self.ctx.borrow().clone();
            voice.release(ctx.as_ref());
            log::debug!("loop {:?} stopped", kind);
        }
    }

    /// Door creak is a recorded sample, fetched and decoded once
    async fn door_creak(&self) -> AudioResult {
        let ctx = self.context().ok_or(AudioError::NoContext)?;
        let cached = self.door_buffer.borrow().clone();
        let buffer = match cached {
            Some(buffer) => buffer,
            None => {
                let origin = web_sys::window()
                    .and_then(|w| w.location().origin().ok())
                    .unwrap_or_default();
                let bytes = reqwest::get(format!("{}{}", origin, DOOR_CREAK_PATH))
                    .await?
                    .error_for_status()?
                    .bytes()
                    .await?;
                let array = js_sys::Uint8Array::from(bytes.as_ref());
                let decoded = JsFuture::from(ctx.decode_audio_data(&array.buffer())?).await?;
                let buffer: AudioBuffer = decoded.dyn_into()?;
                *self.door_buffer.borrow_mut() = Some(buffer.clone());
                buffer
            }
        };
        if self.is_muted() {
            return Ok(());
        }
        let source = ctx.create_buffer_source()?;
        source.set_buffer(Some(&buffer));
        let gain = ctx.create_gain()?;
        gain.gain().set_value(0.8);
        source.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        source.start()?;
        Ok(())
    }
}

impl Default for AudioSession {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_source(ctx: &AudioContext, samples: &mut [f32]) -> AudioResult<AudioBufferSourceNode> {
    let buffer = ctx.create_buffer(1, samples.len() as u32, ctx.sample_rate())?;
    buffer.copy_to_channel(samples, 0)?;
    let source = ctx.create_buffer_source()?;
    source.set_buffer(Some(&buffer));
    Ok(source)
}

fn start_at(node: &AudioScheduledSourceNode, when: f64) -> AudioResult {
    node.start_with_when(when)?;
    Ok(())
}

fn stop_at(node: &AudioScheduledSourceNode, when: f64) -> AudioResult {
    node.stop_with_when(when)?;
    Ok(())
}

fn oscillator(ctx: &AudioContext, kind: OscillatorType, freq: f32) -> AudioResult<OscillatorNode> {
    let osc = ctx.create_oscillator()?;
    osc.set_type(kind);
    osc.frequency().set_value(freq);
    Ok(osc)
}

/// Short filtered noise tick
fn click(ctx: &AudioContext, seconds: f32, decay: i32, highpass: Option<f32>, level: f32) -> AudioResult {
    let now = ctx.current_time();
    let mut data = synth::decaying_noise(synth::sample_count(ctx.sample_rate(), seconds), decay, random);
    let source = buffer_source(ctx, &mut data)?;
    let gain = ctx.create_gain()?;
    gain.gain().set_value_at_time(level, now)?;
    match highpass {
        Some(freq) => {
            let filter = ctx.create_biquad_filter()?;
            filter.set_type(BiquadFilterType::Highpass);
            filter.frequency().set_value(freq);
            source.connect_with_audio_node(&filter)?;
            filter.connect_with_audio_node(&gain)?;
        }
        None => {
            source.connect_with_audio_node(&gain)?;
        }
    }
    gain.connect_with_audio_node(&ctx.destination())?;
    start_at(&source, now)?;
    Ok(())
}

fn bulb_flicker(ctx: &AudioContext) -> AudioResult {
    let now = ctx.current_time();
    let osc = oscillator(ctx, OscillatorType::Sawtooth, 60.0)?;
    let gain = ctx.create_gain()?;
    gain.gain().set_value_at_time(0.06, now)?;
    gain.gain().linear_ramp_to_value_at_time(0.0, now + 0.08)?;
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    start_at(&osc, now)?;
    stop_at(&osc, now + 0.08)?;
    Ok(())
}

fn logo_reveal(ctx: &AudioContext) -> AudioResult {
    let now = ctx.current_time();
    // (wave, start Hz, end Hz, envelope points)
    let layers: [(OscillatorType, f32, f32, &[(f32, f64)]); 2] = [
        (OscillatorType::Sine, 220.0, 660.0, &[(0.07, 0.3), (0.03, 1.0), (0.0, 1.5)]),
        (OscillatorType::Triangle, 330.0, 880.0, &[(0.025, 0.5), (0.0, 1.5)]),
    ];
    for (wave, from, to, envelope) in layers {
        let osc = oscillator(ctx, wave, from)?;
        osc.frequency().set_value_at_time(from, now)?;
        osc.frequency().exponential_ramp_to_value_at_time(to, now + 1.4)?;
        let gain = ctx.create_gain()?;
        gain.gain().set_value_at_time(0.0, now)?;
        for (level, at) in envelope {
            gain.gain().linear_ramp_to_value_at_time(*level, now + at)?;
        }
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        start_at(&osc, now)?;
        stop_at(&osc, now + 1.5)?;
    }
    Ok(())
}

fn enter_whoosh(ctx: &AudioContext) -> AudioResult {
    let now = ctx.current_time();
    let mut data = synth::white_noise(synth::sample_count(ctx.sample_rate(), 0.9), random);
    let source = buffer_source(ctx, &mut data)?;
    let filter = ctx.create_biquad_filter()?;
    filter.set_type(BiquadFilterType::Bandpass);
    filter.frequency().set_value_at_time(200.0, now)?;
    filter.frequency().exponential_ramp_to_value_at_time(4000.0, now + 0.25)?;
    filter.frequency().exponential_ramp_to_value_at_time(80.0, now + 0.9)?;
    filter.q().set_value(1.2);
    let gain = ctx.create_gain()?;
    gain.gain().set_value_at_time(0.0, now)?;
    gain.gain().linear_ramp_to_value_at_time(0.14, now + 0.12)?;
    gain.gain().linear_ramp_to_value_at_time(0.0, now + 0.9)?;
    source.connect_with_audio_node(&filter)?;
    filter.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    start_at(&source, now)?;
    stop_at(&source, now + 0.9)?;
    Ok(())
}

fn projector_start(ctx: &AudioContext) -> AudioResult {
    let now = ctx.current_time();

    // Motor whir sweeping up
    let osc = oscillator(ctx, OscillatorType::Sawtooth, 30.0)?;
    osc.frequency().set_value_at_time(30.0, now)?;
    osc.frequency().exponential_ramp_to_value_at_time(110.0, now + 0.6)?;
    let motor = ctx.create_gain()?;
    motor.gain().set_value_at_time(0.0, now)?;
    motor.gain().linear_ramp_to_value_at_time(0.12, now + 0.15)?;
    motor.gain().linear_ramp_to_value_at_time(0.06, now + 0.6)?;
    osc.connect_with_audio_node(&motor)?;
    motor.connect_with_audio_node(&ctx.destination())?;
    start_at(&osc, now)?;
    stop_at(&osc, now + 0.65)?;

    // Film loading rattle
    let mut data = synth::sparse_noise(synth::sample_count(ctx.sample_rate(), 0.5), 0.04, 0.6, random);
    let source = buffer_source(ctx, &mut data)?;
    let filter = ctx.create_biquad_filter()?;
    filter.set_type(BiquadFilterType::Bandpass);
    filter.frequency().set_value(2400.0);
    filter.q().set_value(1.2);
    let rattle = ctx.create_gain()?;
    rattle.gain().set_value_at_time(0.18, now)?;
    rattle.gain().linear_ramp_to_value_at_time(0.0, now + 0.5)?;
    source.connect_with_audio_node(&filter)?;
    filter.connect_with_audio_node(&rattle)?;
    rattle.connect_with_audio_node(&ctx.destination())?;
    start_at(&source, now)?;
    Ok(())
}

fn neon_crackle(ctx: &AudioContext) -> AudioResult {
    let now = ctx.current_time();
    let mut data = synth::sparse_noise(synth::sample_count(ctx.sample_rate(), 0.04), 0.12, 1.0, random);
    let source = buffer_source(ctx, &mut data)?;
    let filter = ctx.create_biquad_filter()?;
    filter.set_type(BiquadFilterType::Bandpass);
    filter.frequency().set_value(1800.0);
    let gain = ctx.create_gain()?;
    gain.gain().set_value_at_time(0.22, now)?;
    gain.gain().linear_ramp_to_value_at_time(0.0, now + 0.04)?;
    source.connect_with_audio_node(&filter)?;
    filter.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    start_at(&source, now)?;
    Ok(())
}

fn phone_pickup(ctx: &AudioContext) -> AudioResult {
    let now = ctx.current_time();
    click(ctx, 0.02, 6, None, 0.3)?;

    // Short connect tone
    let osc = oscillator(ctx, OscillatorType::Sine, 440.0)?;
    let gain = ctx.create_gain()?;
    gain.gain().set_value_at_time(0.0, now + 0.04)?;
    gain.gain().linear_ramp_to_value_at_time(0.04, now + 0.15)?;
    gain.gain().linear_ramp_to_value_at_time(0.0, now + 0.55)?;
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    start_at(&osc, now + 0.04)?;
    stop_at(&osc, now + 0.6)?;
    Ok(())
}

fn clapper_snap(ctx: &AudioContext) -> AudioResult {
    let now = ctx.current_time();
    let mut data = synth::decaying_noise(synth::sample_count(ctx.sample_rate(), 0.06), 3, random);
    let source = buffer_source(ctx, &mut data)?;
    let filter = ctx.create_biquad_filter()?;
    filter.set_type(BiquadFilterType::Highpass);
    filter.frequency().set_value(800.0);
    let gain = ctx.create_gain()?;
    gain.gain().set_value_at_time(0.55, now)?;
    gain.gain().exponential_ramp_to_value_at_time(0.001, now + 0.06)?;
    source.connect_with_audio_node(&filter)?;
    filter.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    start_at(&source, now)?;
    Ok(())
}

fn vhs_static(ctx: &AudioContext) -> AudioResult {
    let now = ctx.current_time();
    let mut data = synth::white_noise(synth::sample_count(ctx.sample_rate(), 0.08), random);
    let source = buffer_source(ctx, &mut data)?;
    let filter = ctx.create_biquad_filter()?;
    filter.set_type(BiquadFilterType::Bandpass);
    filter.frequency().set_value(2500.0);
    filter.q().set_value(0.8);
    let gain = ctx.create_gain()?;
    gain.gain().set_value_at_time(0.12, now)?;
    gain.gain().linear_ramp_to_value_at_time(0.0, now + 0.08)?;
    source.connect_with_audio_node(&filter)?;
    filter.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    start_at(&source, now)?;
    Ok(())
}

/// Sine bank faded in over `attack` and out over `release`
fn tone_bank(ctx: &AudioContext, partials: &[(f32, f32)], attack: f64, release: f64) -> AudioResult<Voice> {
    let now = ctx.current_time();
    let master = ctx.create_gain()?;
    master.gain().set_value_at_time(0.0, now)?;
    master.gain().linear_ramp_to_value_at_time(1.0, now + attack)?;
    master.connect_with_audio_node(&ctx.destination())?;

    let mut oscillators = Vec::with_capacity(partials.len());
    for (freq, level) in partials {
        let osc = oscillator(ctx, OscillatorType::Sine, *freq)?;
        let gain = ctx.create_gain()?;
        gain.gain().set_value(*level);
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&master)?;
        start_at(&osc, now)?;
        oscillators.push(osc);
    }
    Ok(Voice::Tone { master, oscillators, release })
}

/// Two quick 480/620 Hz chirps
fn ring_burst(ctx: &AudioContext) -> AudioResult {
    let now = ctx.current_time();
    for (i, freq) in [480.0, 620.0].into_iter().enumerate() {
        let osc = oscillator(ctx, OscillatorType::Sine, freq)?;
        let gain = ctx.create_gain()?;
        let t = now + i as f64 * 0.025;
        gain.gain().set_value_at_time(0.0, t)?;
        gain.gain().linear_ramp_to_value_at_time(0.07, t + 0.01)?;
        gain.gain().linear_ramp_to_value_at_time(0.0, t + 0.025)?;
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        start_at(&osc, t)?;
        stop_at(&osc, t + 0.03)?;
    }
    Ok(())
}

/// Ring pattern: burst, burst 300ms later, repeat every 1.8s
fn phone_ring(ctx: AudioContext) -> Voice {
    let alive = Rc::new(Cell::new(true));
    let cycle = {
        let alive = Rc::clone(&alive);
        move || {
            if !alive.get() {
                return;
            }
            let _ = ring_burst(&ctx);
            let alive = Rc::clone(&alive);
            let ctx = ctx.clone();
            Timeout::new(RING_SECOND_BURST_MS, move || {
                if alive.get() {
                    let _ = ring_burst(&ctx);
                }
            })
            .forget();
        }
    };
    cycle();
    Voice::Pulse {
        alive,
        _interval: Interval::new(RING_CYCLE_MS, cycle),
    }
}
