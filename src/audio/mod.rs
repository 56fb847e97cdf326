//! Sound Engine
//!
//! Synthesised cues and looping tones, shared by every widget through a
//! single [`AudioSession`].

mod loops;
mod session;
mod synth;

pub use session::{AudioSession, SharedAudio};

/// One-shot sound effects
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    DoorCreak,
    SwitchClick,
    BulbFlicker,
    LogoReveal,
    EnterWhoosh,
    ProjectorStart,
    NeonCrackle,
    PhonePickup,
    ClapperSnap,
    FaderClick,
    VhsStatic,
}

/// Continuous sounds; at most one of each plays at a time
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopKind {
    BulbHum,
    ProjectorHum,
    NeonBuzz,
    PhoneRing,
}
