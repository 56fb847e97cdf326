//! Pure state machines behind the interactive widgets. Each takes events and
//! hands back effects; nothing in here touches the DOM.

pub mod call;
pub mod channel;
pub mod intro;
pub mod projector;
pub mod toast;

pub use call::{CallEffect, CallEvent, CallSimulator, CallTiming, RingState};
pub use channel::{BroadcastDeck, ChannelChange, ChannelTiming, Playback};
pub use intro::{IntroEffect, IntroEvent, IntroMachine, IntroPhase, IntroTiming};
pub use projector::{ProjectorEffect, ProjectorEvent, ProjectorState, ProjectorTiming};
pub use toast::{Dismissal, Toast};
