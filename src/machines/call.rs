//! Call Simulator
//!
//! The rotary phone rings when it scrolls into view, gives up after a while,
//! and tries again until the retry ceiling. Picking up ends it for good.

use serde::Deserialize;

use crate::audio::{Cue, LoopKind};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CallTiming {
    pub first_ring_delay_ms: u32,
    pub ring_ms: u32,
    pub retry_pause_ms: u32,
    /// Missed calls before the phone stops trying
    pub max_missed: u32,
    /// Pick-up until the contact form is focused
    pub focus_delay_ms: u32,
}

impl Default for CallTiming {
    fn default() -> Self {
        Self {
            first_ring_delay_ms: 600,
            ring_ms: 3600,
            retry_pause_ms: 6000,
            max_missed: 3,
            focus_delay_ms: 400,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingState {
    Idle,
    Ringing,
    Missed,
    Connected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallEvent {
    EnteredView,
    RingStart,
    RingTimeout,
    PickUp,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CallEffect {
    Schedule { after_ms: u32, event: CallEvent },
    /// Drop every pending timer
    CancelTimers,
    StartLoop(LoopKind),
    StopLoop(LoopKind),
    Play(Cue),
    /// Bring the contact form into view after `after_ms`
    FocusContact { after_ms: u32 },
}

#[derive(Clone, Debug)]
pub struct CallSimulator {
    state: RingState,
    missed: u32,
    seen: bool,
    timing: CallTiming,
}

impl CallSimulator {
    pub fn new(timing: CallTiming) -> Self {
        Self {
            state: RingState::Idle,
            missed: 0,
            seen: false,
            timing,
        }
    }

    pub fn state(&self) -> RingState {
        self.state
    }

    pub fn missed(&self) -> u32 {
        self.missed
    }

    /// Whether another ring is still allowed
    fn can_retry(&self) -> bool {
        self.missed < self.timing.max_missed
    }

    pub fn handle(&mut self, event: CallEvent) -> Vec<CallEffect> {
        use CallEffect::*;
        use RingState::*;

        match (self.state, event) {
            (_, CallEvent::PickUp) if self.state != Connected => {
                let was_ringing = self.state == Ringing;
                self.state = Connected;
                let mut effects = vec![CancelTimers];
                if was_ringing {
                    effects.push(StopLoop(LoopKind::PhoneRing));
                }
                effects.push(Play(Cue::PhonePickup));
                effects.push(FocusContact {
                    after_ms: self.timing.focus_delay_ms,
                });
                effects
            }
            (Idle, CallEvent::EnteredView) if !self.seen => {
                self.seen = true;
                if !self.can_retry() {
                    return Vec::new();
                }
                vec![Schedule {
                    after_ms: self.timing.first_ring_delay_ms,
                    event: CallEvent::RingStart,
                }]
            }
            (Idle | Missed, CallEvent::RingStart) if self.can_retry() => {
                self.state = Ringing;
                vec![
                    StartLoop(LoopKind::PhoneRing),
                    Schedule {
                        after_ms: self.timing.ring_ms,
                        event: CallEvent::RingTimeout,
                    },
                ]
            }
            (Ringing, CallEvent::RingTimeout) => {
                self.state = Missed;
                self.missed += 1;
                let mut effects = vec![StopLoop(LoopKind::PhoneRing)];
                if self.can_retry() {
                    effects.push(Schedule {
                        after_ms: self.timing.retry_pause_ms,
                        event: CallEvent::RingStart,
                    });
                }
                effects
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(effects: &[CallEffect]) -> Option<CallEvent> {
        effects.iter().find_map(|e| match e {
            CallEffect::Schedule { event, .. } => Some(*event),
            _ => None,
        })
    }

    /// Follow the timer chain until nothing more is scheduled
    fn run_out(sim: &mut CallSimulator) {
        let mut next = scheduled(&sim.handle(CallEvent::EnteredView));
        while let Some(event) = next {
            next = scheduled(&sim.handle(event));
        }
    }

    #[test]
    fn test_rings_after_entering_view() {
        let mut sim = CallSimulator::new(CallTiming::default());
        let fx = sim.handle(CallEvent::EnteredView);
        assert_eq!(scheduled(&fx), Some(CallEvent::RingStart));
        assert_eq!(sim.state(), RingState::Idle);
        // Entering again does not schedule a second ring
        assert!(sim.handle(CallEvent::EnteredView).is_empty());

        let fx = sim.handle(CallEvent::RingStart);
        assert_eq!(sim.state(), RingState::Ringing);
        assert!(fx.contains(&CallEffect::StartLoop(LoopKind::PhoneRing)));
    }

    #[test]
    fn test_missed_counter_one_per_ring() {
        let mut sim = CallSimulator::new(CallTiming::default());
        sim.handle(CallEvent::EnteredView);
        for expected in 1..=2 {
            sim.handle(CallEvent::RingStart);
            let fx = sim.handle(CallEvent::RingTimeout);
            assert_eq!(sim.missed(), expected);
            assert_eq!(sim.state(), RingState::Missed);
            assert!(fx.contains(&CallEffect::StopLoop(LoopKind::PhoneRing)));
            assert_eq!(scheduled(&fx), Some(CallEvent::RingStart));
        }
        // A duplicate timeout outside a ring changes nothing
        assert!(sim.handle(CallEvent::RingTimeout).is_empty());
        assert_eq!(sim.missed(), 2);
    }

    #[test]
    fn test_stops_at_retry_ceiling() {
        let timing = CallTiming {
            max_missed: 3,
            ..CallTiming::default()
        };
        let mut sim = CallSimulator::new(timing);
        run_out(&mut sim);
        assert_eq!(sim.missed(), 3);
        assert_eq!(sim.state(), RingState::Missed);
        // Stray timer after the ceiling
        assert!(sim.handle(CallEvent::RingStart).is_empty());
        assert_eq!(sim.missed(), 3);
    }

    #[test]
    fn test_zero_ceiling_never_rings() {
        let timing = CallTiming {
            max_missed: 0,
            ..CallTiming::default()
        };
        let mut sim = CallSimulator::new(timing);
        assert!(sim.handle(CallEvent::EnteredView).is_empty());
        assert!(sim.handle(CallEvent::RingStart).is_empty());
        assert_eq!(sim.state(), RingState::Idle);
    }

    #[test]
    fn test_pick_up_while_ringing() {
        let mut sim = CallSimulator::new(CallTiming::default());
        sim.handle(CallEvent::EnteredView);
        sim.handle(CallEvent::RingStart);
        let fx = sim.handle(CallEvent::PickUp);
        assert_eq!(sim.state(), RingState::Connected);
        assert_eq!(fx[0], CallEffect::CancelTimers);
        assert!(fx.contains(&CallEffect::StopLoop(LoopKind::PhoneRing)));
        assert!(fx.contains(&CallEffect::Play(Cue::PhonePickup)));

        // Timers that slipped through are ignored
        assert!(sim.handle(CallEvent::RingTimeout).is_empty());
        assert!(sim.handle(CallEvent::RingStart).is_empty());
        assert_eq!(sim.missed(), 0);
        // Connected is terminal
        assert!(sim.handle(CallEvent::PickUp).is_empty());
    }

    #[test]
    fn test_pick_up_after_ceiling_still_connects() {
        let mut sim = CallSimulator::new(CallTiming::default());
        run_out(&mut sim);
        let fx = sim.handle(CallEvent::PickUp);
        assert_eq!(sim.state(), RingState::Connected);
        assert!(!fx.contains(&CallEffect::StopLoop(LoopKind::PhoneRing)));
        assert_eq!(sim.missed(), 3);
    }

    #[test]
    fn test_pick_up_before_first_ring() {
        let mut sim = CallSimulator::new(CallTiming::default());
        sim.handle(CallEvent::EnteredView);
        sim.handle(CallEvent::PickUp);
        assert!(sim.handle(CallEvent::RingStart).is_empty());
        assert_eq!(sim.state(), RingState::Connected);
    }
}
