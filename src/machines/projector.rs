//! Projector toggle for the hero showreel.
//!
//! Turning it on plays the start-up clatter, then hums for a while and goes
//! quiet on its own. Every toggle bumps a generation so timers from an earlier
//! run can be told apart.

use serde::Deserialize;

use crate::audio::{Cue, LoopKind};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectorTiming {
    pub hum_delay_ms: u32,
    pub hum_ms: u32,
}

impl Default for ProjectorTiming {
    fn default() -> Self {
        Self {
            hum_delay_ms: 600,
            hum_ms: 3000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectorEvent {
    Toggle,
    HumStart(u32),
    HumStop(u32),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProjectorEffect {
    Play(Cue),
    StartLoop(LoopKind),
    StopLoop(LoopKind),
    Schedule { after_ms: u32, event: ProjectorEvent },
    CancelTimers,
}

#[derive(Clone, Debug, Default)]
pub struct ProjectorState {
    on: bool,
    generation: u32,
    timing: ProjectorTiming,
}

impl ProjectorState {
    pub fn new(timing: ProjectorTiming) -> Self {
        Self {
            on: false,
            generation: 0,
            timing,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    #[cfg(test)]
    fn generation(&self) -> u32 {
        self.generation
    }

    pub fn handle(&mut self, event: ProjectorEvent) -> Vec<ProjectorEffect> {
        use ProjectorEffect::*;

        match event {
            ProjectorEvent::Toggle => {
                self.on = !self.on;
                self.generation = self.generation.wrapping_add(1);
                if self.on {
                    vec![
                        Play(Cue::ProjectorStart),
                        Schedule {
                            after_ms: self.timing.hum_delay_ms,
                            event: ProjectorEvent::HumStart(self.generation),
                        },
                    ]
                } else {
                    vec![CancelTimers, StopLoop(LoopKind::ProjectorHum)]
                }
            }
            ProjectorEvent::HumStart(gen) if self.on && gen == self.generation => vec![
                StartLoop(LoopKind::ProjectorHum),
                Schedule {
                    after_ms: self.timing.hum_ms,
                    event: ProjectorEvent::HumStop(gen),
                },
            ],
            ProjectorEvent::HumStop(gen) if gen == self.generation => {
                vec![StopLoop(LoopKind::ProjectorHum)]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(effects: &[ProjectorEffect]) -> Option<ProjectorEvent> {
        effects.iter().find_map(|e| match e {
            ProjectorEffect::Schedule { event, .. } => Some(*event),
            _ => None,
        })
    }

    #[test]
    fn test_on_hums_then_stops_by_itself() {
        let mut p = ProjectorState::new(ProjectorTiming::default());
        let fx = p.handle(ProjectorEvent::Toggle);
        assert!(p.is_on());
        assert_eq!(fx[0], ProjectorEffect::Play(Cue::ProjectorStart));

        let start = scheduled(&fx).unwrap();
        let fx = p.handle(start);
        assert!(fx.contains(&ProjectorEffect::StartLoop(LoopKind::ProjectorHum)));

        let stop = scheduled(&fx).unwrap();
        let fx = p.handle(stop);
        assert_eq!(fx, vec![ProjectorEffect::StopLoop(LoopKind::ProjectorHum)]);
        // Reel keeps running after the hum fades
        assert!(p.is_on());
    }

    #[test]
    fn test_off_cancels_pending_hum() {
        let mut p = ProjectorState::new(ProjectorTiming::default());
        let fx = p.handle(ProjectorEvent::Toggle);
        let start = scheduled(&fx).unwrap();

        let off = p.handle(ProjectorEvent::Toggle);
        assert!(!p.is_on());
        assert!(off.contains(&ProjectorEffect::CancelTimers));
        assert!(off.contains(&ProjectorEffect::StopLoop(LoopKind::ProjectorHum)));

        // Timer that fired anyway
        assert!(p.handle(start).is_empty());
    }

    #[test]
    fn test_old_generation_stop_does_not_cut_new_run() {
        let mut p = ProjectorState::new(ProjectorTiming::default());
        let fx = p.handle(ProjectorEvent::Toggle);
        let first_start = scheduled(&fx).unwrap();
        let first_stop = scheduled(&p.handle(first_start)).unwrap();

        p.handle(ProjectorEvent::Toggle);
        let fx = p.handle(ProjectorEvent::Toggle);
        let second_start = scheduled(&fx).unwrap();
        p.handle(second_start);

        assert!(p.handle(first_stop).is_empty());
        assert_eq!(p.generation(), 3);
    }
}
