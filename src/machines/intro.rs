//! Intro Sequence
//!
//! Door → switch → logo → enter. The machine only decides; the component
//! turns [`IntroEffect`]s into timers, sounds and classes.

use serde::Deserialize;

use crate::audio::{Cue, LoopKind};

/// Timing of the intro choreography, in milliseconds
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IntroTiming {
    /// Door swing before the room shows
    pub door_open_ms: u32,
    /// Switch flip until the bulb settles on (covers the flicker)
    pub switch_warmup_ms: u32,
    /// Light on until the logo shows
    pub logo_delay_ms: u32,
    /// Busy window after switching off
    pub switch_cooldown_ms: u32,
    /// Logo shown until the enter button appears
    pub enter_button_delay_ms: u32,
    /// Overlay fade when there is no logo montage
    pub exit_fade_ms: u32,
}

impl Default for IntroTiming {
    fn default() -> Self {
        Self {
            door_open_ms: 1200,
            switch_warmup_ms: 580,
            logo_delay_ms: 800,
            switch_cooldown_ms: 300,
            enter_button_delay_ms: 500,
            exit_fade_ms: 1000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPhase {
    Door,
    Transitioning,
    Switch,
    LogoRevealed,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroEvent {
    TapDoor,
    DoorOpened,
    ToggleSwitch,
    LightOn,
    RevealLogo,
    ShowEnterButton,
    SwitchSettled,
    Enter,
}

#[derive(Clone, Debug, PartialEq)]
pub enum IntroEffect {
    Play(Cue),
    StartLoop(LoopKind),
    StopLoop(LoopKind),
    Schedule { after_ms: u32, event: IntroEvent },
    /// Run the bulb flicker animation
    Flicker,
    ScrollToTop,
    /// Intro is over; `montage` asks for the client-logo reel first
    Finish { montage: bool },
}

#[derive(Clone, Debug)]
pub struct IntroMachine {
    phase: IntroPhase,
    switch_on: bool,
    light_on: bool,
    enter_shown: bool,
    busy: bool,
    has_logos: bool,
    timing: IntroTiming,
}

impl IntroMachine {
    pub fn new(timing: IntroTiming, has_logos: bool) -> Self {
        Self {
            phase: IntroPhase::Door,
            switch_on: false,
            light_on: false,
            enter_shown: false,
            busy: false,
            has_logos,
            timing,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn switch_on(&self) -> bool {
        self.switch_on
    }

    pub fn light_on(&self) -> bool {
        self.light_on
    }

    pub fn enter_shown(&self) -> bool {
        self.enter_shown
    }

    #[cfg(test)]
    fn is_busy(&self) -> bool {
        self.busy
    }

    /// Apply an event. Events that do not fit the current state are ignored
    /// and produce no effects.
    pub fn handle(&mut self, event: IntroEvent) -> Vec<IntroEffect> {
        use IntroEffect::*;
        use IntroPhase::*;

        match (self.phase, event) {
            (Door, IntroEvent::TapDoor) => {
                self.phase = Transitioning;
                vec![
                    Play(Cue::DoorCreak),
                    Schedule { after_ms: self.timing.door_open_ms, event: IntroEvent::DoorOpened },
                ]
            }
            (Transitioning, IntroEvent::DoorOpened) => {
                self.phase = Switch;
                Vec::new()
            }
            (Switch | LogoRevealed, IntroEvent::ToggleSwitch) if !self.busy => self.toggle(),
            (Switch, IntroEvent::LightOn) if self.switch_on && !self.light_on => {
                self.light_on = true;
                vec![
                    StartLoop(LoopKind::BulbHum),
                    Schedule { after_ms: self.timing.logo_delay_ms, event: IntroEvent::RevealLogo },
                ]
            }
            (Switch, IntroEvent::RevealLogo) if self.light_on => {
                self.phase = LogoRevealed;
                self.busy = false;
                vec![
                    Play(Cue::LogoReveal),
                    Schedule { after_ms: self.timing.enter_button_delay_ms, event: IntroEvent::ShowEnterButton },
                ]
            }
            (LogoRevealed, IntroEvent::ShowEnterButton) => {
                self.enter_shown = true;
                Vec::new()
            }
            (Switch, IntroEvent::SwitchSettled) if !self.switch_on => {
                self.busy = false;
                Vec::new()
            }
            (LogoRevealed, IntroEvent::Enter) => {
                self.phase = Done;
                vec![
                    StopLoop(LoopKind::BulbHum),
                    Play(Cue::EnterWhoosh),
                    ScrollToTop,
                    Finish { montage: self.has_logos },
                ]
            }
            _ => Vec::new(),
        }
    }

    fn toggle(&mut self) -> Vec<IntroEffect> {
        use IntroEffect::*;

        self.busy = true;
        if !self.switch_on {
            self.switch_on = true;
            vec![
                Play(Cue::SwitchClick),
                Flicker,
                Schedule { after_ms: self.timing.switch_warmup_ms, event: IntroEvent::LightOn },
            ]
        } else {
            self.switch_on = false;
            self.light_on = false;
            self.enter_shown = false;
            self.phase = IntroPhase::Switch;
            vec![
                Play(Cue::SwitchClick),
                StopLoop(LoopKind::BulbHum),
                Schedule { after_ms: self.timing.switch_cooldown_ms, event: IntroEvent::SwitchSettled },
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run every scheduled event in due order, like the browser's timers would
    fn settle(machine: &mut IntroMachine, effects: Vec<IntroEffect>) -> Vec<IntroEffect> {
        let mut all = Vec::new();
        let mut queue: Vec<(u32, IntroEvent)> = Vec::new();
        let mut now = 0;
        let mut pending = effects;
        loop {
            for effect in pending.drain(..) {
                if let IntroEffect::Schedule { after_ms, event } = effect {
                    queue.push((now + after_ms, event));
                }
                all.push(effect);
            }
            queue.sort_by_key(|(due, _)| *due);
            if queue.is_empty() {
                break;
            }
            let (due, event) = queue.remove(0);
            now = due;
            pending = machine.handle(event);
        }
        all
    }

    fn at_switch(has_logos: bool) -> IntroMachine {
        let mut m = IntroMachine::new(IntroTiming::default(), has_logos);
        let fx = m.handle(IntroEvent::TapDoor);
        settle(&mut m, fx);
        assert_eq!(m.phase(), IntroPhase::Switch);
        m
    }

    #[test]
    fn test_door_is_one_way() {
        let mut m = IntroMachine::new(IntroTiming::default(), false);
        let fx = m.handle(IntroEvent::TapDoor);
        assert_eq!(fx[0], IntroEffect::Play(Cue::DoorCreak));
        assert_eq!(m.phase(), IntroPhase::Transitioning);
        assert!(m.handle(IntroEvent::TapDoor).is_empty());
        // Switch cannot be reached early
        assert!(m.handle(IntroEvent::ToggleSwitch).is_empty());
    }

    #[test]
    fn test_switch_on_reveals_logo() {
        let mut m = at_switch(false);
        let fx = m.handle(IntroEvent::ToggleSwitch);
        assert!(m.is_busy());
        assert!(fx.contains(&IntroEffect::Flicker));
        let all = settle(&mut m, fx);
        assert!(all.contains(&IntroEffect::StartLoop(LoopKind::BulbHum)));
        assert!(all.contains(&IntroEffect::Play(Cue::LogoReveal)));
        assert_eq!(m.phase(), IntroPhase::LogoRevealed);
        assert!(m.light_on());
        assert!(m.enter_shown());
        assert!(!m.is_busy());
    }

    #[test]
    fn test_rapid_double_toggle_changes_once() {
        let mut m = at_switch(false);
        let first = m.handle(IntroEvent::ToggleSwitch);
        let second = m.handle(IntroEvent::ToggleSwitch);
        assert!(!first.is_empty());
        assert!(second.is_empty());
        settle(&mut m, first);
        assert!(m.switch_on());
        assert!(m.light_on());
        assert_eq!(m.phase(), IntroPhase::LogoRevealed);
    }

    #[test]
    fn test_switch_off_and_cooldown() {
        let mut m = at_switch(false);
        let fx = m.handle(IntroEvent::ToggleSwitch);
        settle(&mut m, fx);

        let off = m.handle(IntroEvent::ToggleSwitch);
        assert!(off.contains(&IntroEffect::StopLoop(LoopKind::BulbHum)));
        assert_eq!(m.phase(), IntroPhase::Switch);
        assert!(!m.light_on());
        assert!(!m.enter_shown());
        // Still cooling down
        assert!(m.handle(IntroEvent::ToggleSwitch).is_empty());
        // Enter is not possible with the light off
        assert!(m.handle(IntroEvent::Enter).is_empty());

        settle(&mut m, off);
        assert!(!m.is_busy());
        assert!(!m.handle(IntroEvent::ToggleSwitch).is_empty());
    }

    #[test]
    fn test_out_of_order_timer_events_are_ignored() {
        let mut m = at_switch(false);
        assert!(m.handle(IntroEvent::RevealLogo).is_empty());
        assert!(m.handle(IntroEvent::LightOn).is_empty());
        assert!(m.handle(IntroEvent::ShowEnterButton).is_empty());
        assert_eq!(m.phase(), IntroPhase::Switch);
        assert!(!m.light_on());
    }

    #[test]
    fn test_enter_without_logos_finishes_directly() {
        let mut m = at_switch(false);
        let fx = m.handle(IntroEvent::ToggleSwitch);
        settle(&mut m, fx);
        let fx = m.handle(IntroEvent::Enter);
        assert_eq!(m.phase(), IntroPhase::Done);
        assert!(fx.contains(&IntroEffect::StopLoop(LoopKind::BulbHum)));
        assert_eq!(fx.last(), Some(&IntroEffect::Finish { montage: false }));
        // Done is terminal
        assert!(m.handle(IntroEvent::ToggleSwitch).is_empty());
        assert!(m.handle(IntroEvent::Enter).is_empty());
    }

    #[test]
    fn test_enter_with_logos_requests_montage() {
        let mut m = at_switch(true);
        let fx = m.handle(IntroEvent::ToggleSwitch);
        settle(&mut m, fx);
        let fx = m.handle(IntroEvent::Enter);
        assert_eq!(fx.last(), Some(&IntroEffect::Finish { montage: true }));
    }
}
