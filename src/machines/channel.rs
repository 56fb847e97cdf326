//! Channel Switcher
//!
//! Playlist cursor for the broadcast monitor. A change is accepted, shows
//! static for a moment, then settles onto the new entry.

use serde::Deserialize;

use crate::models::PlaylistEntry;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChannelTiming {
    /// Static shown before the new channel loads
    pub settle_ms: u32,
    /// Remote IR LED flash
    pub ir_flash_ms: u32,
}

impl Default for ChannelTiming {
    fn default() -> Self {
        Self {
            settle_ms: 180,
            ir_flash_ms: 200,
        }
    }
}

/// An accepted channel change, waiting to settle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelChange {
    pub index: usize,
    pub settle_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerCommand {
    Play,
    Pause,
}

#[derive(Clone, Debug)]
pub struct ChannelSwitcher {
    len: usize,
    active: usize,
    pending: Option<usize>,
    player_ready: bool,
    playing: bool,
    settle_ms: u32,
}

impl ChannelSwitcher {
    pub fn new(len: usize, settle_ms: u32) -> Self {
        Self {
            len,
            active: 0,
            pending: None,
            player_ready: false,
            playing: false,
            settle_ms,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    #[cfg(test)]
    fn is_switching(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_ready(&self) -> bool {
        self.player_ready
    }

    pub fn mark_ready(&mut self) {
        self.player_ready = true;
    }

    pub fn playback_changed(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn next(&mut self) -> Option<ChannelChange> {
        if self.len == 0 {
            return None;
        }
        self.select((self.active + 1) % self.len)
    }

    pub fn previous(&mut self) -> Option<ChannelChange> {
        if self.len == 0 {
            return None;
        }
        self.select((self.active + self.len - 1) % self.len)
    }

    /// Ask for channel `index`. Ignored while another change is in flight,
    /// before the player is ready, or when it is already on air.
    pub fn select(&mut self, index: usize) -> Option<ChannelChange> {
        if index >= self.len || index == self.active || self.pending.is_some() || !self.player_ready {
            return None;
        }
        self.pending = Some(index);
        Some(ChannelChange {
            index,
            settle_ms: self.settle_ms,
        })
    }

    /// Commit the pending change; returns the index to load
    pub fn settle(&mut self) -> Option<usize> {
        let index = self.pending.take()?;
        self.active = index;
        Some(index)
    }

    /// Play or pause the current entry without changing channel
    pub fn toggle_power(&self) -> Option<PowerCommand> {
        if !self.player_ready {
            return None;
        }
        Some(if self.playing {
            PowerCommand::Pause
        } else {
            PowerCommand::Play
        })
    }
}

/// The four operations the monitor needs from a video player
pub trait Playback {
    fn load(&self, external_id: &str);
    fn play(&self);
    fn pause(&self);
}

/// Channel switcher bound to a player and playlist
pub struct BroadcastDeck<P: Playback> {
    pub switcher: ChannelSwitcher,
    playlist: Vec<PlaylistEntry>,
    player: Option<P>,
}

impl<P: Playback> BroadcastDeck<P> {
    pub fn new(playlist: Vec<PlaylistEntry>, settle_ms: u32) -> Self {
        Self {
            switcher: ChannelSwitcher::new(playlist.len(), settle_ms),
            playlist,
            player: None,
        }
    }

    pub fn attach(&mut self, player: P) {
        self.player = Some(player);
    }

    /// Player reported ready
    pub fn on_ready(&mut self) {
        if self.player.is_some() {
            self.switcher.mark_ready();
        }
    }

    pub fn current(&self) -> Option<&PlaylistEntry> {
        self.playlist.get(self.switcher.active())
    }

    /// Settle the pending change onto the player
    pub fn finish_switch(&mut self) -> Option<&PlaylistEntry> {
        let index = self.switcher.settle()?;
        let entry = self.playlist.get(index)?;
        if let Some(player) = &self.player {
            player.load(&entry.external_id);
            player.play();
        }
        Some(entry)
    }

    pub fn toggle_power(&self) -> Option<PowerCommand> {
        let command = self.switcher.toggle_power()?;
        let player = self.player.as_ref()?;
        match command {
            PowerCommand::Play => player.play(),
            PowerCommand::Pause => player.pause(),
        }
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn ready(len: usize) -> ChannelSwitcher {
        let mut s = ChannelSwitcher::new(len, 180);
        s.mark_ready();
        s
    }

    fn step(s: &mut ChannelSwitcher, change: Option<ChannelChange>) {
        assert!(change.is_some());
        s.settle();
    }

    #[test]
    fn test_next_wraps_for_every_length() {
        for n in 2..=7 {
            let mut s = ready(n);
            for _ in 0..n {
                let change = s.next();
                step(&mut s, change);
            }
            assert_eq!(s.active(), 0, "length {}", n);
        }
    }

    #[test]
    fn test_previous_wraps_backwards() {
        let mut s = ready(5);
        let change = s.previous();
        assert_eq!(change.map(|c| c.index), Some(4));
        s.settle();
        assert_eq!(s.active(), 4);
    }

    #[test]
    fn test_single_entry_never_switches() {
        let mut s = ready(1);
        assert!(s.next().is_none());
        assert!(s.previous().is_none());
        assert_eq!(s.active(), 0);
    }

    #[test]
    fn test_empty_playlist_is_inert() {
        let mut s = ready(0);
        assert!(s.next().is_none());
        assert!(s.previous().is_none());
        assert!(s.select(0).is_none());
    }

    #[test]
    fn test_not_ready_and_in_flight_guards() {
        let mut s = ChannelSwitcher::new(3, 180);
        assert!(s.next().is_none());
        s.mark_ready();
        assert!(s.next().is_some());
        assert!(s.next().is_none());
        assert!(s.select(2).is_none());
        assert_eq!(s.settle(), Some(1));
        assert_eq!(s.settle(), None);
    }

    #[test]
    fn test_select_active_is_noop() {
        let mut s = ready(3);
        assert!(s.select(0).is_none());
        assert!(s.select(3).is_none());
        assert!(!s.is_switching());
    }

    #[test]
    fn test_power_follows_player_state() {
        let mut s = ChannelSwitcher::new(3, 180);
        assert_eq!(s.toggle_power(), None);
        s.mark_ready();
        assert_eq!(s.toggle_power(), Some(PowerCommand::Play));
        s.playback_changed(true);
        assert_eq!(s.toggle_power(), Some(PowerCommand::Pause));
        assert_eq!(s.active(), 0);
    }

    #[derive(Default)]
    struct RecordingPlayer {
        calls: RefCell<Vec<String>>,
    }

    impl Playback for &RecordingPlayer {
        fn load(&self, external_id: &str) {
            self.calls.borrow_mut().push(format!("load:{}", external_id));
        }
        fn play(&self) {
            self.calls.borrow_mut().push("play".to_string());
        }
        fn pause(&self) {
            self.calls.borrow_mut().push("pause".to_string());
        }
    }

    fn playlist() -> Vec<PlaylistEntry> {
        (1..=3)
            .map(|i| PlaylistEntry {
                external_id: format!("vid{}", i),
                channel: format!("{:02}", i),
                label: format!("Showreel {:02}", i),
            })
            .collect()
    }

    #[test]
    fn test_deck_loads_then_plays() {
        let player = RecordingPlayer::default();
        let mut deck = BroadcastDeck::new(playlist(), 180);
        deck.attach(&player);
        // Not ready yet
        assert!(deck.switcher.next().is_none());
        deck.on_ready();

        assert!(deck.switcher.previous().is_some());
        let entry = deck.finish_switch().cloned();
        assert_eq!(entry.map(|e| e.channel), Some("03".to_string()));
        assert_eq!(*player.calls.borrow(), vec!["load:vid3", "play"]);
        assert_eq!(deck.current().map(|e| e.label.as_str()), Some("Showreel 03"));
        // Nothing pending: no second load
        assert!(deck.finish_switch().is_none());
        assert_eq!(player.calls.borrow().len(), 2);
    }

    #[test]
    fn test_deck_without_player_never_ready() {
        let mut deck: BroadcastDeck<&RecordingPlayer> = BroadcastDeck::new(playlist(), 180);
        deck.on_ready();
        assert!(!deck.switcher.is_ready());
        assert!(deck.toggle_power().is_none());
    }

    #[test]
    fn test_deck_power_reaches_player() {
        let player = RecordingPlayer::default();
        let mut deck = BroadcastDeck::new(playlist(), 180);
        deck.attach(&player);
        deck.on_ready();

        assert_eq!(deck.toggle_power(), Some(PowerCommand::Play));
        assert_eq!(*player.calls.borrow(), vec!["play"]);
        deck.switcher.playback_changed(true);
        assert_eq!(deck.toggle_power(), Some(PowerCommand::Pause));
        assert_eq!(*player.calls.borrow(), vec!["play", "pause"]);
        assert_eq!(deck.current().map(|e| e.channel.as_str()), Some("01"));
    }
}
