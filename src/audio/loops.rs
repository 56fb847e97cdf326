//! Loop bookkeeping: which continuous sounds are playing, plus the mute flag.

use super::LoopKind;

/// Active loop handles keyed by kind.
///
/// Starting an active loop and stopping an inactive one are both no-ops.
/// While muted nothing new may start.
#[derive(Debug)]
pub struct LoopRegistry<H> {
    active: Vec<(LoopKind, H)>,
    muted: bool,
}

impl<H> Default for LoopRegistry<H> {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            muted: false,
        }
    }
}

impl<H> LoopRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, kind: LoopKind) -> bool {
        self.active.iter().any(|(k, _)| *k == kind)
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.active.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Start `kind` with a handle from `make`. Returns whether a loop started.
    /// `make` is not called when the loop is already running or muted.
    pub fn start_with(&mut self, kind: LoopKind, make: impl FnOnce() -> Option<H>) -> bool {
        if self.muted || self.is_active(kind) {
            return false;
        }
        match make() {
            Some(handle) => {
                self.active.push((kind, handle));
                true
            }
            None => false,
        }
    }

    /// Take the handle for `kind` so the caller can release it
    pub fn stop(&mut self, kind: LoopKind) -> Option<H> {
        let idx = self.active.iter().position(|(k, _)| *k == kind)?;
        Some(self.active.swap_remove(idx).1)
    }

    /// Set the mute flag. Muting hands back every active handle.
    pub fn set_muted(&mut self, muted: bool) -> Vec<(LoopKind, H)> {
        self.muted = muted;
        if muted {
            std::mem::take(&mut self.active)
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_idempotent() {
        let mut reg = LoopRegistry::new();
        let mut made = 0;
        assert!(reg.start_with(LoopKind::BulbHum, || {
            made += 1;
            Some(made)
        }));
        assert!(!reg.start_with(LoopKind::BulbHum, || {
            made += 1;
            Some(made)
        }));
        assert_eq!(made, 1);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_stop_inactive_is_noop() {
        let mut reg: LoopRegistry<u8> = LoopRegistry::new();
        assert!(reg.stop(LoopKind::PhoneRing).is_none());
        reg.start_with(LoopKind::PhoneRing, || Some(7));
        assert_eq!(reg.stop(LoopKind::PhoneRing), Some(7));
        assert!(reg.stop(LoopKind::PhoneRing).is_none());
    }

    #[test]
    fn test_mute_drains_and_blocks() {
        let mut reg = LoopRegistry::new();
        reg.start_with(LoopKind::NeonBuzz, || Some("buzz"));
        reg.start_with(LoopKind::ProjectorHum, || Some("hum"));
        let drained = reg.set_muted(true);
        assert_eq!(drained.len(), 2);
        assert!(reg.is_empty());
        assert!(!reg.start_with(LoopKind::NeonBuzz, || Some("again")));

        assert!(reg.set_muted(false).is_empty());
        assert!(reg.start_with(LoopKind::NeonBuzz, || Some("again")));
    }

    #[test]
    fn test_failed_handle_does_not_register() {
        let mut reg: LoopRegistry<()> = LoopRegistry::new();
        assert!(!reg.start_with(LoopKind::BulbHum, || None));
        assert!(!reg.is_active(LoopKind::BulbHum));
    }
}
