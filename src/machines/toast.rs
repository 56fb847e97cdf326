/// How long a toast stays up when nothing else is configured
pub const DEFAULT_TOAST_MS: u32 = 5000;

/// Auto-dismissing notification. A dismiss timer only hides the toast it was
/// started for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toast {
    visible: bool,
    generation: u32,
    duration_ms: u32,
}

/// The timer a caller must arm after [`Toast::show`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dismissal {
    pub generation: u32,
    pub after_ms: u32,
}

impl Default for Toast {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_MS)
    }
}

impl Toast {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            visible: false,
            generation: 0,
            duration_ms,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show (or re-show) the toast
    pub fn show(&mut self) -> Dismissal {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        Dismissal {
            generation: self.generation,
            after_ms: self.duration_ms,
        }
    }

    /// Returns whether the toast was hidden
    pub fn dismiss(&mut self, generation: u32) -> bool {
        if !self.visible || generation != self.generation {
            return false;
        }
        self.visible = false;
        true
    }

    /// Close button
    pub fn close(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_dismiss() {
        let mut toast = Toast::default();
        let d = toast.show();
        assert!(toast.is_visible());
        assert_eq!(d.after_ms, DEFAULT_TOAST_MS);
        assert!(toast.dismiss(d.generation));
        assert!(!toast.is_visible());
        assert!(!toast.dismiss(d.generation));
    }

    #[test]
    fn test_stale_timer_keeps_newer_toast() {
        let mut toast = Toast::default();
        let first = toast.show().generation;
        let second = toast.show().generation;
        assert!(!toast.dismiss(first));
        assert!(toast.is_visible());
        assert!(toast.dismiss(second));
    }

    #[test]
    fn test_close_button() {
        let mut toast = Toast::default();
        let gen = toast.show().generation;
        toast.close();
        assert!(!toast.is_visible());
        assert!(!toast.dismiss(gen));
    }

    #[test]
    fn test_configured_duration() {
        let mut toast = Toast::new(1200);
        assert_eq!(toast.show().after_ms, 1200);
    }
}
