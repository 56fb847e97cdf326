//! Motion Math
//!
//! Pure functions behind the scroll and pointer effects. Nothing here touches
//! the DOM, so every curve can be checked without a browser.

/// Frames covered by the timecode HUD: 8 minutes at 30 fps
pub const TIMECODE_FRAMES: u32 = 8 * 60 * 30;
pub const TIMECODE_FPS: u32 = 30;

/// Ease-out cubic over `t` in [0, 1]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Value shown by a count-up number `elapsed_ms` into its animation.
///
/// Never exceeds `target` and lands exactly on it once `elapsed_ms`
/// reaches `duration_ms`.
pub fn count_up_value(elapsed_ms: f64, duration_ms: f64, target: u32) -> u32 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    let progress = (elapsed_ms / duration_ms).max(0.0);
    let value = (ease_out_cubic(progress) * f64::from(target)).floor();
    (value as u32).min(target)
}

/// Fraction of the page scrolled, in [0, 1]
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let max = scroll_height - viewport_height;
    if max <= 0.0 {
        return 0.0;
    }
    (scroll_y / max).clamp(0.0, 1.0)
}

/// Detects fast scrolling from successive samples.
///
/// A trigger holds the gate closed until `release` is called, so a glitch
/// that is still showing cannot be retriggered.
#[derive(Clone, Debug)]
pub struct GlitchGate {
    threshold: f64,
    last_y: f64,
    last_t: f64,
    active: bool,
}

impl GlitchGate {
    /// `threshold` is in px/ms
    pub fn new(threshold: f64, y: f64, t: f64) -> Self {
        Self { threshold, last_y: y, last_t: t, active: false }
    }

    /// Velocity in px/ms between the previous sample and this one
    pub fn velocity(&self, y: f64, t: f64) -> f64 {
        (y - self.last_y).abs() / (t - self.last_t).max(1.0)
    }

    /// Record a sample; returns true when a glitch should start
    pub fn sample(&mut self, y: f64, t: f64) -> bool {
        let velocity = self.velocity(y, t);
        self.last_y = y;
        self.last_t = t;
        if velocity > self.threshold && !self.active {
            self.active = true;
            return true;
        }
        false
    }

    pub fn release(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// 3D tilt for a card. `x` and `y` are the pointer position relative to the
/// card, each in [-0.5, 0.5]; `max_deg` is the rotation at the edge.
pub fn tilt_transform(x: f64, y: f64, max_deg: f64) -> String {
    let x = x.clamp(-0.5, 0.5);
    let y = y.clamp(-0.5, 0.5);
    let span = max_deg * 2.0;
    format!(
        "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) translateZ(12px)",
        -y * span + 0.0,
        x * span + 0.0
    )
}

/// Offset for a magnetic button pulled toward the pointer
pub fn magnetic_offset(pointer: (f64, f64), center: (f64, f64), strength: f64) -> (f64, f64) {
    ((pointer.0 - center.0) * strength, (pointer.1 - center.1) * strength)
}

/// Production timecode derived from scroll progress
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timecode {
    pub frames: u32,
}

impl Timecode {
    pub fn from_progress(progress: f64) -> Self {
        let frames = (progress.clamp(0.0, 1.0) * f64::from(TIMECODE_FRAMES)).floor() as u32;
        Self { frames }
    }

    /// `HH:MM:SS:FF`
    pub fn clock(&self) -> String {
        let ff = self.frames % TIMECODE_FPS;
        let ss = (self.frames / TIMECODE_FPS) % 60;
        let mm = (self.frames / (TIMECODE_FPS * 60)) % 60;
        let hh = self.frames / (TIMECODE_FPS * 3600);
        format!("{:02}:{:02}:{:02}:{:02}", hh, mm, ss, ff)
    }

    /// `FRAME nnnnn`
    pub fn frame_label(&self) -> String {
        format!("FRAME {:05}", self.frames)
    }
}

/// Words of a heading, in order
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Reveal delay for the word at `index`
pub fn word_delay_ms(index: usize, stagger_ms: u32) -> u32 {
    (index as u32).saturating_mul(stagger_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_up_lands_on_target() {
        assert_eq!(count_up_value(1500.0, 1500.0, 200), 200);
        assert_eq!(count_up_value(9000.0, 1500.0, 44), 44);
        assert_eq!(count_up_value(0.0, 1500.0, 200), 0);
    }

    #[test]
    fn test_count_up_never_overshoots() {
        let mut last = 0;
        for step in 0..=150 {
            let v = count_up_value(step as f64 * 10.0, 1500.0, 50);
            assert!(v <= 50);
            assert!(v >= last, "count-up went backwards at step {}", step);
            last = v;
        }
        assert_eq!(last, 50);
    }

    #[test]
    fn test_count_up_zero_duration() {
        assert_eq!(count_up_value(0.0, 0.0, 8), 8);
    }

    #[test]
    fn test_scroll_progress_bounds() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
        // Page shorter than the viewport
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn test_glitch_gate_cooldown() {
        let mut gate = GlitchGate::new(2.5, 0.0, 0.0);
        // 300px in 100ms = 3 px/ms
        assert!(gate.sample(300.0, 100.0));
        // Still fast, but the first glitch has not been released
        assert!(!gate.sample(900.0, 200.0));
        gate.release();
        assert!(gate.sample(1500.0, 300.0));
    }

    #[test]
    fn test_glitch_gate_slow_scroll() {
        let mut gate = GlitchGate::new(2.5, 0.0, 0.0);
        assert!(!gate.sample(100.0, 100.0));
        assert!(!gate.is_active());
        // Same timestamp is treated as 1ms apart
        assert_eq!(gate.velocity(102.0, 100.0), 2.0);
    }

    #[test]
    fn test_tilt_transform_center_and_edge() {
        assert_eq!(
            tilt_transform(0.0, 0.0, 7.0),
            "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) translateZ(12px)"
        );
        assert_eq!(
            tilt_transform(0.5, -0.5, 7.0),
            "perspective(1000px) rotateX(7.00deg) rotateY(7.00deg) translateZ(12px)"
        );
    }

    #[test]
    fn test_magnetic_offset() {
        assert_eq!(magnetic_offset((120.0, 40.0), (100.0, 50.0), 0.25), (5.0, -2.5));
    }

    #[test]
    fn test_timecode() {
        assert_eq!(Timecode::from_progress(0.0).clock(), "00:00:00:00");
        let end = Timecode::from_progress(1.0);
        assert_eq!(end.clock(), "00:08:00:00");
        assert_eq!(end.frame_label(), "FRAME 14400");
        let tc = Timecode { frames: 1831 };
        assert_eq!(tc.clock(), "00:01:01:01");
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("  Our   Work "), vec!["Our", "Work"]);
        assert_eq!(word_delay_ms(3, 80), 240);
    }
}
