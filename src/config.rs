//! Studio Configuration
//!
//! Every tunable of the page, embedded from `config/studio.json` at compile
//! time. Missing sections fall back to their defaults; a broken file logs a
//! warning and the page runs on defaults.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::machines::{CallTiming, ChannelTiming, IntroTiming, ProjectorTiming};
use crate::models::PlaylistEntry;

const EMBEDDED: &str = include_str!("../config/studio.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid studio config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("playlist is empty")]
    EmptyPlaylist,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.web3forms.com/submit".to_string(),
            access_key: "YOUR_ACCESS_KEY_HERE".to_string(),
        }
    }
}

/// Client-logo montage shown after the intro
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReelConfig {
    pub display_ms: u32,
    pub overlay_fade_ms: u32,
    pub reel_fade_ms: u32,
    pub max_logos: usize,
    /// Letterbox bars after the intro
    pub letterbox_ms: u32,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            display_ms: 3000,
            overlay_fade_ms: 900,
            reel_fade_ms: 850,
            max_logos: 20,
            letterbox_ms: 900,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// px per ms
    pub glitch_velocity: f64,
    pub glitch_ms: u32,
    pub count_up_ms: u32,
    pub word_reveal_delay_ms: u32,
    pub word_stagger_ms: u32,
    pub step_pop_stagger_ms: u32,
    pub clapper_delay_ms: u32,
    pub navbar_scrolled_px: f64,
    pub tilt_max_deg: f64,
    pub magnetic_strength: f64,
    pub trail_slots: usize,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            glitch_velocity: 2.5,
            glitch_ms: 200,
            count_up_ms: 1500,
            word_reveal_delay_ms: 280,
            word_stagger_ms: 90,
            step_pop_stagger_ms: 180,
            clapper_delay_ms: 300,
            navbar_scrolled_px: 50.0,
            tilt_max_deg: 7.0,
            magnetic_strength: 0.25,
            trail_slots: 18,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub relay: RelayConfig,
    pub intro: IntroTiming,
    pub reel: ReelConfig,
    pub channel: ChannelTiming,
    pub call: CallTiming,
    pub projector: ProjectorTiming,
    pub scroll: ScrollConfig,
    pub toast_ms: u32,
    pub playlist: Vec<PlaylistEntry>,
}

fn entry(id: &str, n: u32) -> PlaylistEntry {
    PlaylistEntry {
        external_id: id.to_string(),
        channel: format!("{:02}", n),
        label: format!("Showreel {:02}", n),
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            relay: RelayConfig::default(),
            intro: IntroTiming::default(),
            reel: ReelConfig::default(),
            channel: ChannelTiming::default(),
            call: CallTiming::default(),
            projector: ProjectorTiming::default(),
            scroll: ScrollConfig::default(),
            toast_ms: 5000,
            playlist: ["uqVy4BYCrAk", "WcI5ns7QMHE", "RlmBy9lCHA0", "zihED-8nFfk", "jupFWT99hsY"]
                .iter()
                .zip(1..)
                .map(|(id, n)| entry(id, n))
                .collect(),
        }
    }
}

impl StudioConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: StudioConfig = serde_json::from_str(json)?;
        if config.playlist.is_empty() {
            return Err(ConfigError::EmptyPlaylist);
        }
        Ok(config)
    }

    /// Parse the embedded file, falling back to defaults
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED) {
            Ok(config) => {
                log::info!(
                    "studio config loaded: {} channels, retry ceiling {}",
                    config.playlist.len(),
                    config.call.max_missed
                );
                config
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}

static STUDIO: OnceLock<StudioConfig> = OnceLock::new();

/// The page's configuration, loaded on first access
pub fn studio() -> &'static StudioConfig {
    STUDIO.get_or_init(StudioConfig::load)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = StudioConfig::from_json(EMBEDDED).unwrap();
        assert_eq!(config.playlist.len(), 5);
        assert_eq!(config.playlist[0].external_id, "uqVy4BYCrAk");
        assert_eq!(config.toast_ms, 5000);
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let config = StudioConfig::from_json(r#"{"call":{"max_missed":5}}"#).unwrap();
        assert_eq!(config.call.max_missed, 5);
        assert_eq!(config.call.ring_ms, CallTiming::default().ring_ms);
        assert_eq!(config.intro, IntroTiming::default());
        assert_eq!(config.scroll.trail_slots, 18);
        assert_eq!(config.playlist.len(), 5);
    }

    #[test]
    fn test_empty_playlist_rejected() {
        let err = StudioConfig::from_json(r#"{"playlist":[]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPlaylist));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let err = StudioConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
