use log::Level;
use serde::{Deserialize, Serialize};

use crate::error::{FxError, FxResult};

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const CONFIG_SCRIPT_ID: &str = "fx-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    pub selectors: Selectors,
    pub motion: Motion,
    pub counter: CounterTiming,
    pub load_fade: LoadFade,
    pub easter_egg: EasterEgg,
    /// Border accents for achievement cards, cycled by card position.
    pub accent_palette: Vec<String>,
    /// Single key (case-insensitive) that scrolls back to the top.
    pub home_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub navbar: String,
    pub anchors: String,
    pub reveal: Vec<String>,
    pub sections: String,
    pub nav_links: String,
    pub tags: String,
    pub stat_cards: String,
    pub stat_number: String,
    pub timeline_items: String,
    pub accent_cards: String,
    pub brand: String,
    pub hero: String,
    pub headline: String,
    pub external_links: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Motion {
    pub scrolled_threshold: f64,
    pub active_lookahead: f64,
    pub parallax_speed: f64,
    pub hover_scale: f64,
    pub reveal_transition: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub timeline_threshold: f64,
    pub stagger_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterTiming {
    pub duration_ms: u32,
    pub tick_ms: u32,
    pub threshold: f64,
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadFade {
    pub delay_ms: u32,
    pub transition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EasterEgg {
    pub sequence: Vec<String>,
    pub alternate_text: String,
    pub restore_after_ms: u32,
    pub confetti_count: usize,
    pub confetti_palette: Vec<String>,
    pub confetti_size_px: f64,
    pub confetti_lifetime_ms: u32,
    pub settle_delay_ms: u32,
    pub fall_transition: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            motion: Motion::default(),
            counter: CounterTiming::default(),
            load_fade: LoadFade::default(),
            easter_egg: EasterEgg::default(),
            accent_palette: strings(&["#3b82f6", "#8b5cf6", "#06b6d4", "#10b981", "#f59e0b", "#ef4444"]),
            home_key: "h".to_string(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar: ".navbar".to_string(),
            anchors: "a[href^=\"#\"]".to_string(),
            reveal: strings(&[
                ".timeline-item",
                ".skill-category",
                ".achievement-card",
                ".about-text",
                ".stat-card",
            ]),
            sections: "section[id]".to_string(),
            nav_links: ".nav-link".to_string(),
            tags: ".skill-tag".to_string(),
            stat_cards: ".stat-card".to_string(),
            stat_number: ".stat-number".to_string(),
            timeline_items: ".timeline-item".to_string(),
            accent_cards: ".achievement-card".to_string(),
            brand: ".nav-brand".to_string(),
            hero: ".hero".to_string(),
            headline: ".hero-title .highlight".to_string(),
            external_links: "a[href^=\"http\"]".to_string(),
        }
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            active_lookahead: 100.0,
            parallax_speed: 0.5,
            hover_scale: 1.05,
            reveal_transition: "opacity 0.6s ease-out, transform 0.6s ease-out".to_string(),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            timeline_threshold: 0.1,
            stagger_ms: 100,
        }
    }
}

impl Default for CounterTiming {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            tick_ms: 16, // ~60 frames per second
            threshold: 0.5,
            suffix: "+".to_string(),
        }
    }
}

impl Default for LoadFade {
    fn default() -> Self {
        Self {
            delay_ms: 100,
            transition: "opacity 0.5s ease-in".to_string(),
        }
    }
}

impl Default for EasterEgg {
    fn default() -> Self {
        Self {
            sequence: strings(&[
                "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft", "ArrowRight", "ArrowLeft",
                "ArrowRight", "b", "a",
            ]),
            alternate_text: "Backend Ninja".to_string(),
            restore_after_ms: 3000,
            confetti_count: 50,
            confetti_palette: strings(&["#3b82f6", "#8b5cf6", "#06b6d4", "#10b981"]),
            confetti_size_px: 10.0,
            confetti_lifetime_ms: 3000,
            settle_delay_ms: 10,
            fall_transition: "all 3s ease-out".to_string(),
        }
    }
}

impl FxConfig {
    /// Parses a JSON override document; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> FxResult<Self> {
        let config: FxConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FxResult<()> {
        if self.counter.tick_ms == 0 {
            return Err(FxError::InvalidConfig("counter.tick_ms must be positive".into()));
        }
        if self.easter_egg.sequence.is_empty() {
            return Err(FxError::InvalidConfig("easter_egg.sequence is empty".into()));
        }
        if self.easter_egg.confetti_palette.is_empty() {
            return Err(FxError::InvalidConfig("easter_egg.confetti_palette is empty".into()));
        }
        if self.accent_palette.is_empty() {
            return Err(FxError::InvalidConfig("accent_palette is empty".into()));
        }
        if self.home_key.chars().count() != 1 {
            return Err(FxError::InvalidConfig(format!(
                "home_key must be a single character, got {:?}",
                self.home_key
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = FxConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.easter_egg.sequence.len(), 10);
        assert_eq!(config.accent_palette.len(), 6);
        assert_eq!(config.counter.duration_ms / config.counter.tick_ms, 125);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = FxConfig::from_json(r#"{"home_key": "t", "motion": {"stagger_ms": 250}}"#).unwrap();
        assert_eq!(config.home_key, "t");
        assert_eq!(config.motion.stagger_ms, 250);
        assert_eq!(config.motion.scrolled_threshold, 50.0);
        assert_eq!(config.selectors, Selectors::default());
    }

    #[test]
    fn rejects_zero_tick() {
        let err = FxConfig::from_json(r#"{"counter": {"tick_ms": 0}}"#).unwrap_err();
        assert!(matches!(err, FxError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_multi_char_home_key() {
        let err = FxConfig::from_json(r#"{"home_key": "Home"}"#).unwrap_err();
        assert!(matches!(err, FxError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = FxConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FxError::ConfigParse(_)));
    }
}
