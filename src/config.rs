//! Configuration management for the emoji overlay

use crate::constants::{
    DEFAULT_BADGE_SIZE, DEFAULT_BADGE_X, DEFAULT_BADGE_Y, DEFAULT_BAR_MAX_PIXELS, DEFAULT_BAR_WIDTH,
    DEFAULT_FLOAT_SPEED_MAX, DEFAULT_FLOAT_SPEED_MIN, DEFAULT_SCORE_SMOOTHING_ALPHA, DEFAULT_TETHER_EASE,
};
use crate::render::GlyphMode;
use crate::tracker::IdentityPolicy;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Avatar animation configuration
    pub avatar: AvatarConfig,

    /// Glyph renderer configuration
    pub renderer: RendererConfig,

    /// Heads-up display configuration
    pub hud: HudConfig,

    /// Avatar tracker configuration
    pub tracker: TrackerConfig,
}

/// Avatar animation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// Per-frame easing factor toward the tethered target (0.0-1.0]
    pub tether_ease: f64,

    /// Lower bound of the per-avatar phase speed (radians per frame)
    pub float_speed_min: f64,

    /// Upper bound of the per-avatar phase speed (radians per frame)
    pub float_speed_max: f64,

    /// Exponential smoothing factor for emotion scores (0.0-1.0]
    pub score_smoothing_alpha: f64,
}

/// Glyph renderer settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Initial drawing mode
    pub mode: GlyphMode,
}

/// Heads-up display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Outline every detected face box
    pub show_face_boxes: bool,

    /// Draw the badge glyph in the frame corner
    pub show_badge: bool,

    /// Badge center x
    pub badge_x: i32,

    /// Badge center y
    pub badge_y: i32,

    /// Badge diameter
    pub badge_size: u32,

    /// Draw per-emotion score bars under the badge
    pub show_score_bars: bool,

    /// Width reserved for the bar panel
    pub bar_width: u32,

    /// Length of a bar at a score of 100
    pub bar_max_pixels: u32,
}

/// Avatar tracker settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// How detections are matched to existing avatars
    pub identity: IdentityPolicy,

    /// Largest anchor distance accepted as the same face (nearest-anchor policy)
    pub max_match_distance: f64,

    /// Seed for reproducible animation; random when absent
    pub seed: Option<u64>,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            tether_ease: DEFAULT_TETHER_EASE,
            float_speed_min: DEFAULT_FLOAT_SPEED_MIN,
            float_speed_max: DEFAULT_FLOAT_SPEED_MAX,
            score_smoothing_alpha: DEFAULT_SCORE_SMOOTHING_ALPHA,
        }
    }
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            show_face_boxes: true,
            show_badge: true,
            badge_x: DEFAULT_BADGE_X,
            badge_y: DEFAULT_BADGE_Y,
            badge_size: DEFAULT_BADGE_SIZE,
            show_score_bars: false,
            bar_width: DEFAULT_BAR_WIDTH,
            bar_max_pixels: DEFAULT_BAR_MAX_PIXELS,
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            identity: IdentityPolicy::ByIndex,
            max_match_distance: 150.0,
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        // Validate avatar animation
        if !(self.avatar.tether_ease > 0.0 && self.avatar.tether_ease <= 1.0) {
            return Err(Error::ConfigError("Tether ease must be in (0.0, 1.0]".to_string()));
        }
        if !(self.avatar.score_smoothing_alpha > 0.0 && self.avatar.score_smoothing_alpha <= 1.0) {
            return Err(Error::ConfigError(
                "Score smoothing alpha must be in (0.0, 1.0]".to_string(),
            ));
        }
        if !(self.avatar.float_speed_min.is_finite() && self.avatar.float_speed_max.is_finite()) {
            return Err(Error::ConfigError("Float speed bounds must be finite".to_string()));
        }
        if self.avatar.float_speed_min < 0.0 || self.avatar.float_speed_min > self.avatar.float_speed_max {
            return Err(Error::ConfigError(
                "Float speed range must satisfy 0 <= min <= max".to_string(),
            ));
        }

        // Validate HUD
        if self.hud.badge_size == 0 {
            return Err(Error::ConfigError("Badge size must be greater than 0".to_string()));
        }
        if self.hud.bar_max_pixels > self.hud.bar_width {
            return Err(Error::ConfigError(
                "Bar max pixels must not exceed bar width".to_string(),
            ));
        }

        // Validate tracker
        if !(self.tracker.max_match_distance.is_finite() && self.tracker.max_match_distance > 0.0) {
            return Err(Error::ConfigError(
                "Max match distance must be a positive number".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Emoji Overlay Configuration

# Avatar animation
avatar:
  tether_ease: 0.25
  float_speed_min: 0.03
  float_speed_max: 0.10
  score_smoothing_alpha: 0.35

# Glyph style: vector, cartoon, neon or cyberpunk
renderer:
  mode: neon

# Heads-up display
hud:
  show_face_boxes: true
  show_badge: true
  badge_x: 40
  badge_y: 70
  badge_size: 55
  show_score_bars: false
  bar_width: 180
  bar_max_pixels: 160

# Face-to-avatar matching: by_index or nearest_anchor
tracker:
  identity: by_index
  max_match_distance: 150.0
"#;
