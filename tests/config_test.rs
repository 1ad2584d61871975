//! Configuration file tests

mod test_helpers;

use emoji_overlay::config::{Config, EXAMPLE_CONFIG};
use emoji_overlay::render::GlyphMode;
use emoji_overlay::tracker::IdentityPolicy;
use test_helpers::scratch_dir;

#[test]
fn test_config_file_round_trip() {
    let dir = scratch_dir("config-round-trip");
    let path = dir.join("overlay.yaml");

    let mut config = Config::default();
    config.renderer.mode = GlyphMode::Cyberpunk;
    config.tracker.identity = IdentityPolicy::NearestAnchor;
    config.tracker.seed = Some(1234);
    config.hud.show_score_bars = true;
    config.to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.renderer.mode, GlyphMode::Cyberpunk);
    assert_eq!(loaded.tracker.identity, IdentityPolicy::NearestAnchor);
    assert_eq!(loaded.tracker.seed, Some(1234));
    assert!(loaded.hud.show_score_bars);
    assert!(loaded.validate().is_ok());

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_partial_config_uses_defaults() {
    let config = Config::from_yaml("renderer:\n  mode: vector\n").unwrap();
    assert_eq!(config.renderer.mode, GlyphMode::Vector);
    assert_eq!(config.hud.badge_x, 40);
    assert_eq!(config.hud.badge_y, 70);
    assert!((config.avatar.score_smoothing_alpha - 0.35).abs() < f64::EPSILON);
    assert_eq!(config.tracker.identity, IdentityPolicy::ByIndex);
}

#[test]
fn test_example_config_is_valid() {
    let config = Config::from_yaml(EXAMPLE_CONFIG).unwrap();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut config = Config::default();
    config.avatar.float_speed_min = 0.2;
    config.avatar.float_speed_max = 0.1;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.hud.badge_size = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.tracker.max_match_distance = f64::NAN;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.avatar.score_smoothing_alpha = 1.5;
    assert!(config.validate().is_err());
}
