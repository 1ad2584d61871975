//! Overlay application: ties the tracker, renderer and HUD together and
//! turns key presses into mode and scatter changes.

use crate::avatar::AvatarSnapshot;
use crate::config::Config;
use crate::detection::Detection;
use crate::emotion::Emotion;
use crate::error::Result;
use crate::hud::Hud;
use crate::render::{GlyphMode, GlyphRenderer};
use crate::scenario::Scenario;
use crate::tracker::AvatarTracker;
use image::RgbImage;
use log::{debug, info};
use std::path::Path;

/// Effect of a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Glyph mode switched
    SelectMode(GlyphMode),
    /// Scatter toggled; carries the new state
    Scatter(bool),
    /// Quit requested
    Quit,
    /// Key has no binding
    Ignored,
}

/// Main application struct
pub struct OverlayApp {
    config: Config,
    tracker: AvatarTracker,
    renderer: GlyphRenderer,
    hud: Hud,
    scatter: bool,
    frame_index: u64,
    running: bool,
}

impl OverlayApp {
    /// Create a new overlay application from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        info!(
            "Initializing overlay: mode={}, identity={:?}",
            config.renderer.mode, config.tracker.identity
        );

        let tracker = AvatarTracker::new(&config.tracker, config.avatar.clone());
        let renderer = GlyphRenderer::new(config.renderer.mode);
        let hud = Hud::new(config.hud.clone());

        Ok(Self {
            config,
            tracker,
            renderer,
            hud,
            scatter: false,
            frame_index: 0,
            running: true,
        })
    }

    /// Advance every avatar with this frame's detections and draw the
    /// overlay onto `frame`: face boxes, then avatars, then the HUD
    pub fn process_frame(&mut self, frame: &mut RgbImage, detections: &[Detection]) -> Vec<AvatarSnapshot> {
        self.frame_index += 1;

        let snapshots = self.tracker.update(detections, self.scatter);
        self.hud.draw_face_boxes(frame, detections);
        for snapshot in &snapshots {
            self.renderer.draw(
                frame,
                snapshot.center_px(),
                snapshot.base_size,
                snapshot.emotion,
                self.frame_index,
            );
        }

        let primary = self.tracker.avatars().first();
        let badge_emotion = primary.map_or(Emotion::Neutral, |avatar| avatar.emotion());
        self.hud.draw_badge(frame, &self.renderer, badge_emotion, self.frame_index);
        if let Some(scores) = primary.and_then(|avatar| avatar.scores()) {
            self.hud.draw_score_bars(frame, scores);
        }

        snapshots
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: char) -> KeyAction {
        match key {
            '1'..='4' => {
                let index = key as usize - '0' as usize;
                match GlyphMode::from_index(index) {
                    Some(mode) => {
                        self.renderer.set_mode(mode);
                        info!("Glyph mode: {mode}");
                        KeyAction::SelectMode(mode)
                    }
                    None => KeyAction::Ignored,
                }
            }
            's' | 'S' => {
                self.scatter = !self.scatter;
                info!("Scatter {}", if self.scatter { "on" } else { "off" });
                KeyAction::Scatter(self.scatter)
            }
            'q' | 'Q' | '\u{1b}' => {
                info!("Exit requested by user");
                self.running = false;
                KeyAction::Quit
            }
            _ => {
                debug!("Ignoring key {key:?}");
                KeyAction::Ignored
            }
        }
    }

    /// Play a scenario over `background`, saving each frame as
    /// `frame_NNNNN.png` in `output_dir`. Returns the number of frames written.
    pub fn run_scenario(&mut self, scenario: &Scenario, background: &RgbImage, output_dir: &Path) -> Result<u64> {
        std::fs::create_dir_all(output_dir)?;
        info!(
            "Playing {} frame(s) into {}",
            scenario.frame_count(),
            output_dir.display()
        );

        let mut written = 0;
        for (keys, detections) in scenario.playback() {
            for key in keys.chars() {
                self.handle_key(key);
            }
            if !self.running {
                break;
            }

            let mut frame = background.clone();
            self.process_frame(&mut frame, detections);

            let path = output_dir.join(format!("frame_{:05}.png", self.frame_index));
            frame.save(&path)?;
            written += 1;
        }

        info!("Wrote {written} frame(s)");
        Ok(written)
    }

    /// Set the glyph mode by name; unknown names keep the current mode
    pub fn set_mode_by_name(&mut self, name: &str) -> Result<()> {
        self.renderer.set_mode_by_name(name)
    }

    /// Enable or disable scatter mode
    pub fn set_scatter(&mut self, scatter: bool) {
        self.scatter = scatter;
    }

    /// Whether avatars are currently scattered away from their faces
    #[must_use]
    pub fn scatter(&self) -> bool {
        self.scatter
    }

    /// Current glyph mode
    #[must_use]
    pub fn mode(&self) -> GlyphMode {
        self.renderer.mode()
    }

    /// Number of frames processed so far
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// False once quit was requested
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tracked avatars
    #[must_use]
    pub fn tracker(&self) -> &AvatarTracker {
        &self.tracker
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::FaceBox;

    fn app() -> OverlayApp {
        let mut config = Config::default();
        config.tracker.seed = Some(3);
        OverlayApp::new(config).unwrap()
    }

    #[test]
    fn test_keys_select_modes() {
        let mut app = app();
        assert_eq!(app.handle_key('1'), KeyAction::SelectMode(GlyphMode::Vector));
        assert_eq!(app.handle_key('4'), KeyAction::SelectMode(GlyphMode::Cyberpunk));
        assert_eq!(app.mode(), GlyphMode::Cyberpunk);
        assert_eq!(app.handle_key('5'), KeyAction::Ignored);
        assert_eq!(app.mode(), GlyphMode::Cyberpunk);
    }

    #[test]
    fn test_scatter_toggle_and_quit() {
        let mut app = app();
        assert_eq!(app.handle_key('s'), KeyAction::Scatter(true));
        assert_eq!(app.handle_key('s'), KeyAction::Scatter(false));
        assert!(app.is_running());
        assert_eq!(app.handle_key('q'), KeyAction::Quit);
        assert!(!app.is_running());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = Config::default();
        config.avatar.tether_ease = 0.0;
        assert!(OverlayApp::new(config).is_err());
    }

    #[test]
    fn test_process_frame_draws_avatars() {
        let mut app = app();
        let mut frame = RgbImage::new(640, 480);
        let detections = [Detection::new(FaceBox::new(300, 200, 100, 100), Emotion::Happy)];
        let snapshots = app.process_frame(&mut frame, &detections);

        assert_eq!(snapshots.len(), 1);
        assert_eq!(app.frame_index(), 1);
        let (cx, cy) = snapshots[0].center_px();
        assert_eq!(frame.get_pixel(cx as u32, cy as u32).0, Emotion::Happy.color().0);
    }

    #[test]
    fn test_unknown_mode_name_keeps_mode() {
        let mut app = app();
        assert!(app.set_mode_by_name("sparkle").is_err());
        assert_eq!(app.mode(), GlyphMode::Neon);
    }
}
