//! Heads-up display: face box outlines, the status badge in the frame
//! corner and the per-emotion score bars beneath it.

use crate::config::HudConfig;
use crate::detection::Detection;
use crate::emotion::{Emotion, EmotionScores};
use crate::render::GlyphRenderer;
use crate::utils::safe_cast::{f64_to_i32_clamp, u32_to_i32_saturating};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

const BAR_HEIGHT: u32 = 8;
const BAR_SPACING: i32 = 12;
const BADGE_BAR_GAP: i32 = 30;
const TRACK_COLOR: Rgb<u8> = Rgb([40, 40, 40]);
const FACE_BOX_COLOR: Rgb<u8> = Rgb([255, 255, 0]);
const FACE_BOX_THICKNESS: i32 = 2;

/// Draws the HUD onto a frame
#[derive(Debug, Clone)]
pub struct Hud {
    config: HudConfig,
}

impl Hud {
    /// Create a HUD from its configuration
    #[must_use]
    pub fn new(config: HudConfig) -> Self {
        Self { config }
    }

    /// Outline each detection's face box, 2 px wide
    pub fn draw_face_boxes(&self, frame: &mut RgbImage, detections: &[Detection]) {
        if !self.config.show_face_boxes {
            return;
        }
        for detection in detections {
            let bbox = detection.bbox;
            for inset in 0..FACE_BOX_THICKNESS {
                let (w, h) = (bbox.w - 2 * inset, bbox.h - 2 * inset);
                if w <= 0 || h <= 0 {
                    break;
                }
                #[allow(clippy::cast_sign_loss)] // w, h > 0
                let rect = Rect::at(bbox.x + inset, bbox.y + inset).of_size(w as u32, h as u32);
                draw_hollow_rect_mut(frame, rect, FACE_BOX_COLOR);
            }
        }
    }

    /// Draw the badge glyph for `emotion` with the renderer's current mode
    pub fn draw_badge(&self, frame: &mut RgbImage, renderer: &GlyphRenderer, emotion: Emotion, frame_index: u64) {
        if !self.config.show_badge {
            return;
        }
        let center = (self.config.badge_x, self.config.badge_y);
        renderer.draw(frame, center, self.config.badge_size, emotion, frame_index);
    }

    /// Draw one bar per known emotion, scaled so a score of 100 fills
    /// `bar_max_pixels`
    pub fn draw_score_bars(&self, frame: &mut RgbImage, scores: &EmotionScores) {
        if !self.config.show_score_bars || self.config.bar_width == 0 {
            return;
        }

        let left = self.config.badge_x - u32_to_i32_saturating(self.config.badge_size / 2);
        let mut top = self.config.badge_y + u32_to_i32_saturating(self.config.badge_size / 2) + BADGE_BAR_GAP;
        let max_pixels = u32_to_i32_saturating(self.config.bar_max_pixels);

        for emotion in Emotion::ORDER {
            let track = Rect::at(left, top).of_size(self.config.bar_width, BAR_HEIGHT);
            draw_filled_rect_mut(frame, track, TRACK_COLOR);

            let length = self.bar_length(scores.get(emotion), max_pixels);
            if length > 0 {
                #[allow(clippy::cast_sign_loss)] // length > 0
                let bar = Rect::at(left, top).of_size(length as u32, BAR_HEIGHT);
                draw_filled_rect_mut(frame, bar, emotion.color());
            }
            top += BAR_SPACING;
        }
    }

    /// Bar length in pixels for a 0-100 score
    #[must_use]
    pub fn bar_length(&self, score: f64, max_pixels: i32) -> i32 {
        f64_to_i32_clamp(score / 100.0 * f64::from(max_pixels), 0, max_pixels)
    }

    /// HUD configuration
    #[must_use]
    pub fn config(&self) -> &HudConfig {
        &self.config
    }
}
