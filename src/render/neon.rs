use super::primitives::{arc, blend_circle, circle, line, Stroke};
use super::{FaceLayout, GlyphStyle};
use crate::constants::GLOW_OPACITY;
use crate::emotion::Emotion;
use crate::utils::safe_cast::trunc_px;
use image::{Rgb, RgbImage};

const INK: Rgb<u8> = Rgb([0, 0, 0]);
const SHINE: Rgb<u8> = Rgb([255, 255, 255]);

/// Glow rings drawn from the face edge outward, every `GLOW_STEP` pixels
const GLOW_SPAN: i32 = 15;
const GLOW_STEP: i32 = 3;

/// Orbit particle ring
const PARTICLES: u64 = 12;
const PARTICLE_SPACING_DEG: u64 = 30;
const ORBIT_DEG_PER_FRAME: u64 = 5;
const ORBIT_GAP: i32 = 10;
const PARTICLE_RADIUS: i32 = 3;

/// Horizontal pupil offset for a frame
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pupil_jitter(frame_index: u64) -> i32 {
    trunc_px(2.0 * (frame_index as f64 / 5.0).sin())
}

/// Angle in degrees of orbit particle `i` on a frame
#[must_use]
pub fn orbit_angle(i: u64, frame_index: u64) -> u64 {
    (i * PARTICLE_SPACING_DEG + (frame_index % 72) * ORBIT_DEG_PER_FRAME) % 360
}

/// Filled glyph with a soft additive aura, glinting pupils and a ring of
/// particles slowly orbiting the face.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeonStyle;

impl GlyphStyle for NeonStyle {
    fn draw(&self, image: &mut RgbImage, center: (i32, i32), size: u32, emotion: Emotion, frame_index: u64) {
        let face = FaceLayout::new(center, size);
        let color = emotion.color();

        for r in (face.radius..face.radius + GLOW_SPAN).step_by(GLOW_STEP as usize) {
            blend_circle(image, face.center(), r, color, Stroke::Outline(2), GLOW_OPACITY);
        }
        circle(image, face.center(), face.radius, color, Stroke::Filled);

        let jitter = pupil_jitter(frame_index);
        for (x, y) in face.eyes() {
            circle(image, (x, y), face.part(6), INK, Stroke::Filled);
            circle(image, (x + jitter, y), face.part(12), SHINE, Stroke::Filled);
        }

        let mouth = (face.cx, face.mouth_y);
        let mouth_axes = (face.part(2), face.part(3));
        match emotion {
            Emotion::Happy => arc(image, mouth, mouth_axes, (0, 180), INK, 3),
            Emotion::Sad => arc(
                image,
                (face.cx, face.mouth_y + face.part(5)),
                mouth_axes,
                (180, 360),
                INK,
                3,
            ),
            Emotion::Angry => {
                let (start, end) = face.flat_mouth();
                line(image, start, end, INK, 3);
            }
            Emotion::Surprise => circle(image, mouth, face.part(4), INK, Stroke::Outline(3)),
            _ => {
                let (start, end) = face.flat_mouth();
                line(image, start, end, INK, 2);
            }
        }

        let orbit = f64::from(face.radius + ORBIT_GAP);
        for i in 0..PARTICLES {
            let angle = (orbit_angle(i, frame_index) as f64).to_radians();
            let px = trunc_px(f64::from(face.cx) + orbit * angle.cos());
            let py = trunc_px(f64::from(face.cy) + orbit * angle.sin());
            circle(image, (px, py), PARTICLE_RADIUS, color, Stroke::Filled);
        }
    }

    fn name(&self) -> &'static str {
        "neon"
    }
}
