use super::primitives::{arc, blend_circle, circle, line, Stroke};
use super::{FaceLayout, GlyphStyle};
use crate::constants::GLOW_OPACITY;
use crate::emotion::Emotion;
use crate::utils::safe_cast::{channel_u8, trunc_px};
use image::{Rgb, RgbImage};

const GLOW_REACH: i32 = 25;
const PARTICLES: u32 = 16;
const PARTICLE_SPACING_DEG: f64 = 22.5;
const ORBIT_DEG_PER_FRAME: u64 = 8;
const ORBIT_GAP: i32 = 20;
const ORBIT_WOBBLE: f64 = 5.0;
const PARTICLE_RADIUS: i32 = 3;

/// Brightness multiplier in `[0.6, 1.0]` pulsing with the frame index
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pulse_gain(frame_index: u64) -> f64 {
    let pulse = ((frame_index as f64 / 10.0).sin() + 1.0) / 2.0;
    0.6 + 0.4 * pulse
}

/// Emotion color scaled by the current pulse
#[must_use]
pub fn pulsed_color(base: Rgb<u8>, frame_index: u64) -> Rgb<u8> {
    let gain = pulse_gain(frame_index);
    Rgb(base.0.map(|c| channel_u8(f64::from(c) * gain)))
}

/// Orbit radius and color of particle `i` on a frame
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn particle(i: u32, radius: i32, color: Rgb<u8>, frame_index: u64) -> (f64, f64, i32, Rgb<u8>) {
    let t = frame_index as f64;
    let phase = f64::from(i);
    let angle = (f64::from(i) * PARTICLE_SPACING_DEG + ((frame_index % 45) * ORBIT_DEG_PER_FRAME) as f64) % 360.0;
    let orbit = radius + ORBIT_GAP + trunc_px(ORBIT_WOBBLE * (t / 15.0 + phase).sin());
    let intensity = trunc_px(150.0 + 105.0 * (t / 10.0 + phase).sin());
    let glow = Rgb([color[0], channel_u8(f64::from(intensity)), color[2]]);
    (angle.to_radians().cos(), angle.to_radians().sin(), orbit, glow)
}

/// Pulsing hologram: large soft glow, outline face, hollow eyes and a dense
/// ring of shimmering particles.
#[derive(Debug, Clone, Copy, Default)]
pub struct CyberpunkStyle;

impl GlyphStyle for CyberpunkStyle {
    fn draw(&self, image: &mut RgbImage, center: (i32, i32), size: u32, emotion: Emotion, frame_index: u64) {
        let face = FaceLayout::new(center, size);
        let color = pulsed_color(emotion.color(), frame_index);

        blend_circle(image, face.center(), face.radius + GLOW_REACH, color, Stroke::Filled, GLOW_OPACITY);
        circle(image, face.center(), face.radius, color, Stroke::Outline(2));

        for eye in face.eyes() {
            circle(image, eye, face.part(7), color, Stroke::Outline(2));
        }

        let mouth_axes = (face.part(2), face.part(5));
        match emotion {
            Emotion::Happy => arc(image, (face.cx, face.mouth_y), mouth_axes, (0, 180), color, 2),
            Emotion::Sad => arc(
                image,
                (face.cx, face.mouth_y + face.part(6)),
                mouth_axes,
                (180, 360),
                color,
                2,
            ),
            Emotion::Surprise => circle(image, (face.cx, face.mouth_y), face.part(5), color, Stroke::Outline(2)),
            _ => {
                let (start, end) = face.flat_mouth();
                line(image, start, end, color, 2);
            }
        }

        for i in 0..PARTICLES {
            let (cos, sin, orbit, glow) = particle(i, face.radius, color, frame_index);
            let px = trunc_px(f64::from(face.cx) + f64::from(orbit) * cos);
            let py = trunc_px(f64::from(face.cy) + f64::from(orbit) * sin);
            circle(image, (px, py), PARTICLE_RADIUS, glow, Stroke::Filled);
        }
    }

    fn name(&self) -> &'static str {
        "cyberpunk"
    }
}
