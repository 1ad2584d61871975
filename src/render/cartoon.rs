use super::primitives::{arc, circle, line, Stroke};
use super::{FaceLayout, GlyphStyle};
use crate::constants::{BLINK_FRAMES, BLINK_PERIOD};
use crate::emotion::Emotion;
use image::{Rgb, RgbImage};

const FACE: Rgb<u8> = Rgb([255, 255, 150]);
const INK: Rgb<u8> = Rgb([0, 0, 0]);
const BLUSH: Rgb<u8> = Rgb([255, 180, 180]);

/// Whether the eyes are closed on this frame
#[must_use]
pub fn is_blinking(frame_index: u64) -> bool {
    frame_index % BLINK_PERIOD < BLINK_FRAMES
}

/// Classic filled emoji with a fixed-cycle blink and per-emotion brows,
/// cheeks and mouth.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartoonStyle;

impl GlyphStyle for CartoonStyle {
    fn draw(&self, image: &mut RgbImage, center: (i32, i32), size: u32, emotion: Emotion, frame_index: u64) {
        let face = FaceLayout::new(center, size);
        circle(image, face.center(), face.radius, FACE, Stroke::Filled);

        let [left, right] = face.eyes();
        if is_blinking(frame_index) {
            for (x, y) in [left, right] {
                line(image, (x - 6, y), (x + 6, y), INK, 2);
            }
        } else {
            for eye in [left, right] {
                circle(image, eye, face.part(6), INK, Stroke::Filled);
            }
        }

        let mouth_axes = (face.part(2), face.part(4));
        match emotion {
            Emotion::Happy => {
                arc(image, (face.cx, face.mouth_y), mouth_axes, (0, 180), INK, 2);
                circle(image, (left.0 - 10, face.cy), face.part(6), BLUSH, Stroke::Filled);
                circle(image, (right.0 + 10, face.cy), face.part(6), BLUSH, Stroke::Filled);
            }
            Emotion::Sad => {
                arc(
                    image,
                    (face.cx, face.mouth_y + face.part(6)),
                    mouth_axes,
                    (180, 360),
                    INK,
                    2,
                );
            }
            Emotion::Angry => {
                let (start, end) = face.flat_mouth();
                line(image, start, end, INK, 3);
                // Brows slant down toward the nose
                line(image, (left.0 - 5, left.1 - 8), (left.0 + 5, left.1 - 2), INK, 2);
                line(image, (right.0 - 5, right.1 - 2), (right.0 + 5, right.1 - 8), INK, 2);
            }
            Emotion::Surprise => {
                circle(image, (face.cx, face.mouth_y), face.part(5), INK, Stroke::Outline(2));
                line(image, (left.0 - 6, left.1 - 10), (left.0 + 6, left.1 - 6), INK, 2);
                line(image, (right.0 - 6, right.1 - 10), (right.0 + 6, right.1 - 6), INK, 2);
            }
            _ => {
                let (start, end) = face.flat_mouth();
                line(image, start, end, INK, 2);
            }
        }
    }

    fn name(&self) -> &'static str {
        "cartoon"
    }
}
