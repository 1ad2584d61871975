use super::primitives::{arc, circle, line, Stroke};
use super::{FaceLayout, GlyphStyle};
use crate::emotion::Emotion;
use image::RgbImage;

/// Minimal outline glyph: ring, two solid pupils and an emotion mouth, all in
/// the emotion color.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorStyle;

impl GlyphStyle for VectorStyle {
    fn draw(&self, image: &mut RgbImage, center: (i32, i32), size: u32, emotion: Emotion, _frame_index: u64) {
        let face = FaceLayout::new(center, size);
        let color = emotion.color();

        circle(image, face.center(), face.radius, color, Stroke::Outline(2));
        for eye in face.eyes() {
            circle(image, eye, face.part(8), color, Stroke::Filled);
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
            Emotion::Surprise => circle(image, (face.cx, face.mouth_y), face.part(6), color, Stroke::Outline(2)),
            _ => {
                let (start, end) = face.flat_mouth();
                line(image, start, end, color, 2);
            }
        }
    }

    fn name(&self) -> &'static str {
        "vector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_leaves_face_interior_empty() {
        let mut image = RgbImage::new(120, 120);
        VectorStyle.draw(&mut image, (60, 60), 80, Emotion::Neutral, 0);
        // Between the eyes and the mouth the hologram face is hollow
        assert_eq!(image.get_pixel(60, 60).0, [0, 0, 0]);
        // The outline itself is drawn in the emotion color
        assert_eq!(image.get_pixel(100, 60).0, Emotion::Neutral.color().0);
    }

    #[test]
    fn test_mouth_shape_depends_on_emotion() {
        let mut happy = RgbImage::new(120, 120);
        let mut sad = RgbImage::new(120, 120);
        VectorStyle.draw(&mut happy, (60, 60), 80, Emotion::Happy, 0);
        VectorStyle.draw(&mut sad, (60, 60), 80, Emotion::Happy, 0);
        assert_eq!(happy, sad);

        VectorStyle.draw(&mut sad, (60, 60), 80, Emotion::Sad, 0);
        assert_ne!(happy, sad);
    }

    #[test]
    fn test_ignores_frame_index() {
        let mut a = RgbImage::new(80, 80);
        let mut b = RgbImage::new(80, 80);
        VectorStyle.draw(&mut a, (40, 40), 60, Emotion::Surprise, 0);
        VectorStyle.draw(&mut b, (40, 40), 60, Emotion::Surprise, 999);
        assert_eq!(a, b);
    }
}
