//! Stroke and blend helpers on top of `imageproc` drawing.
//!
//! `imageproc` draws one-pixel outlines; glyph strokes need two or three
//! pixel widths, half-ellipse mouths and translucent glow layers. Everything
//! here clips at the image border.

use crate::utils::safe_cast::channel_u8;
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut};

/// Outline width or solid fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    /// Solid shape
    Filled,
    /// Outline of the given width in pixels
    Outline(i32),
}

/// Angular samples per full turn when tracing arcs
const ARC_SAMPLES_PER_TURN: i32 = 72;

/// Mask value marking a covered pixel
const MASK_ON: Luma<u8> = Luma([255]);

/// Draw a circle with the given stroke
pub fn circle(image: &mut RgbImage, center: (i32, i32), radius: i32, color: Rgb<u8>, stroke: Stroke) {
    if radius < 0 {
        return;
    }
    match stroke {
        Stroke::Filled => draw_filled_circle_mut(image, center, radius, color),
        Stroke::Outline(thickness) => {
            for r in ring_radii(radius, thickness) {
                draw_hollow_circle_mut(image, center, r, color);
            }
        }
    }
}

/// Draw a line segment `thickness` pixels wide
pub fn line(image: &mut RgbImage, start: (i32, i32), end: (i32, i32), color: Rgb<u8>, thickness: i32) {
    let start = (start.0 as f32, start.1 as f32);
    let end = (end.0 as f32, end.1 as f32);
    thick_segment(image, start, end, color, thickness);
}

/// Draw an elliptical arc between two angles in degrees.
///
/// Angles grow clockwise on screen (y points down), so `0..180` traces the
/// lower half and `180..360` the upper half.
pub fn arc(
    image: &mut RgbImage,
    center: (i32, i32),
    axes: (i32, i32),
    degrees: (i32, i32),
    color: Rgb<u8>,
    thickness: i32,
) {
    let (start, end) = degrees;
    if end <= start || axes.0 < 0 || axes.1 < 0 {
        return;
    }

    let steps = ((end - start) * ARC_SAMPLES_PER_TURN / 360).max(1);
    let point = |step: i32| {
        let angle = f64::from(start + (end - start) * step / steps).to_radians();
        (
            (f64::from(center.0) + f64::from(axes.0) * angle.cos()) as f32,
            (f64::from(center.1) + f64::from(axes.1) * angle.sin()) as f32,
        )
    };

    let mut previous = point(0);
    for step in 1..=steps {
        let next = point(step);
        thick_segment(image, previous, next, color, thickness);
        previous = next;
    }
}

/// Blend a circle onto the image at `opacity`, like drawing on a copy and
/// mixing it back with weight `opacity`.
pub fn blend_circle(
    image: &mut RgbImage,
    center: (i32, i32),
    radius: i32,
    color: Rgb<u8>,
    stroke: Stroke,
    opacity: f32,
) {
    if radius < 0 {
        return;
    }

    let pad = match stroke {
        Stroke::Filled => 0,
        Stroke::Outline(thickness) => thickness.max(1),
    };
    let half = radius + pad;
    let side = u32::try_from(2 * half + 1).unwrap_or(0);
    if side == 0 {
        return;
    }

    let mut mask = GrayImage::new(side, side);
    let local = (half, half);
    match stroke {
        Stroke::Filled => draw_filled_circle_mut(&mut mask, local, radius, MASK_ON),
        Stroke::Outline(thickness) => {
            for r in ring_radii(radius, thickness) {
                draw_hollow_circle_mut(&mut mask, local, r, MASK_ON);
            }
        }
    }

    let origin = (center.0 - half, center.1 - half);
    apply_mask(image, &mask, origin, color, opacity);
}

fn apply_mask(image: &mut RgbImage, mask: &GrayImage, origin: (i32, i32), color: Rgb<u8>, opacity: f32) {
    let opacity = f64::from(opacity.clamp(0.0, 1.0));
    let (width, height) = image.dimensions();

    for (mx, my, value) in mask.enumerate_pixels() {
        if value[0] == 0 {
            continue;
        }
        let Some(ix) = offset(origin.0, mx).filter(|x| *x < width) else {
            continue;
        };
        let Some(iy) = offset(origin.1, my).filter(|y| *y < height) else {
            continue;
        };

        let pixel = image.get_pixel_mut(ix, iy);
        for channel in 0..3 {
            let mixed = f64::from(color[channel]) * opacity + f64::from(pixel[channel]) * (1.0 - opacity);
            pixel[channel] = channel_u8(mixed.round());
        }
    }
}

fn offset(origin: i32, delta: u32) -> Option<u32> {
    let position = i64::from(origin) + i64::from(delta);
    u32::try_from(position).ok()
}

/// Radii of concentric one-pixel circles forming an outline of `thickness`
fn ring_radii(radius: i32, thickness: i32) -> impl Iterator<Item = i32> {
    let thickness = thickness.max(1);
    let inner = radius - (thickness - 1) / 2;
    (inner..inner + thickness).filter(|r| *r >= 0)
}

fn thick_segment(image: &mut RgbImage, start: (f32, f32), end: (f32, f32), color: Rgb<u8>, thickness: i32) {
    let thickness = thickness.max(1);
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let length = (dx * dx + dy * dy).sqrt();
    let (nx, ny) = if length > f32::EPSILON {
        (-dy / length, dx / length)
    } else {
        (0.0, 1.0)
    };

    let first = -(thickness - 1) / 2;
    for k in first..first + thickness {
        let k = k as f32;
        draw_line_segment_mut(
            image,
            (start.0 + nx * k, start.1 + ny * k),
            (end.0 + nx * k, end.1 + ny * k),
            color,
        );
    }
}
