//! Helper functions and utilities for tests

#![allow(dead_code)]

use emoji_overlay::detection::{Detection, FaceBox};
use emoji_overlay::emotion::Emotion;
use image::RgbImage;
use std::path::PathBuf;

/// Detection for a face box with the given emotion
pub fn face(x: i32, y: i32, w: i32, h: i32, emotion: Emotion) -> Detection {
    Detection::new(FaceBox::new(x, y, w, h), emotion)
}

/// Black frame of the given size
pub fn blank_frame(width: u32, height: u32) -> RgbImage {
    RgbImage::new(width, height)
}

/// Number of pixels that are not black
pub fn lit_pixels(image: &RgbImage) -> usize {
    image.pixels().filter(|p| p.0 != [0, 0, 0]).count()
}

/// Fresh per-test scratch directory under the system temp dir
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("emoji-overlay-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
