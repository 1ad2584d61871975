//! Detector output consumed by the avatar tracker.
//!
//! The face/emotion detector itself lives outside this crate; these types
//! describe what it hands over for every face in every frame.

use crate::constants::MIN_FACE_DIMENSION;
use crate::emotion::{Emotion, EmotionScores};
use crate::utils::floor_div;
use serde::{Deserialize, Serialize};

/// Axis-aligned face bounding box in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaceBox {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl FaceBox {
    /// Create a box from its top-left corner and dimensions
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Box center, using integer division on the dimensions
    #[must_use]
    pub fn center(&self) -> (i32, i32) {
        (
            self.x.saturating_add(floor_div(self.w, 2)),
            self.y.saturating_add(floor_div(self.h, 2)),
        )
    }

    /// Width and height raised to the minimum face dimension
    #[must_use]
    pub fn clamped_dims(&self) -> (i32, i32) {
        (self.w.max(MIN_FACE_DIMENSION), self.h.max(MIN_FACE_DIMENSION))
    }

    /// Smaller of the clamped dimensions
    #[must_use]
    pub fn clamped_min_side(&self) -> i32 {
        let (w, h) = self.clamped_dims();
        w.min(h)
    }
}

/// One detected face with its dominant emotion
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Detection {
    /// Face bounding box
    #[serde(flatten)]
    pub bbox: FaceBox,
    /// Dominant emotion label
    #[serde(default)]
    pub emotion: Emotion,
    /// Optional per-label scores behind the dominant label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<EmotionScores>,
}

impl Detection {
    /// Create a detection without scores
    #[must_use]
    pub fn new(bbox: FaceBox, emotion: Emotion) -> Self {
        Self {
            bbox,
            emotion,
            scores: None,
        }
    }

    /// Attach per-label scores
    #[must_use]
    pub fn with_scores(mut self, scores: EmotionScores) -> Self {
        self.scores = Some(scores);
        self
    }
}
