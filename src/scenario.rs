//! Scripted detection sequences for driving the overlay without a live
//! detector.
//!
//! ```yaml
//! frames:
//!   - detections:
//!       - { x: 100, y: 80, w: 120, h: 120, emotion: happy }
//!     repeat: 30
//!   - keys: "s"
//!     detections:
//!       - { x: 110, y: 80, w: 120, h: 120, emotion: surprise }
//!     repeat: 30
//! ```

use crate::detection::Detection;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One scripted frame, optionally held for several frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFrame {
    /// Faces visible in this frame
    #[serde(default)]
    pub detections: Vec<Detection>,

    /// Key presses applied before the first repetition
    #[serde(default)]
    pub keys: String,

    /// Number of consecutive frames with these detections
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

fn default_repeat() -> u32 {
    1
}

/// A scripted sequence of detection frames
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Frames in playback order
    pub frames: Vec<ScenarioFrame>,
}

impl Scenario {
    /// Load a scenario from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a scenario from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let scenario: Self =
            serde_yaml::from_str(content).map_err(|e| Error::ScenarioError(format!("Failed to parse scenario: {e}")))?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Check that every frame is playable
    pub fn validate(&self) -> Result<()> {
        if let Some(index) = self.frames.iter().position(|f| f.repeat == 0) {
            return Err(Error::ScenarioError(format!("Frame {index} has repeat 0")));
        }
        Ok(())
    }

    /// Total number of rendered frames after repetition
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.repeat)).sum()
    }

    /// Iterate `(keys, detections)` per rendered frame; keys are only
    /// reported on the first repetition
    pub fn playback(&self) -> impl Iterator<Item = (&str, &[Detection])> + '_ {
        self.frames.iter().flat_map(|frame| {
            (0..frame.repeat).map(move |i| {
                let keys = if i == 0 { frame.keys.as_str() } else { "" };
                (keys, frame.detections.as_slice())
            })
        })
    }
}
