//! Glyph rendering: draws a stylized emoji face in one of several modes.
//!
//! Each [`GlyphMode`] maps to one [`GlyphStyle`] implementation. Styles are
//! pure functions of `(center, size, emotion, frame_index)`; the only state is
//! the mode held by [`GlyphRenderer`]. The face disc has diameter `size`;
//! glow and orbiting particles may extend a few pixels past it.

/// Drawing helpers shared by the styles
pub mod primitives;

/// Outline-only hologram style
pub mod vector;

/// Filled classic emoji with blinking and decorations
pub mod cartoon;

/// Filled glyph with glow rings and orbiting particles
pub mod neon;

/// Pulsing outline glyph with a shimmering particle ring
pub mod cyberpunk;

use crate::emotion::Emotion;
use crate::utils::floor_div;
use crate::utils::safe_cast::u32_to_i32_saturating;
use crate::{Error, Result};
use image::RgbImage;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use cartoon::CartoonStyle;
pub use cyberpunk::CyberpunkStyle;
pub use neon::NeonStyle;
pub use vector::VectorStyle;

/// A drawing strategy for one glyph mode
pub trait GlyphStyle: Send + Sync {
    /// Draw a face of diameter `size` centered at `center`
    fn draw(&self, image: &mut RgbImage, center: (i32, i32), size: u32, emotion: Emotion, frame_index: u64);

    /// Style name
    fn name(&self) -> &'static str;
}

/// Selectable glyph drawing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphMode {
    /// Outline-only hologram
    Vector,
    /// Classic filled emoji
    Cartoon,
    /// Glowing filled emoji with orbiting particles
    #[default]
    Neon,
    /// Pulsing outline with shimmering particles
    Cyberpunk,
}

impl GlyphMode {
    /// All modes in selection order (keys 1-4)
    pub const ALL: [GlyphMode; 4] = [Self::Vector, Self::Cartoon, Self::Neon, Self::Cyberpunk];

    /// Lowercase mode name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Vector => "vector",
            Self::Cartoon => "cartoon",
            Self::Neon => "neon",
            Self::Cyberpunk => "cyberpunk",
        }
    }

    /// Drawing strategy for this mode
    #[must_use]
    pub fn style(self) -> &'static dyn GlyphStyle {
        match self {
            Self::Vector => &VectorStyle,
            Self::Cartoon => &CartoonStyle,
            Self::Neon => &NeonStyle,
            Self::Cyberpunk => &CyberpunkStyle,
        }
    }

    /// Mode for a 1-based selection index
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for GlyphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GlyphMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "vector" => Ok(Self::Vector),
            "cartoon" => Ok(Self::Cartoon),
            "neon" => Ok(Self::Neon),
            "cyberpunk" => Ok(Self::Cyberpunk),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

/// Face geometry shared by all styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceLayout {
    /// Center x
    pub cx: i32,
    /// Center y
    pub cy: i32,
    /// Face radius
    pub radius: i32,
    /// Horizontal eye offset from center
    pub eye_dx: i32,
    /// Vertical eye offset above center
    pub eye_dy: i32,
    /// Mouth baseline
    pub mouth_y: i32,
}

impl FaceLayout {
    /// Layout for a face of diameter `size` at `center`
    #[must_use]
    pub fn new(center: (i32, i32), size: u32) -> Self {
        let radius = floor_div(u32_to_i32_saturating(size), 2);
        Self {
            cx: center.0,
            cy: center.1,
            radius,
            eye_dx: floor_div(radius, 2),
            eye_dy: floor_div(radius, 3),
            mouth_y: center.1 + floor_div(radius, 3),
        }
    }

    /// Face center
    #[must_use]
    pub fn center(&self) -> (i32, i32) {
        (self.cx, self.cy)
    }

    /// Left and right eye centers
    #[must_use]
    pub fn eyes(&self) -> [(i32, i32); 2] {
        let y = self.cy - self.eye_dy;
        [(self.cx - self.eye_dx, y), (self.cx + self.eye_dx, y)]
    }

    /// `radius / divisor`, rounded down
    #[must_use]
    pub fn part(&self, divisor: i32) -> i32 {
        floor_div(self.radius, divisor)
    }

    /// Endpoints of the flat mouth line
    #[must_use]
    pub fn flat_mouth(&self) -> ((i32, i32), (i32, i32)) {
        let half = self.part(2);
        ((self.cx - half, self.mouth_y), (self.cx + half, self.mouth_y))
    }
}

/// Draws avatar glyphs with the currently selected mode
#[derive(Debug, Clone, Default)]
pub struct GlyphRenderer {
    mode: GlyphMode,
}

impl GlyphRenderer {
    /// Create a renderer starting in `mode`
    #[must_use]
    pub fn new(mode: GlyphMode) -> Self {
        Self { mode }
    }

    /// Currently selected mode
    #[must_use]
    pub fn mode(&self) -> GlyphMode {
        self.mode
    }

    /// Select a mode for subsequent draws
    pub fn set_mode(&mut self, mode: GlyphMode) {
        if mode != self.mode {
            debug!("Glyph mode changed: {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Select a mode by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] for unknown names; the current mode is
    /// left unchanged.
    pub fn set_mode_by_name(&mut self, name: &str) -> Result<()> {
        match name.parse::<GlyphMode>() {
            Ok(mode) => {
                self.set_mode(mode);
                Ok(())
            }
            Err(e) => {
                warn!("Ignoring glyph mode {name:?}, keeping {}", self.mode);
                Err(e)
            }
        }
    }

    /// Draw one glyph onto `image`
    pub fn draw(&self, image: &mut RgbImage, center: (i32, i32), size: u32, emotion: Emotion, frame_index: u64) {
        self.mode.style().draw(image, center, size, emotion, frame_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("vector".parse::<GlyphMode>().unwrap(), GlyphMode::Vector);
        assert_eq!("CyberPunk".parse::<GlyphMode>().unwrap(), GlyphMode::Cyberpunk);
        assert!(matches!("plasma".parse::<GlyphMode>(), Err(Error::InvalidMode(_))));
    }

    #[test]
    fn test_mode_from_index() {
        assert_eq!(GlyphMode::from_index(1), Some(GlyphMode::Vector));
        assert_eq!(GlyphMode::from_index(4), Some(GlyphMode::Cyberpunk));
        assert_eq!(GlyphMode::from_index(0), None);
        assert_eq!(GlyphMode::from_index(5), None);
    }

    #[test]
    fn test_default_mode_is_neon() {
        assert_eq!(GlyphRenderer::default().mode(), GlyphMode::Neon);
    }

    #[test]
    fn test_set_mode_by_name() {
        let mut renderer = GlyphRenderer::new(GlyphMode::Cartoon);
        assert!(renderer.set_mode_by_name("bogus").is_err());
        assert_eq!(renderer.mode(), GlyphMode::Cartoon);

        for mode in GlyphMode::ALL {
            renderer.set_mode_by_name(mode.name()).unwrap();
            assert_eq!(renderer.mode(), mode);
        }
    }

    #[test]
    fn test_style_names_match_modes() {
        for mode in GlyphMode::ALL {
            assert_eq!(mode.style().name(), mode.name());
        }
    }

    #[test]
    fn test_face_layout() {
        let layout = FaceLayout::new((100, 100), 76);
        assert_eq!(layout.radius, 38);
        assert_eq!(layout.eyes(), [(81, 88), (119, 88)]);
        assert_eq!(layout.mouth_y, 112);
        assert_eq!(layout.flat_mouth(), ((81, 112), (119, 112)));
    }
}
