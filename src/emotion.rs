//! Emotion labels, palette colors and per-label score smoothing.

use crate::filters::exponential::blend;
use image::Rgb;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Color used for labels outside the known set
pub const DEFAULT_COLOR: Rgb<u8> = Rgb([255, 255, 0]);

/// Dominant emotion reported by the detector for one face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Emotion {
    /// Smiling face
    Happy,
    /// Frowning face
    Sad,
    /// Angry face
    Angry,
    /// Surprised face
    Surprise,
    /// Neutral face
    Neutral,
    /// Disgusted face
    Disgust,
    /// Fearful face
    Fear,
    /// Any label outside the known set
    Unknown,
}

impl Emotion {
    /// Known labels in display order
    pub const ORDER: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprise,
        Emotion::Neutral,
        Emotion::Disgust,
        Emotion::Fear,
    ];

    /// Parse a detector label. Case-insensitive, never fails.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "happy" => Self::Happy,
            "sad" => Self::Sad,
            "angry" => Self::Angry,
            "surprise" => Self::Surprise,
            "neutral" => Self::Neutral,
            "disgust" => Self::Disgust,
            "fear" => Self::Fear,
            _ => Self::Unknown,
        }
    }

    /// Lowercase detector label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Surprise => "surprise",
            Self::Neutral => "neutral",
            Self::Disgust => "disgust",
            Self::Fear => "fear",
            Self::Unknown => "unknown",
        }
    }

    /// Palette color for glyphs, particles and score bars
    #[must_use]
    pub fn color(self) -> Rgb<u8> {
        match self {
            Self::Happy => Rgb([255, 255, 0]),
            Self::Sad => Rgb([0, 0, 255]),
            Self::Angry => Rgb([255, 0, 0]),
            Self::Surprise => Rgb([255, 255, 255]),
            Self::Neutral => Rgb([0, 255, 0]),
            Self::Disgust => Rgb([0, 128, 0]),
            Self::Fear => Rgb([128, 0, 128]),
            Self::Unknown => DEFAULT_COLOR,
        }
    }
}

impl Default for Emotion {
    fn default() -> Self {
        Self::Neutral
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Emotion {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<&str> for Emotion {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl From<Emotion> for String {
    fn from(emotion: Emotion) -> Self {
        emotion.label().to_string()
    }
}

/// Per-label emotion scores as reported by the detector (0-100 scale)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionScores(BTreeMap<Emotion, f64>);

impl EmotionScores {
    /// Create an empty score map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score for a label
    pub fn insert(&mut self, emotion: Emotion, score: f64) {
        self.0.insert(emotion, score);
    }

    /// Score for a label, 0.0 when absent
    #[must_use]
    pub fn get(&self, emotion: Emotion) -> f64 {
        self.0.get(&emotion).copied().unwrap_or(0.0)
    }

    /// Number of labels with a score
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no label has a score
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(label, score)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        self.0.iter().map(|(emotion, score)| (*emotion, *score))
    }

    /// Label with the highest score, ties resolved by label order
    #[must_use]
    pub fn dominant(&self) -> Option<Emotion> {
        self.0
            .iter()
            .fold(None, |best: Option<(Emotion, f64)>, (emotion, score)| match best {
                Some((_, best_score)) if best_score >= *score => best,
                _ => Some((*emotion, *score)),
            })
            .map(|(emotion, _)| emotion)
    }

    /// Exponentially smooth `new` into `prev` over the union of labels.
    ///
    /// Missing labels count as 0.0. Without a previous map the new scores
    /// are returned unchanged.
    #[must_use]
    pub fn smooth(prev: Option<&Self>, new: &Self, alpha: f64) -> Self {
        let Some(prev) = prev else {
            return new.clone();
        };

        let mut out = BTreeMap::new();
        for emotion in prev.0.keys().chain(new.0.keys()) {
            out.entry(*emotion)
                .or_insert_with(|| blend(prev.get(*emotion), new.get(*emotion), alpha));
        }
        Self(out)
    }
}

impl FromIterator<(Emotion, f64)> for EmotionScores {
    fn from_iter<I: IntoIterator<Item = (Emotion, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
