//! Per-face avatar state: anchor tracking, on-face tethering and scatter
//! placement around the face box.
//!
//! An [`Avatar`] is created for every tracked face and updated once per
//! frame. While tethered it eases toward a slowly oscillating point on the
//! face center. While scattered it snaps to a target on one side of the face
//! box, chosen once per scatter episode, and a correction step guarantees its
//! center never falls inside the box.
//!
//! Randomness (initial phase, phase speed, scatter side and jitter) comes from
//! a generator owned by each avatar, so a seeded avatar replays exactly.

use crate::config::AvatarConfig;
use crate::constants::{
    BOB_AMPLITUDE_X, BOB_AMPLITUDE_Y, DEFAULT_FLOAT_SPEED_MAX, DEFAULT_FLOAT_SPEED_MIN, MIN_PUSH_CLEARANCE,
    MIN_SCATTER_GAP, MIN_SCATTER_RADIUS, MIN_SIZE_INSIDE,
    MIN_SIZE_OUTSIDE, SCATTER_BOB_SCALE, SCATTER_GAP_FACTOR, SCATTER_JITTER, SCATTER_MARGIN_FACTOR,
    SIZE_INSIDE_FACTOR, SIZE_OUTSIDE_FACTOR, TETHER_AMPLITUDE_X, TETHER_AMPLITUDE_Y,
};
use crate::detection::{Detection, FaceBox};
use crate::emotion::{Emotion, EmotionScores};
use crate::filters::exponential::ExponentialFilter;
use crate::utils::floor_div;
use crate::utils::safe_cast::{round_px, trunc_px, u32_to_i32_saturating};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Side of the face box a scattered avatar is placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterSide {
    /// Above the face
    Top,
    /// Below the face
    Bottom,
    /// Left of the face
    Left,
    /// Right of the face
    Right,
}

impl ScatterSide {
    const ALL: [ScatterSide; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];
}

/// Render position, size and emotion of one avatar for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarSnapshot {
    /// Horizontal center
    pub x: f64,
    /// Vertical center
    pub y: f64,
    /// Glyph diameter for the current mode
    pub base_size: u32,
    /// Emotion to draw
    pub emotion: Emotion,
}

impl AvatarSnapshot {
    /// Center in whole pixels, truncated toward zero
    #[must_use]
    pub fn center_px(&self) -> (i32, i32) {
        (trunc_px(self.x), trunc_px(self.y))
    }
}

/// Compute `(size_inside, size_outside)` for a face box
#[must_use]
#[allow(clippy::cast_sign_loss)] // both sizes are clamped to positive minimums
pub fn glyph_sizes(bbox: &FaceBox) -> (u32, u32) {
    let face_min = f64::from(bbox.clamped_min_side());
    let inside = round_px(face_min * SIZE_INSIDE_FACTOR).max(MIN_SIZE_INSIDE as i32) as u32;
    let outside = round_px(f64::from(inside) * SIZE_OUTSIDE_FACTOR).max(MIN_SIZE_OUTSIDE as i32) as u32;
    (inside, outside)
}

/// Animated avatar bound to one detected face
#[derive(Debug, Clone)]
pub struct Avatar {
    emotion: Emotion,
    anchor_x: i32,
    anchor_y: i32,
    x: f64,
    y: f64,
    size_inside: u32,
    size_outside: u32,
    base_size: u32,
    phase: f64,
    float_speed: f64,
    target_dx: i32,
    target_dy: i32,
    is_scattered: bool,
    last_w: i32,
    last_h: i32,
    scores: Option<EmotionScores>,
    score_alpha: f64,
    tether: ExponentialFilter,
    rng: StdRng,
}

impl Avatar {
    /// Create an avatar anchored on `bbox` with default animation settings
    #[must_use]
    pub fn new(emotion: Emotion, bbox: FaceBox, rng: StdRng) -> Self {
        Self::with_config(emotion, bbox, &AvatarConfig::default(), rng)
    }

    /// Create an avatar whose randomness is seeded from `seed`
    #[must_use]
    pub fn with_seed(emotion: Emotion, bbox: FaceBox, seed: u64) -> Self {
        Self::new(emotion, bbox, StdRng::seed_from_u64(seed))
    }

    /// Create an avatar seeded from system entropy
    #[must_use]
    pub fn from_entropy(emotion: Emotion, bbox: FaceBox) -> Self {
        Self::new(emotion, bbox, StdRng::from_entropy())
    }

    /// Create an avatar from a detection
    #[must_use]
    pub fn from_detection(detection: &Detection, config: &AvatarConfig, rng: StdRng) -> Self {
        let mut avatar = Self::with_config(detection.emotion, detection.bbox, config, rng);
        avatar.scores = detection.scores.clone();
        avatar
    }

    /// Create an avatar with explicit animation settings
    ///
    /// Out-of-range settings are clamped rather than rejected: non-finite
    /// speed bounds fall back to the defaults and negative ones to zero, so
    /// the phase never runs backwards.
    #[must_use]
    pub fn with_config(emotion: Emotion, bbox: FaceBox, config: &AvatarConfig, mut rng: StdRng) -> Self {
        let (anchor_x, anchor_y) = bbox.center();
        let (size_inside, size_outside) = glyph_sizes(&bbox);
        let (last_w, last_h) = bbox.clamped_dims();

        let (speed_lo, speed_hi) = sanitize_speed_range(config.float_speed_min, config.float_speed_max);
        let phase = rng.gen_range(0.0..TAU);
        let float_speed = rng.gen_range(speed_lo..=speed_hi);

        let x = f64::from(anchor_x);
        let y = f64::from(anchor_y);
        let ease = sanitize_alpha(config.tether_ease);

        debug!(
            "Avatar created at ({anchor_x}, {anchor_y}) sizes {size_inside}/{size_outside} speed {float_speed:.3}"
        );

        Self {
            emotion,
            anchor_x,
            anchor_y,
            x,
            y,
            size_inside,
            size_outside,
            base_size: size_inside,
            phase,
            float_speed,
            target_dx: 0,
            target_dy: 0,
            is_scattered: false,
            last_w,
            last_h,
            scores: None,
            score_alpha: sanitize_alpha(config.score_smoothing_alpha),
            tether: ExponentialFilter::seeded(ease, x, y),
            rng,
        }
    }

    /// Advance one frame.
    ///
    /// `detection` refreshes anchor, sizes and emotion when the face is
    /// visible; `None` keeps the last known geometry. `scatter` selects the
    /// off-face placement for this frame.
    pub fn update(&mut self, detection: Option<&Detection>, scatter: bool) {
        self.phase += self.float_speed;

        if let Some(detection) = detection {
            self.observe(detection);
        }

        let bob_x = trunc_px(BOB_AMPLITUDE_X * self.phase.sin());
        let bob_y = trunc_px(BOB_AMPLITUDE_Y * (self.phase / 2.0).sin());

        if scatter {
            self.update_scattered(bob_x, bob_y);
        } else {
            self.update_tethered();
        }
    }

    fn observe(&mut self, detection: &Detection) {
        let bbox = detection.bbox;
        (self.anchor_x, self.anchor_y) = bbox.center();
        (self.size_inside, self.size_outside) = glyph_sizes(&bbox);
        (self.last_w, self.last_h) = bbox.clamped_dims();
        self.emotion = detection.emotion;

        if let Some(new_scores) = &detection.scores {
            self.scores = Some(EmotionScores::smooth(self.scores.as_ref(), new_scores, self.score_alpha));
        }
    }

    fn update_tethered(&mut self) {
        self.base_size = self.size_inside;

        let target_x = self.anchor_x + trunc_px(TETHER_AMPLITUDE_X * self.phase.sin());
        let target_y = self.anchor_y + trunc_px(TETHER_AMPLITUDE_Y * (self.phase / 2.0).sin());
        (self.x, self.y) = self.tether.apply(f64::from(target_x), f64::from(target_y));

        self.is_scattered = false;
    }

    fn update_scattered(&mut self, bob_x: i32, bob_y: i32) {
        self.base_size = self.size_outside;

        if !self.is_scattered || self.has_no_target() {
            self.pick_scatter_target();
            self.is_scattered = true;
        }

        let anchor_x = f64::from(self.anchor_x);
        let anchor_y = f64::from(self.anchor_y);
        self.x = anchor_x + f64::from(self.target_dx) + f64::from(bob_x) * SCATTER_BOB_SCALE;
        self.y = anchor_y + f64::from(self.target_dy) + f64::from(bob_y) * SCATTER_BOB_SCALE;

        // Overlap safety: the center must never sit inside the face box
        let half_w = f64::from(self.last_w) / 2.0;
        let half_h = f64::from(self.last_h) / 2.0;
        let dx = self.x - anchor_x;
        let dy = self.y - anchor_y;
        if dx.abs() < half_w && dy.abs() < half_h {
            let clearance = f64::from(MIN_PUSH_CLEARANCE.max(floor_div(u32_to_i32_saturating(self.base_size), 2)));
            if dx.abs() >= dy.abs() {
                self.x = anchor_x + (half_w + clearance) * sign_or_positive(dx);
            } else {
                self.y = anchor_y + (half_h + clearance) * sign_or_positive(dy);
            }
            debug!("Scatter position corrected out of face box to ({:.1}, {:.1})", self.x, self.y);
        }

        self.tether.seed(self.x, self.y);
    }

    fn has_no_target(&self) -> bool {
        self.target_dx == 0 && self.target_dy == 0
    }

    /// Choose a scatter target just outside the face box on a random side
    fn pick_scatter_target(&mut self) {
        let w = self.last_w;
        let h = self.last_h;
        let min_side = f64::from(w.min(h));

        let radius = MIN_SCATTER_RADIUS.max(floor_div(u32_to_i32_saturating(self.size_outside), 2));
        let gap = MIN_SCATTER_GAP.max(round_px(min_side * SCATTER_GAP_FACTOR));
        let margin = (gap + radius).max(round_px(min_side * SCATTER_MARGIN_FACTOR));

        let side = ScatterSide::ALL[self.rng.gen_range(0..ScatterSide::ALL.len())];
        let jitter = self.rng.gen_range(-SCATTER_JITTER..=SCATTER_JITTER);

        let (dx, dy) = match side {
            ScatterSide::Top => (trunc_px(jitter * f64::from(w)), -(floor_div(h, 2) + margin)),
            ScatterSide::Bottom => (trunc_px(jitter * f64::from(w)), floor_div(h, 2) + margin),
            ScatterSide::Left => (-(floor_div(w, 2) + margin), trunc_px(jitter * f64::from(h))),
            ScatterSide::Right => (floor_div(w, 2) + margin, trunc_px(jitter * f64::from(h))),
        };
        self.target_dx = dx;
        self.target_dy = dy;

        debug!("Scatter target {side:?} offset ({dx}, {dy}) margin {margin}");
    }

    /// Current render position, size and emotion
    #[must_use]
    pub fn snapshot(&self) -> AvatarSnapshot {
        AvatarSnapshot {
            x: self.x,
            y: self.y,
            base_size: self.base_size,
            emotion: self.emotion,
        }
    }

    /// Current emotion label
    #[must_use]
    pub fn emotion(&self) -> Emotion {
        self.emotion
    }

    /// Overwrite the emotion label
    pub fn set_emotion(&mut self, emotion: Emotion) {
        self.emotion = emotion;
    }

    /// Face center being tracked
    #[must_use]
    pub fn anchor(&self) -> (i32, i32) {
        (self.anchor_x, self.anchor_y)
    }

    /// Current render position
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// On-face glyph diameter
    #[must_use]
    pub fn size_inside(&self) -> u32 {
        self.size_inside
    }

    /// Off-face glyph diameter
    #[must_use]
    pub fn size_outside(&self) -> u32 {
        self.size_outside
    }

    /// Diameter used for the current mode
    #[must_use]
    pub fn base_size(&self) -> u32 {
        self.base_size
    }

    /// Animation phase in radians
    #[must_use]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Phase advance per frame
    #[must_use]
    pub fn float_speed(&self) -> f64 {
        self.float_speed
    }

    /// Scatter destination relative to the anchor, `(0, 0)` when none chosen
    #[must_use]
    pub fn target_offset(&self) -> (i32, i32) {
        (self.target_dx, self.target_dy)
    }

    /// Whether the avatar is in scatter mode
    #[must_use]
    pub fn is_scattered(&self) -> bool {
        self.is_scattered
    }

    /// Last face dimensions after clamping
    #[must_use]
    pub fn last_dims(&self) -> (i32, i32) {
        (self.last_w, self.last_h)
    }

    /// Smoothed emotion scores, if the detector supplied any
    #[must_use]
    pub fn scores(&self) -> Option<&EmotionScores> {
        self.scores.as_ref()
    }
}

fn sanitize_speed_range(min: f64, max: f64) -> (f64, f64) {
    if !(min.is_finite() && max.is_finite()) {
        return (DEFAULT_FLOAT_SPEED_MIN, DEFAULT_FLOAT_SPEED_MAX);
    }
    let (min, max) = (min.max(0.0), max.max(0.0));
    if min <= max {
        (min, max)
    } else {
        (max, min)
    }
}

fn sanitize_alpha(alpha: f64) -> f64 {
    if alpha.is_finite() && alpha > 0.0 {
        alpha.min(1.0)
    } else {
        1.0
    }
}

fn sign_or_positive(value: f64) -> f64 {
    if value >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(x: i32, y: i32, w: i32, h: i32) -> Detection {
        Detection::new(FaceBox::new(x, y, w, h), Emotion::Happy)
    }

    #[test]
    fn test_create_sizes_and_anchor() {
        let avatar = Avatar::with_seed(Emotion::Happy, FaceBox::new(100, 100, 80, 80), 7);
        assert_eq!(avatar.size_inside(), 76);
        assert_eq!(avatar.size_outside(), 47);
        assert_eq!(avatar.anchor(), (140, 140));
        assert_eq!(avatar.position(), (140.0, 140.0));
        assert_eq!(avatar.base_size(), 76);
        assert!(!avatar.is_scattered());
        assert_eq!(avatar.target_offset(), (0, 0));
    }

    #[test]
    fn test_random_parameters_in_range() {
        for seed in 0..50 {
            let avatar = Avatar::with_seed(Emotion::Sad, FaceBox::new(0, 0, 100, 100), seed);
            assert!((0.0..TAU).contains(&avatar.phase()));
            assert!((0.03..=0.10).contains(&avatar.float_speed()));
        }
    }

    #[test]
    fn test_non_finite_speed_bounds_use_defaults() {
        let config = AvatarConfig {
            float_speed_min: f64::NAN,
            float_speed_max: f64::INFINITY,
            ..AvatarConfig::default()
        };
        for seed in 0..20 {
            let rng = StdRng::seed_from_u64(seed);
            let avatar = Avatar::with_config(Emotion::Happy, FaceBox::new(0, 0, 80, 80), &config, rng);
            assert!((0.03..=0.10).contains(&avatar.float_speed()));
        }
    }

    #[test]
    fn test_negative_speed_bounds_never_reverse_phase() {
        let config = AvatarConfig {
            float_speed_min: -0.5,
            float_speed_max: -0.2,
            ..AvatarConfig::default()
        };
        let bbox = FaceBox::new(0, 0, 80, 80);
        let mut avatar = Avatar::with_config(Emotion::Sad, bbox, &config, StdRng::seed_from_u64(4));
        assert_eq!(avatar.float_speed(), 0.0);
        let start = avatar.phase();
        avatar.update(None, false);
        assert!(avatar.phase() >= start);

        let config = AvatarConfig {
            float_speed_min: -0.5,
            float_speed_max: 0.05,
            ..AvatarConfig::default()
        };
        let avatar = Avatar::with_config(Emotion::Sad, bbox, &config, StdRng::seed_from_u64(4));
        assert!((0.0..=0.05).contains(&avatar.float_speed()));
    }

    #[test]
    fn test_phase_advances_by_float_speed() {
        let mut avatar = Avatar::with_seed(Emotion::Neutral, FaceBox::new(0, 0, 100, 100), 3);
        let start = avatar.phase();
        avatar.update(None, false);
        avatar.update(None, false);
        assert!((avatar.phase() - (start + 2.0 * avatar.float_speed())).abs() < 1e-12);
    }

    #[test]
    fn test_tiny_face_uses_size_floors() {
        let (inside, outside) = glyph_sizes(&FaceBox::new(0, 0, 5, 0));
        assert_eq!(inside, 48);
        assert_eq!(outside, 30);
    }

    #[test]
    fn test_shrinking_face_recomputes_sizes() {
        let mut avatar = Avatar::with_seed(Emotion::Happy, FaceBox::new(0, 0, 200, 200), 11);
        assert_eq!(avatar.size_inside(), 190);
        avatar.update(Some(&face(50, 50, 20, 20)), false);
        assert_eq!(avatar.size_inside(), 48);
        assert_eq!(avatar.size_outside(), 30);
        assert_eq!(avatar.anchor(), (60, 60));
    }

    #[test]
    fn test_tethered_eases_toward_anchor() {
        let mut avatar = Avatar::with_seed(Emotion::Happy, FaceBox::new(100, 100, 80, 80), 5);
        for _ in 0..200 {
            avatar.update(Some(&face(100, 100, 80, 80)), false);
            let (x, y) = avatar.position();
            assert!((x - 140.0).abs() <= 6.0 + 1e-9);
            assert!((y - 140.0).abs() <= 4.0 + 1e-9);
        }
    }

    #[test]
    fn test_scatter_keeps_target_until_toggled() {
        let mut avatar = Avatar::with_seed(Emotion::Happy, FaceBox::new(100, 100, 80, 80), 21);
        avatar.update(None, true);
        assert!(avatar.is_scattered());
        let target = avatar.target_offset();
        assert_ne!(target, (0, 0));

        for _ in 0..4 {
            avatar.update(None, true);
            assert_eq!(avatar.target_offset(), target);
        }

        avatar.update(None, false);
        assert!(!avatar.is_scattered());
        assert_eq!(avatar.base_size(), avatar.size_inside());
    }

    #[test]
    fn test_scatter_uses_outside_size_and_clears_box() {
        let mut avatar = Avatar::with_seed(Emotion::Happy, FaceBox::new(100, 100, 80, 80), 9);
        avatar.update(None, true);
        assert_eq!(avatar.base_size(), 47);
        let (x, y) = avatar.position();
        assert!((x - 140.0).abs() >= 40.0 || (y - 140.0).abs() >= 40.0);
    }

    #[test]
    fn test_scatter_target_geometry() {
        // 80x80 face: radius 23, gap 10, margin max(33, 28) = 33
        for seed in 0..64 {
            let mut avatar = Avatar::with_seed(Emotion::Happy, FaceBox::new(0, 0, 80, 80), seed);
            avatar.update(None, true);
            let (dx, dy) = avatar.target_offset();
            let vertical = dy.abs() == 73 && dx.abs() <= 28;
            let horizontal = dx.abs() == 73 && dy.abs() <= 28;
            assert!(vertical || horizontal, "unexpected target ({dx}, {dy})");
        }
    }

    #[test]
    fn test_correction_when_face_grows_under_fixed_target() {
        let mut avatar = Avatar::with_seed(Emotion::Happy, FaceBox::new(0, 0, 40, 40), 2);
        avatar.update(None, true);
        // Face grows so the stored target would land inside the new box
        avatar.update(Some(&face(-200, -200, 440, 440)), true);
        let (ax, ay) = avatar.anchor();
        let (x, y) = avatar.position();
        assert!((x - f64::from(ax)).abs() >= 220.0 || (y - f64::from(ay)).abs() >= 220.0);
    }

    #[test]
    fn test_same_seed_replays() {
        let run = |seed| {
            let mut avatar = Avatar::with_seed(Emotion::Fear, FaceBox::new(10, 10, 90, 70), seed);
            let mut trace = Vec::new();
            for frame in 0..30 {
                avatar.update(Some(&face(10 + frame, 10, 90, 70)), frame % 10 >= 5);
                trace.push(avatar.position());
            }
            trace
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_update_overwrites_emotion_and_smooths_scores() {
        let mut avatar = Avatar::with_seed(Emotion::Happy, FaceBox::new(0, 0, 80, 80), 1);
        let first: EmotionScores = [(Emotion::Sad, 100.0)].into_iter().collect();
        let second: EmotionScores = [(Emotion::Sad, 0.0)].into_iter().collect();

        let detection = Detection::new(FaceBox::new(0, 0, 80, 80), Emotion::Sad).with_scores(first);
        avatar.update(Some(&detection), false);
        assert_eq!(avatar.emotion(), Emotion::Sad);
        assert_eq!(avatar.scores().unwrap().get(Emotion::Sad), 100.0);

        let detection = Detection::new(FaceBox::new(0, 0, 80, 80), Emotion::Angry).with_scores(second);
        avatar.update(Some(&detection), false);
        assert_eq!(avatar.emotion(), Emotion::Angry);
        assert!((avatar.scores().unwrap().get(Emotion::Sad) - 65.0).abs() < 1e-9);
    }
}
