//! Maps per-frame detections onto avatar slots.
//!
//! Two identity policies are available. [`IdentityPolicy::ByIndex`] pairs
//! detection `i` with avatar `i` and rebuilds every avatar whenever the face
//! count changes, which resets animation state for faces that persisted.
//! [`IdentityPolicy::NearestAnchor`] instead matches each detection to the
//! closest existing anchor, so surviving faces keep their phase and scatter
//! target when another face appears or disappears.

use crate::avatar::{Avatar, AvatarSnapshot};
use crate::config::{AvatarConfig, TrackerConfig};
use crate::detection::Detection;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// How detections keep their avatar across frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityPolicy {
    /// Pair by position in the detection list; rebuild on count change
    #[default]
    ByIndex,
    /// Pair with the nearest previous anchor within a distance limit
    NearestAnchor,
}

/// Owns the avatars for all currently tracked faces
#[derive(Debug, Clone)]
pub struct AvatarTracker {
    avatars: Vec<Avatar>,
    policy: IdentityPolicy,
    max_match_distance: f64,
    avatar_config: AvatarConfig,
    rng: StdRng,
}

impl AvatarTracker {
    /// Create a tracker; `config.seed` makes animation reproducible
    #[must_use]
    pub fn new(config: &TrackerConfig, avatar_config: AvatarConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            avatars: Vec::new(),
            policy: config.identity,
            max_match_distance: config.max_match_distance,
            avatar_config,
            rng,
        }
    }

    /// Advance all avatars by one frame and return their render snapshots
    pub fn update(&mut self, detections: &[Detection], scatter: bool) -> Vec<AvatarSnapshot> {
        if detections.is_empty() {
            if !self.avatars.is_empty() {
                debug!("No faces detected, dropping {} avatar(s)", self.avatars.len());
            }
            self.avatars.clear();
            return Vec::new();
        }

        match self.policy {
            IdentityPolicy::ByIndex => self.assign_by_index(detections),
            IdentityPolicy::NearestAnchor => self.assign_nearest(detections),
        }

        for (avatar, detection) in self.avatars.iter_mut().zip(detections) {
            avatar.update(Some(detection), scatter);
        }

        self.avatars.iter().map(Avatar::snapshot).collect()
    }

    fn spawn(&mut self, detection: &Detection) -> Avatar {
        let rng = StdRng::seed_from_u64(self.rng.gen());
        Avatar::from_detection(detection, &self.avatar_config, rng)
    }

    fn assign_by_index(&mut self, detections: &[Detection]) {
        if self.avatars.len() == detections.len() {
            return;
        }
        debug!(
            "Face count changed {} -> {}, rebuilding avatars",
            self.avatars.len(),
            detections.len()
        );
        self.avatars = detections.iter().map(|d| self.spawn(d)).collect();
    }

    /// Reorder avatars so that `avatars[i]` belongs to `detections[i]`
    fn assign_nearest(&mut self, detections: &[Detection]) {
        let mut previous: Vec<Option<Avatar>> = self.avatars.drain(..).map(Some).collect();

        // All (distance, detection, avatar) pairs within range, closest first
        let mut candidates: Vec<(f64, usize, usize)> = Vec::new();
        for (di, detection) in detections.iter().enumerate() {
            let (cx, cy) = detection.bbox.center();
            for (ai, avatar) in previous.iter().enumerate() {
                let Some(avatar) = avatar else { continue };
                let (ax, ay) = avatar.anchor();
                let distance = f64::from(cx - ax).hypot(f64::from(cy - ay));
                if distance <= self.max_match_distance {
                    candidates.push((distance, di, ai));
                }
            }
        }
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));

        let mut assigned: Vec<Option<Avatar>> = vec![None; detections.len()];
        for (_, di, ai) in candidates {
            if assigned[di].is_none() {
                if let Some(avatar) = previous[ai].take() {
                    assigned[di] = Some(avatar);
                }
            }
        }

        let dropped = previous.iter().filter(|a| a.is_some()).count();
        if dropped > 0 {
            debug!("Dropping {dropped} avatar(s) with no matching face");
        }

        self.avatars = assigned
            .into_iter()
            .zip(detections)
            .map(|(avatar, detection)| match avatar {
                Some(avatar) => avatar,
                None => self.spawn(detection),
            })
            .collect();
    }

    /// Avatars in detection order
    #[must_use]
    pub fn avatars(&self) -> &[Avatar] {
        &self.avatars
    }

    /// Number of tracked faces
    #[must_use]
    pub fn len(&self) -> usize {
        self.avatars.len()
    }

    /// True when no face is tracked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.avatars.is_empty()
    }

    /// Drop all avatars
    pub fn clear(&mut self) {
        self.avatars.clear();
    }

    /// Active identity policy
    #[must_use]
    pub fn policy(&self) -> IdentityPolicy {
        self.policy
    }
}
