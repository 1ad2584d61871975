//! Smoothing filters for avatar positions and emotion scores.
//!
//! Tethered avatars ease toward their oscillating target with exponential
//! smoothing, and detector score maps are smoothed the same way across
//! frames.

/// Exponential filter for responsive smoothing
pub mod exponential;
