//! Animated emoji overlay for face-tracked video frames.
//!
//! Every detected face gets an [`avatar::Avatar`]: a small state machine that
//! keeps a glyph tethered to the face with a gentle floating bob, or, in
//! scatter mode, parks it on a random side just outside the face. A
//! [`render::GlyphRenderer`] then draws the glyph in one of four styles.
//!
//! The pipeline per frame is:
//! 1. Detections (face box plus emotion label) come from any detector
//! 2. [`tracker::AvatarTracker`] pairs them with avatars and advances them
//! 3. Each [`avatar::AvatarSnapshot`] is drawn by the renderer
//! 4. The [`hud::Hud`] adds a status badge and optional score bars
//!
//! # Examples
//!
//! ## Single avatar
//!
//! ```
//! use emoji_overlay::avatar::Avatar;
//! use emoji_overlay::detection::{Detection, FaceBox};
//! use emoji_overlay::emotion::Emotion;
//! use emoji_overlay::render::{GlyphMode, GlyphRenderer};
//! use image::RgbImage;
//!
//! let face = FaceBox::new(100, 80, 120, 120);
//! let mut avatar = Avatar::with_seed(Emotion::Happy, face, 42);
//! let renderer = GlyphRenderer::new(GlyphMode::Cartoon);
//!
//! let mut frame = RgbImage::new(640, 480);
//! for frame_index in 0..10 {
//!     avatar.update(Some(&Detection::new(face, Emotion::Happy)), false);
//!     let snapshot = avatar.snapshot();
//!     renderer.draw(&mut frame, snapshot.center_px(), snapshot.base_size, snapshot.emotion, frame_index);
//! }
//! ```
//!
//! ## Full overlay
//!
//! ```
//! use emoji_overlay::app::OverlayApp;
//! use emoji_overlay::config::Config;
//! use emoji_overlay::detection::{Detection, FaceBox};
//! use emoji_overlay::emotion::Emotion;
//! use image::RgbImage;
//!
//! # fn main() -> emoji_overlay::Result<()> {
//! let mut app = OverlayApp::new(Config::default())?;
//! app.handle_key('2'); // cartoon
//! app.handle_key('s'); // scatter
//!
//! let mut frame = RgbImage::new(640, 480);
//! let faces = [Detection::new(FaceBox::new(260, 180, 120, 120), Emotion::Surprise)];
//! let snapshots = app.process_frame(&mut frame, &faces);
//! assert_eq!(snapshots.len(), 1);
//! # Ok(())
//! # }
//! ```

/// Error types and result handling
pub mod error;

/// Constants used throughout the library
pub mod constants;

/// Numeric helpers and safe casts
pub mod utils;

/// Smoothing filters
pub mod filters;

/// Emotion labels, palette and score maps
pub mod emotion;

/// Face boxes and per-frame detections
pub mod detection;

/// Per-face avatar animation state
pub mod avatar;

/// Glyph drawing styles
pub mod render;

/// Detection-to-avatar assignment across frames
pub mod tracker;

/// Status badge and score bars
pub mod hud;

/// Configuration management
pub mod config;

/// Scripted detection input
pub mod scenario;

/// Overlay application
pub mod app;

pub use error::{Error, Result};
