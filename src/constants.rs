//! Constants used throughout the application

/// Face dimensions below this are clamped before deriving sizes
pub const MIN_FACE_DIMENSION: i32 = 20;

/// Minimum on-face glyph diameter
pub const MIN_SIZE_INSIDE: u32 = 48;

/// Minimum off-face glyph diameter
pub const MIN_SIZE_OUTSIDE: u32 = 30;

/// On-face diameter as a fraction of the smaller face dimension
pub const SIZE_INSIDE_FACTOR: f64 = 0.95;

/// Off-face diameter as a fraction of the on-face diameter
pub const SIZE_OUTSIDE_FACTOR: f64 = 0.62;

/// Scatter placement: minimum glyph radius used for clearance
pub const MIN_SCATTER_RADIUS: i32 = 12;

/// Scatter placement: minimum gap between face box and glyph
pub const MIN_SCATTER_GAP: i32 = 6;

/// Scatter placement: gap as a fraction of the smaller face dimension
pub const SCATTER_GAP_FACTOR: f64 = 0.12;

/// Scatter placement: margin floor as a fraction of the smaller face dimension
pub const SCATTER_MARGIN_FACTOR: f64 = 0.35;

/// Scatter placement: jitter range along the side, fraction of side length
pub const SCATTER_JITTER: f64 = 0.35;

/// Overlap correction: minimum clearance past the face edge
pub const MIN_PUSH_CLEARANCE: i32 = 8;

/// Bob amplitudes (x, y) in pixels
pub const BOB_AMPLITUDE_X: f64 = 2.0;
pub const BOB_AMPLITUDE_Y: f64 = 1.0;

/// Tether oscillation amplitudes (x, y) in pixels
pub const TETHER_AMPLITUDE_X: f64 = 6.0;
pub const TETHER_AMPLITUDE_Y: f64 = 4.0;

/// Scale applied to the bob while scattered
pub const SCATTER_BOB_SCALE: f64 = 0.12;

/// Default tether easing factor per frame
pub const DEFAULT_TETHER_EASE: f64 = 0.25;

/// Default per-avatar phase speed range (radians per frame)
pub const DEFAULT_FLOAT_SPEED_MIN: f64 = 0.03;
pub const DEFAULT_FLOAT_SPEED_MAX: f64 = 0.10;

/// Default exponential smoothing factor for emotion scores
pub const DEFAULT_SCORE_SMOOTHING_ALPHA: f64 = 0.35;

/// Cartoon blink cycle: frames per cycle and closed frames per cycle
pub const BLINK_PERIOD: u64 = 25;
pub const BLINK_FRAMES: u64 = 3;

/// Blend opacity for glow layers
pub const GLOW_OPACITY: f32 = 0.05;

/// HUD badge defaults
pub const DEFAULT_BADGE_X: i32 = 40;
pub const DEFAULT_BADGE_Y: i32 = 70;
pub const DEFAULT_BADGE_SIZE: u32 = 55;

/// HUD score bar defaults
pub const DEFAULT_BAR_WIDTH: u32 = 180;
pub const DEFAULT_BAR_MAX_PIXELS: u32 = 160;

/// Default blank canvas size for the CLI
pub const DEFAULT_CANVAS_WIDTH: u32 = 1280;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 720;
