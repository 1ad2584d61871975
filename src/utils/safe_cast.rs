//! Safe casting utilities for pixel coordinates and color channels

/// Convert u32 to i32, saturating at i32::MAX
#[must_use]
pub fn u32_to_i32_saturating(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Truncate toward zero into i32 pixels, saturating at the i32 range
///
/// Non-finite input maps to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // `as` saturates for f64 -> i32
pub fn trunc_px(value: f64) -> i32 {
    if value.is_finite() {
        value.trunc() as i32
    } else {
        0
    }
}

/// Round half away from zero into i32 pixels, saturating at the i32 range
///
/// Non-finite input maps to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_px(value: f64) -> i32 {
    if value.is_finite() {
        value.round() as i32
    } else {
        0
    }
}

/// Clamp and convert f64 to i32 for pixel coordinates
#[must_use]
#[allow(clippy::cast_possible_truncation)] // Clamping ensures safe truncation
pub fn f64_to_i32_clamp(value: f64, min: i32, max: i32) -> i32 {
    // Ensure min <= max
    let (min, max) = if min <= max { (min, max) } else { (max, min) };

    if !value.is_finite() {
        return min;
    }

    let clamped = value.clamp(f64::from(min), f64::from(max));
    (clamped as i32).clamp(min, max)
}

/// Clamp and convert a floating-point channel value to u8
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn channel_u8(value: f64) -> u8 {
    if value.is_finite() {
        value.clamp(0.0, 255.0) as u8
    } else {
        0
    }
}
