//! Utility functions for pixel arithmetic.

pub mod safe_cast;

/// Integer division rounding toward negative infinity.
///
/// Layout offsets such as `size / 2` are computed on non-negative values in
/// practice; this keeps them well defined for negative inputs as well.
#[must_use]
pub fn floor_div(value: i32, divisor: i32) -> i32 {
    value.div_euclid(divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_div() {
        assert_eq!(floor_div(7, 2), 3);
        assert_eq!(floor_div(-7, 2), -4);
        assert_eq!(floor_div(0, 5), 0);
    }
}
