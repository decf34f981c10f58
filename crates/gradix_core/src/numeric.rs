//! Fixed-precision rounding for emitted values

/// Decimal digits kept in every emitted number
pub const DEFAULT_PRECISION: u32 = 5;

/// Largest precision `round_to` honours; an f64 carries no more
/// significant decimal digits than this.
pub const MAX_PRECISION: u32 = 15;

/// Round `value` to `digits` decimal places, half away from zero.
///
/// Suppresses floating-point noise so that output is stable across
/// platforms. Negative zero collapses to zero. `digits` above
/// [`MAX_PRECISION`] are treated as `MAX_PRECISION`.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits.min(MAX_PRECISION) as i32);
    (value * factor).round() / factor + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_default_precision() {
        assert_eq!(round_to(0.123456789, DEFAULT_PRECISION), 0.12346);
        assert_eq!(round_to(1.0 / 3.0, DEFAULT_PRECISION), 0.33333);
        assert_eq!(round_to(2.0 / 3.0, DEFAULT_PRECISION), 0.66667);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(0.125, 2), 0.13);
    }

    #[test]
    fn test_negative_zero_collapses() {
        let r = round_to(-0.000001, 5);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_precision_is_capped() {
        assert_eq!(round_to(0.5, 400), 0.5);
        assert_eq!(round_to(0.5, u32::MAX), 0.5);
        assert_eq!(round_to(1.0 / 3.0, 400), round_to(1.0 / 3.0, MAX_PRECISION));
        assert!(round_to(123.456, 400).is_finite());
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(round_to(f64::NAN, 5).is_nan());
        assert_eq!(round_to(f64::INFINITY, 5), f64::INFINITY);
    }
}
