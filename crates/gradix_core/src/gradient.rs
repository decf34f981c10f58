//! Gradient geometry recovered from a host gradient transform
//!
//! The host describes a gradient as a canonical unit gradient plus a
//! transform between unit gradient space and normalized shape space. In
//! unit gradient space a linear gradient runs from `(0, 0.5)` to
//! `(1, 0.5)` and a radial gradient is a disc of radius `0.5` centered on
//! `(0.5, 0.5)`. Mapping those canonical points through the inverse of the
//! transform and scaling by the shape size gives pixel-space geometry.

use serde::{Deserialize, Serialize};

use crate::geometry::{AffineTransform, Point};

/// Start of the canonical linear gradient line
pub const UNIT_LINEAR_START: Point = Point::new(0.0, 0.5);
/// End of the canonical linear gradient line
pub const UNIT_LINEAR_END: Point = Point::new(1.0, 0.5);
/// Center of the canonical radial gradient disc
pub const UNIT_RADIAL_CENTER: Point = Point::new(0.5, 0.5);

/// Linear gradient endpoints in shape pixel space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearParams {
    pub start: Point,
    pub end: Point,
}

/// Radial gradient center (shape pixel space) and radius
///
/// `radius` is a ratio independent of the shape's pixel size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadialParams {
    pub center: Point,
    pub radius: f64,
}

/// Recover linear gradient endpoints from a gradient transform.
///
/// A non-invertible transform yields non-finite endpoints.
pub fn extract_linear_params(
    shape_width: f64,
    shape_height: f64,
    transform: &AffineTransform,
) -> LinearParams {
    let inverse = transform.inverse();

    LinearParams {
        start: inverse
            .apply(UNIT_LINEAR_START)
            .scale(shape_width, shape_height),
        end: inverse
            .apply(UNIT_LINEAR_END)
            .scale(shape_width, shape_height),
    }
}

/// Recover radial gradient center and radius from a gradient transform.
///
/// The radius comes from the forward transform's scale along its first
/// basis vector, halved for the unit disc's diameter of one.
pub fn extract_radial_params(
    shape_width: f64,
    shape_height: f64,
    transform: &AffineTransform,
) -> RadialParams {
    let inverse = transform.inverse();
    let basis = transform.basis_x();

    RadialParams {
        center: inverse
            .apply(UNIT_RADIAL_CENTER)
            .scale(shape_width, shape_height),
        radius: 0.5 / basis.x.hypot(basis.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identity_linear() {
        let params = extract_linear_params(200.0, 100.0, &AffineTransform::IDENTITY);
        assert_eq!(params.start, Point::new(0.0, 50.0));
        assert_eq!(params.end, Point::new(200.0, 50.0));
    }

    #[test]
    fn test_vertical_linear() {
        // Gradient axis along +y in shape space
        let t = AffineTransform::new([0.0, -1.0, 1.0], [1.0, 0.0, 0.0]);
        let params = extract_linear_params(100.0, 200.0, &t);

        assert!(close(params.start.x, 50.0) && close(params.start.y, 200.0));
        assert!(close(params.end.x, 50.0) && close(params.end.y, 0.0));
    }

    #[test]
    fn test_scaled_linear_covers_half() {
        // Gradient compressed into the left half of the shape
        let t = AffineTransform::scale(2.0, 1.0);
        let params = extract_linear_params(100.0, 100.0, &t);

        assert!(close(params.start.x, 0.0));
        assert!(close(params.end.x, 50.0));
        assert!(close(params.end.y, 50.0));
    }

    #[test]
    fn test_identity_radial() {
        let params = extract_radial_params(80.0, 40.0, &AffineTransform::IDENTITY);
        assert_eq!(params.center, Point::new(40.0, 20.0));
        assert_eq!(params.radius, 0.5);
    }

    #[test]
    fn test_scaled_radial() {
        let t = AffineTransform::scale(2.0, 2.0).then(&AffineTransform::translation(-0.25, -0.25));
        let params = extract_radial_params(100.0, 100.0, &t);

        assert!(close(params.radius, 0.25));
        assert!(close(params.center.x, 50.0));
        assert!(close(params.center.y, 50.0));
    }

    #[test]
    fn test_degenerate_linear_is_non_finite() {
        let t = AffineTransform::new([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
        let params = extract_linear_params(10.0, 10.0, &t);
        assert!(!params.start.x.is_finite());
    }
}
