//! Points and 2x3 affine transforms
//!
//! Gradient transforms arrive from the host as a list of rows `[a, b, c]`
//! describing `x' = a*x + b*y + c`. Only the first two rows carry
//! information; the homogeneous row `[0, 0, 1]` is implied.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Point
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise scale, used to move between unit and pixel space
    pub fn scale(self, sx: f64, sy: f64) -> Point {
        Point::new(self.x * sx, self.y * sy)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Affine transform
// ─────────────────────────────────────────────────────────────────────────────

/// Errors raised when building a transform from loosely-typed host rows
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Fewer than two or more than three rows
    #[error("expected 2 or 3 transform rows, found {0}")]
    RowCount(usize),

    /// A row without exactly three entries
    #[error("transform row {row} has {len} entries, expected 3")]
    RowLength { row: usize, len: usize },
}

/// 2D affine transformation stored as two matrix rows
///
/// | m00  m01  m02 |
/// | m10  m11  m12 |
/// |  0    0    1  |
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct AffineTransform {
    pub rows: [[f64; 3]; 2],
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    };

    /// The implied third row of every transform
    pub const HOMOGENEOUS_ROW: [f64; 3] = [0.0, 0.0, 1.0];

    pub const fn new(row0: [f64; 3], row1: [f64; 3]) -> Self {
        Self { rows: [row0, row1] }
    }

    /// Build a transform from raw host rows.
    ///
    /// Two rows are padded with the homogeneous row; a supplied third row
    /// is accepted and ignored.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, TransformError> {
        if rows.len() < 2 || rows.len() > 3 {
            return Err(TransformError::RowCount(rows.len()));
        }

        let mut out = [[0.0; 3]; 2];
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != 3 {
                return Err(TransformError::RowLength {
                    row: index,
                    len: row.len(),
                });
            }
            if let Some(slot) = out.get_mut(index) {
                slot.copy_from_slice(row);
            }
        }

        Ok(Self { rows: out })
    }

    pub fn translation(x: f64, y: f64) -> Self {
        Self::new([1.0, 0.0, x], [0.0, 1.0, y])
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new([sx, 0.0, 0.0], [0.0, sy, 0.0])
    }

    /// Counter-clockwise rotation (in a y-down space: clockwise on screen)
    pub fn rotation(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([c, -s, 0.0], [s, c, 0.0])
    }

    /// Apply the transform to a point
    pub fn apply(&self, point: Point) -> Point {
        let [[m00, m01, m02], [m10, m11, m12]] = self.rows;
        Point::new(
            point.x * m00 + point.y * m01 + m02,
            point.x * m10 + point.y * m11 + m12,
        )
    }

    /// Determinant of the 2x2 linear part
    pub fn determinant(&self) -> f64 {
        let [[m00, m01, _], [m10, m11, _]] = self.rows;
        m00 * m11 - m01 * m10
    }

    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();
        det != 0.0 && det.is_finite()
    }

    /// Closed-form inverse.
    ///
    /// Total: a zero determinant yields NaN/infinite entries. Use
    /// [`AffineTransform::try_inverse`] to reject such transforms.
    pub fn inverse(&self) -> AffineTransform {
        let [[m00, m01, m02], [m10, m11, m12]] = self.rows;
        let det = self.determinant();
        Self::new(
            [m11 / det, -m01 / det, (m01 * m12 - m02 * m11) / det],
            [-m10 / det, m00 / det, (m02 * m10 - m00 * m12) / det],
        )
    }

    pub fn try_inverse(&self) -> Option<AffineTransform> {
        self.is_invertible().then(|| self.inverse())
    }

    /// Concatenate this transform with another (self * other)
    /// The resulting transform first applies `other`, then `self`.
    pub fn then(&self, other: &AffineTransform) -> AffineTransform {
        let [[a00, a01, a02], [a10, a11, a12]] = self.rows;
        let [[b00, b01, b02], [b10, b11, b12]] = other.rows;

        Self::new(
            [
                a00 * b00 + a01 * b10,
                a00 * b01 + a01 * b11,
                a00 * b02 + a01 * b12 + a02,
            ],
            [
                a10 * b00 + a11 * b10,
                a10 * b01 + a11 * b11,
                a10 * b02 + a11 * b12 + a12,
            ],
        )
    }

    /// Translation column `(m02, m12)`
    pub fn translation_part(&self) -> Point {
        Point::new(self.rows[0][2], self.rows[1][2])
    }

    /// First basis column `(m00, m10)`
    pub fn basis_x(&self) -> Point {
        Point::new(self.rows[0][0], self.rows[1][0])
    }

    /// Full 3x3 matrix with the homogeneous row appended
    pub fn to_homogeneous(&self) -> [[f64; 3]; 3] {
        [self.rows[0], self.rows[1], Self::HOMOGENEOUS_ROW]
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(|row| row.to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for AffineTransform {
    type Error = TransformError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<AffineTransform> for Vec<Vec<f64>> {
    fn from(transform: AffineTransform) -> Self {
        transform.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-5;

    fn assert_point_eq(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_apply_matrix() {
        let t = AffineTransform::new([2.0, 3.0, 5.0], [7.0, 11.0, 13.0]);
        let p = t.apply(Point::new(1.0, 2.0));
        assert_eq!(p, Point::new(1.0 * 2.0 + 2.0 * 3.0 + 5.0, 7.0 + 22.0 + 13.0));
    }

    #[test]
    fn test_inverse_round_trip() {
        let transforms = [
            AffineTransform::new([2.0, 0.5, 10.0], [-0.3, 1.5, -4.0]),
            AffineTransform::rotation(0.7).then(&AffineTransform::scale(3.0, 0.25)),
            AffineTransform::translation(-12.5, 40.0),
            AffineTransform::new([0.0, 1.0, 0.0], [-1.0, 0.0, 1.0]),
        ];
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.5),
            Point::new(-37.25, 120.0),
        ];

        for t in &transforms {
            let inv = t.inverse();
            for &p in &points {
                assert_point_eq(inv.apply(t.apply(p)), p);
                assert_point_eq(t.apply(inv.apply(p)), p);
            }
        }
    }

    #[test]
    fn test_inverse_translation_column() {
        let t = AffineTransform::new([0.0, -1.0, 1.0], [1.0, 0.0, 0.0]);
        let inv = t.inverse();
        assert_eq!(inv.rows[0], [0.0, 1.0, 0.0]);
        assert_eq!(inv.rows[1], [-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_degenerate_inverse_is_non_finite() {
        let t = AffineTransform::new([1.0, 2.0, 0.0], [2.0, 4.0, 0.0]);
        assert_eq!(t.determinant(), 0.0);
        assert!(!t.is_invertible());
        assert!(t.try_inverse().is_none());
        assert!(t.inverse().rows.iter().flatten().any(|v| !v.is_finite()));
    }

    #[test]
    fn test_from_rows() {
        let two = AffineTransform::from_rows(&[vec![1.0, 0.0, 2.0], vec![0.0, 1.0, 3.0]]);
        assert_eq!(two, Ok(AffineTransform::translation(2.0, 3.0)));

        let three = AffineTransform::from_rows(&[
            [1.0, 0.0, 2.0],
            [0.0, 1.0, 3.0],
            [0.0, 0.0, 1.0],
        ]);
        assert_eq!(three, Ok(AffineTransform::translation(2.0, 3.0)));

        assert_eq!(
            AffineTransform::from_rows(&[vec![1.0, 0.0, 0.0]]),
            Err(TransformError::RowCount(1))
        );
        assert_eq!(
            AffineTransform::from_rows(&[vec![1.0, 0.0, 0.0], vec![0.0, 1.0]]),
            Err(TransformError::RowLength { row: 1, len: 2 })
        );
    }

    #[test]
    fn test_homogeneous_padding() {
        let t = AffineTransform::new([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]);
        assert_eq!(t.to_homogeneous()[2], [0.0, 0.0, 1.0]);
        assert_eq!(t.basis_x(), Point::new(1.0, 4.0));
        assert_eq!(t.translation_part(), Point::new(3.0, 6.0));
    }

    #[test]
    fn test_serde_rows() {
        let t: AffineTransform = serde_json::from_str("[[1,0,0.5],[0,2,0]]").unwrap();
        assert_eq!(t, AffineTransform::new([1.0, 0.0, 0.5], [0.0, 2.0, 0.0]));
        assert!(serde_json::from_str::<AffineTransform>("[[1,0,0]]").is_err());

        let json = serde_json::to_string(&AffineTransform::IDENTITY).unwrap();
        assert_eq!(json, "[[1.0,0.0,0.0],[0.0,1.0,0.0]]");
    }
}
