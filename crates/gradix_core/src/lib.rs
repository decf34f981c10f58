//! Gradix Geometry Engine
//!
//! Pure numeric building blocks for turning a design tool's gradient
//! transform back into human-meaningful gradient geometry:
//!
//! - **Affine transforms**: 2x3 matrices with point application and
//!   closed-form inversion
//! - **Gradient parameters**: linear endpoints and radial center/radius
//!   recovered from a transform
//! - **Colors**: RGBA values with fill-opacity alpha multiplication
//! - **Rounding**: fixed-precision rounding for stable output
//!
//! # Example
//!
//! ```rust
//! use gradix_core::{extract_linear_params, AffineTransform, Point};
//!
//! let params = extract_linear_params(100.0, 50.0, &AffineTransform::IDENTITY);
//! assert_eq!(params.start, Point::new(0.0, 25.0));
//! assert_eq!(params.end, Point::new(100.0, 25.0));
//! ```

pub mod color;
pub mod geometry;
pub mod gradient;
pub mod numeric;

pub use color::Color;
pub use geometry::{AffineTransform, Point, TransformError};
pub use gradient::{
    extract_linear_params, extract_radial_params, LinearParams, RadialParams,
    UNIT_LINEAR_END, UNIT_LINEAR_START, UNIT_RADIAL_CENTER,
};
pub use numeric::{round_to, DEFAULT_PRECISION, MAX_PRECISION};
