//! Gradix Gradient Extractor
//!
//! Reads the selected shape's fills from a [`SelectionSnapshot`], picks the
//! first linear or radial gradient, and produces a resolution-independent
//! [`GradientDescription`]:
//!
//! - angle of the gradient line in degrees
//! - endpoints (or center/radius) as fractions of the shape's size
//! - color stops with the fill opacity folded into their alpha
//!
//! Every failure is an [`ExtractError`] value; nothing panics.
//!
//! # Example
//!
//! ```rust
//! use gradix_extract::{
//!     ColorStop, Fill, GradientExtractor, GradientFill, SceneNode, SelectionSnapshot,
//!     ShapeBounds,
//! };
//! use gradix_core::Color;
//!
//! let fill = GradientFill::new(
//!     vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]],
//!     vec![ColorStop::new(0.0, Color::RED), ColorStop::new(1.0, Color::BLUE)],
//! );
//! let node = SceneNode::new(ShapeBounds::new(200.0, 100.0), vec![Fill::LinearGradient(fill)]);
//!
//! let description = GradientExtractor::default()
//!     .extract(&SelectionSnapshot::single(node))
//!     .unwrap();
//! assert_eq!(description.as_linear().unwrap().bounds.y1, 0.5);
//! ```

pub mod description;
pub mod error;
pub mod extractor;
pub mod options;
pub mod paint;

pub use description::{
    GradientDescription, LinearDescription, NormalizedStop, RadialDescription, UnitBounds,
};
pub use error::{ExtractError, Result};
pub use extractor::{gradient_angle_degrees, GradientExtractor};
pub use options::ExtractOptions;
pub use paint::{
    ColorStop, Fill, GradientFill, GradientKind, SceneNode, SelectionSnapshot, ShapeBounds,
    SolidFill,
};
