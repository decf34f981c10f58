//! Extraction error types

use gradix_core::TransformError;
use thiserror::Error;

/// Reasons a selection does not yield a gradient description
///
/// All of these are reported to the caller as messages; none is fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// Nothing selected, or the selected shape has no fills
    #[error("No selection or the selected shape has no fills")]
    NoSelectionOrFills,

    /// No linear or radial gradient with a usable transform
    #[error("No gradient fill found on the selected shape")]
    NoGradientFill,

    /// Gradient transform rows are malformed
    #[error("Invalid gradient transform: {0}")]
    InvalidTransform(#[from] TransformError),

    /// Gradient transform cannot be inverted
    #[error("Degenerate gradient transform (determinant {determinant})")]
    DegenerateTransform { determinant: f64 },

    /// Shape has no bounding box or a zero-area one
    #[error("Selected shape has unusable bounds ({width} x {height})")]
    InvalidBounds { width: f64, height: f64 },

    /// Radial gradient found while radial extraction is switched off
    #[error("Radial gradients are not enabled")]
    RadialDisabled,
}

/// Result type for extraction
pub type Result<T> = std::result::Result<T, ExtractError>;
