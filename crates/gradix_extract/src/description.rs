//! Normalized gradient description handed to the UI and code panel

use gradix_core::{Color, Point};
use serde::{Deserialize, Serialize};

use crate::paint::GradientKind;

/// Gradient endpoints and extent in shape-relative unit coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitBounds {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Extent along the gradient axis
    pub width: f64,
    /// Perpendicular extent, always 1
    pub height: f64,
}

/// Stop with fill opacity folded into its alpha
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedStop {
    pub color: Color,
    pub position: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearDescription {
    /// Rotation of the gradient line in degrees
    #[serde(rename = "angle")]
    pub angle_degrees: f64,
    pub bounds: UnitBounds,
    #[serde(rename = "gradientStops")]
    pub stops: Vec<NormalizedStop>,
}

/// Experimental radial description
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadialDescription {
    /// Center in shape-relative unit coordinates
    pub center: Point,
    pub radius: f64,
    #[serde(rename = "gradientStops")]
    pub stops: Vec<NormalizedStop>,
}

/// Resolution-independent gradient description
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GradientDescription {
    #[serde(rename = "GRADIENT_LINEAR")]
    Linear(LinearDescription),
    #[serde(rename = "GRADIENT_RADIAL")]
    Radial(RadialDescription),
}

impl GradientDescription {
    pub fn kind(&self) -> GradientKind {
        match self {
            GradientDescription::Linear(_) => GradientKind::Linear,
            GradientDescription::Radial(_) => GradientKind::Radial,
        }
    }

    pub fn stops(&self) -> &[NormalizedStop] {
        match self {
            GradientDescription::Linear(linear) => &linear.stops,
            GradientDescription::Radial(radial) => &radial.stops,
        }
    }

    pub fn as_linear(&self) -> Option<&LinearDescription> {
        match self {
            GradientDescription::Linear(linear) => Some(linear),
            GradientDescription::Radial(_) => None,
        }
    }

    pub fn as_radial(&self) -> Option<&RadialDescription> {
        match self {
            GradientDescription::Radial(radial) => Some(radial),
            GradientDescription::Linear(_) => None,
        }
    }

    /// Pretty JSON (2-space indent) as shown in the code panel
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
