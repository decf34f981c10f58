//! Host paint model
//!
//! The host reports fills as loosely-typed JSON objects discriminated by a
//! `type` field. Only the gradient variants are interpreted; every other
//! paint type collapses into [`Fill::Other`] without inspecting its fields.

use std::fmt;

use gradix_core::Color;
use serde::{Deserialize, Serialize};

fn full_opacity() -> f64 {
    1.0
}

fn visible() -> bool {
    true
}

/// Color anchored at a position along the gradient
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: Color,
    /// Position along the gradient (0.0 to 1.0)
    pub position: f64,
}

impl ColorStop {
    pub fn new(position: f64, color: Color) -> Self {
        Self { color, position }
    }
}

/// Gradient paint as stored on a shape
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientFill {
    /// Raw transform rows; validated by the extractor
    #[serde(default)]
    pub gradient_transform: Vec<Vec<f64>>,
    /// Color stops in host order
    #[serde(default)]
    pub gradient_stops: Vec<ColorStop>,
    #[serde(default = "full_opacity")]
    pub opacity: f64,
    #[serde(default = "visible")]
    pub visible: bool,
}

impl GradientFill {
    pub fn new(transform: Vec<Vec<f64>>, stops: Vec<ColorStop>) -> Self {
        Self {
            gradient_transform: transform,
            gradient_stops: stops,
            opacity: 1.0,
            visible: true,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Solid paint
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolidFill {
    pub color: Color,
    #[serde(default = "full_opacity")]
    pub opacity: f64,
}

/// A single paint in a shape's fill list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Fill {
    #[serde(rename = "SOLID")]
    Solid(SolidFill),
    #[serde(rename = "GRADIENT_LINEAR")]
    LinearGradient(GradientFill),
    #[serde(rename = "GRADIENT_RADIAL")]
    RadialGradient(GradientFill),
    /// Angular, diamond, image, video, and anything the host adds later
    #[serde(other)]
    Other,
}

impl Fill {
    /// The gradient carried by this fill, if it is a linear or radial gradient
    pub fn gradient(&self) -> Option<(GradientKind, &GradientFill)> {
        match self {
            Fill::LinearGradient(fill) => Some((GradientKind::Linear, fill)),
            Fill::RadialGradient(fill) => Some((GradientKind::Radial, fill)),
            Fill::Solid(_) | Fill::Other => None,
        }
    }
}

/// Gradient type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradientKind {
    #[serde(rename = "GRADIENT_LINEAR")]
    Linear,
    #[serde(rename = "GRADIENT_RADIAL")]
    Radial,
}

impl GradientKind {
    /// Host type tag
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientKind::Linear => "GRADIENT_LINEAR",
            GradientKind::Radial => "GRADIENT_RADIAL",
        }
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis-aligned bounding box of a shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeBounds {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ShapeBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Finite, strictly positive width and height
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// A selected node as reported by the host
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub fills: Vec<Fill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<ShapeBounds>,
}

impl SceneNode {
    pub fn new(bounds: ShapeBounds, fills: Vec<Fill>) -> Self {
        Self {
            id: None,
            name: None,
            fills,
            absolute_bounding_box: Some(bounds),
        }
    }

    /// First fill of linear or radial type, in fill-list order
    pub fn first_gradient_fill(&self) -> Option<(GradientKind, &GradientFill)> {
        self.fills.iter().find_map(Fill::gradient)
    }
}

/// The host's current selection, captured once per request
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    #[serde(default)]
    pub selection: Vec<SceneNode>,
}

impl SelectionSnapshot {
    pub fn new(selection: Vec<SceneNode>) -> Self {
        Self { selection }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(node: SceneNode) -> Self {
        Self::new(vec![node])
    }

    /// The node the extractor works on
    pub fn first(&self) -> Option<&SceneNode> {
        self.selection.first()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_variants_deserialize() {
        let fills: Vec<Fill> = serde_json::from_str(
            r#"[
                {"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0}},
                {"type": "GRADIENT_ANGULAR", "gradientTransform": [[1,0,0],[0,1,0]]},
                {"type": "IMAGE", "scaleMode": "FILL", "imageHash": "abc"},
                {
                    "type": "GRADIENT_LINEAR",
                    "gradientTransform": [[1,0,0],[0,1,0]],
                    "gradientStops": [{"color": {"r":0,"g":0,"b":1,"a":1}, "position": 0}],
                    "blendMode": "NORMAL"
                }
            ]"#,
        )
        .unwrap();

        assert!(matches!(fills[0], Fill::Solid(SolidFill { opacity, .. }) if opacity == 1.0));
        assert_eq!(fills[1], Fill::Other);
        assert_eq!(fills[2], Fill::Other);
        match &fills[3] {
            Fill::LinearGradient(fill) => {
                assert_eq!(fill.gradient_transform.len(), 2);
                assert_eq!(fill.gradient_stops.len(), 1);
                assert_eq!(fill.opacity, 1.0);
                assert!(fill.visible);
            }
            other => panic!("unexpected fill {:?}", other),
        }
    }

    #[test]
    fn test_first_gradient_fill_skips_other_paints() {
        let node = SceneNode::new(
            ShapeBounds::new(10.0, 10.0),
            vec![
                Fill::Solid(SolidFill {
                    color: Color::RED,
                    opacity: 1.0,
                }),
                Fill::Other,
                Fill::RadialGradient(GradientFill::new(Vec::new(), Vec::new())),
                Fill::LinearGradient(GradientFill::new(Vec::new(), Vec::new())),
            ],
        );

        let (kind, _) = node.first_gradient_fill().unwrap();
        assert_eq!(kind, GradientKind::Radial);
    }

    #[test]
    fn test_node_deserialize_camel_case() {
        let node: SceneNode = serde_json::from_str(
            r#"{"id": "1:2", "absoluteBoundingBox": {"x": 5, "y": 6, "width": 100, "height": 50}}"#,
        )
        .unwrap();

        assert_eq!(node.id.as_deref(), Some("1:2"));
        assert!(node.fills.is_empty());
        let bounds = node.absolute_bounding_box.unwrap();
        assert_eq!((bounds.width, bounds.height), (100.0, 50.0));
        assert!(bounds.is_usable());
    }

    #[test]
    fn test_bounds_usable() {
        assert!(!ShapeBounds::new(0.0, 10.0).is_usable());
        assert!(!ShapeBounds::new(10.0, f64::NAN).is_usable());
        assert!(ShapeBounds::new(0.5, 10.0).is_usable());
    }
}
