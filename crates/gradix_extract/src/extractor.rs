//! Gradient extraction for the current selection
//!
//! Validates the selected shape, recovers gradient geometry through the
//! geometry engine and normalizes everything into shape-relative units.

use gradix_core::{
    extract_linear_params, extract_radial_params, round_to, AffineTransform, Point,
};

use crate::description::{
    GradientDescription, LinearDescription, NormalizedStop, RadialDescription, UnitBounds,
};
use crate::error::{ExtractError, Result};
use crate::options::ExtractOptions;
use crate::paint::{GradientFill, GradientKind, SelectionSnapshot, ShapeBounds};

/// Rotation of the gradient line in shape space, in degrees.
///
/// Measured from the transform's translation to translation plus its first
/// basis column, so it ignores scale.
pub fn gradient_angle_degrees(transform: &AffineTransform) -> f64 {
    let basis = transform.basis_x();
    basis.y.atan2(basis.x).to_degrees()
}

/// Turns a selection snapshot into a [`GradientDescription`]
#[derive(Clone, Debug, Default)]
pub struct GradientExtractor {
    options: ExtractOptions,
}

impl GradientExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract the first gradient fill of the first selected shape.
    pub fn extract(&self, snapshot: &SelectionSnapshot) -> Result<GradientDescription> {
        let node = snapshot
            .first()
            .filter(|node| !node.fills.is_empty())
            .ok_or(ExtractError::NoSelectionOrFills)?;

        let (kind, fill) = node
            .first_gradient_fill()
            .filter(|(_, fill)| fill.gradient_transform.len() > 1)
            .ok_or(ExtractError::NoGradientFill)?;

        let bounds = node.absolute_bounding_box.unwrap_or_default();

        tracing::trace!(
            "Extracting {} from {}",
            kind,
            node.name.as_deref().unwrap_or("<unnamed>")
        );

        self.extract_fill(kind, fill, bounds)
    }

    /// Extract a gradient fill the caller already picked.
    pub fn extract_fill(
        &self,
        kind: GradientKind,
        fill: &GradientFill,
        bounds: ShapeBounds,
    ) -> Result<GradientDescription> {
        let transform = AffineTransform::from_rows(&fill.gradient_transform)?;

        if kind == GradientKind::Radial && !self.options.radial {
            return Err(ExtractError::RadialDisabled);
        }

        if !bounds.is_usable() {
            return Err(ExtractError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }

        if !transform.is_invertible() {
            let determinant = transform.determinant();
            tracing::warn!("Gradient transform is not invertible (det = {})", determinant);
            return Err(ExtractError::DegenerateTransform { determinant });
        }

        let stops = self.normalize_stops(fill);
        let description = match kind {
            GradientKind::Linear => self.linear(&transform, bounds, stops),
            GradientKind::Radial => self.radial(&transform, bounds, stops),
        };

        tracing::debug!(
            kind = %kind,
            stops = description.stops().len(),
            "extracted gradient"
        );

        Ok(description)
    }

    fn round(&self, value: f64) -> f64 {
        round_to(value, self.options.precision)
    }

    fn normalize_stops(&self, fill: &GradientFill) -> Vec<NormalizedStop> {
        fill.gradient_stops
            .iter()
            .map(|stop| NormalizedStop {
                color: stop
                    .color
                    .multiply_alpha(fill.opacity)
                    .rounded(self.options.precision),
                position: self.round(stop.position),
            })
            .collect()
    }

    fn linear(
        &self,
        transform: &AffineTransform,
        bounds: ShapeBounds,
        stops: Vec<NormalizedStop>,
    ) -> GradientDescription {
        let origin = transform.translation_part();
        let basis = transform.basis_x();
        let tip = Point::new(origin.x + basis.x, origin.y + basis.y);

        let params = extract_linear_params(bounds.width, bounds.height, transform);

        GradientDescription::Linear(LinearDescription {
            angle_degrees: self.round(gradient_angle_degrees(transform)),
            bounds: UnitBounds {
                x1: self.round(params.start.x / bounds.width),
                y1: self.round(params.start.y / bounds.height),
                x2: self.round(params.end.x / bounds.width),
                y2: self.round(params.end.y / bounds.height),
                width: self.round(1.0 / origin.distance(tip)),
                height: self.round(1.0),
            },
            stops,
        })
    }

    fn radial(
        &self,
        transform: &AffineTransform,
        bounds: ShapeBounds,
        stops: Vec<NormalizedStop>,
    ) -> GradientDescription {
        let params = extract_radial_params(bounds.width, bounds.height, transform);

        GradientDescription::Radial(RadialDescription {
            center: Point::new(
                self.round(params.center.x / bounds.width),
                self.round(params.center.y / bounds.height),
            ),
            radius: self.round(params.radius),
            stops,
        })
    }
}
