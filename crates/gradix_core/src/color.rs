//! RGBA colors as reported by the host (channels in `0.0..=1.0`)

use serde::{Deserialize, Serialize};

use crate::numeric::round_to;

fn opaque() -> f64 {
    1.0
}

/// RGBA color
///
/// Solid paints from the host carry RGB only, so a missing alpha channel
/// deserializes as fully opaque.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.a = alpha;
        self
    }

    /// Scale alpha by a fill-level opacity; RGB is left untouched.
    ///
    /// The stop's own alpha and the fill opacity multiply.
    pub fn multiply_alpha(self, opacity: f64) -> Self {
        self.with_alpha(self.a * opacity)
    }

    /// Round every channel to `digits` decimal places
    pub fn rounded(self, digits: u32) -> Self {
        Self {
            r: round_to(self.r, digits),
            g: round_to(self.g, digits),
            b: round_to(self.b, digits),
            a: round_to(self.a, digits),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
