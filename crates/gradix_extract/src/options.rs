//! Extraction options

use gradix_core::{DEFAULT_PRECISION, MAX_PRECISION};
use serde::{Deserialize, Deserializer, Serialize};

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

fn deserialize_precision<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let digits = u32::deserialize(deserializer)?;
    if digits > MAX_PRECISION {
        return Err(serde::de::Error::custom(format!(
            "precision {} is out of range (0..={})",
            digits, MAX_PRECISION
        )));
    }
    Ok(digits)
}

/// Tunables for [`GradientExtractor`](crate::GradientExtractor)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Extract radial gradients (experimental, off by default)
    #[serde(default)]
    pub radial: bool,
    /// Decimal digits kept in every emitted number, at most [`MAX_PRECISION`]
    #[serde(
        default = "default_precision",
        deserialize_with = "deserialize_precision"
    )]
    pub precision: u32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            radial: false,
            precision: default_precision(),
        }
    }
}

impl ExtractOptions {
    /// Enable or disable radial gradient extraction.
    pub fn with_radial(mut self, enabled: bool) -> Self {
        self.radial = enabled;
        self
    }

    /// Set the rounding precision, capped at [`MAX_PRECISION`].
    pub fn with_precision(mut self, digits: u32) -> Self {
        self.precision = digits.min(MAX_PRECISION);
        self
    }
}
