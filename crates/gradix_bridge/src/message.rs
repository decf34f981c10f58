//! Host ↔ UI messages
//!
//! Both directions are JSON objects discriminated by a `type` field.

use std::fmt;
use std::str::FromStr;

use gradix_extract::{ExtractError, GradientDescription};
use serde::{Deserialize, Serialize};

/// Context the host is running the plugin in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostMode {
    /// Regular design mode with a visible panel
    #[default]
    Default,
    /// Developer handoff mode
    Dev,
    /// Inspect panel
    Inspect,
    /// Code panel only; no UI is shown
    Codegen,
}

impl HostMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostMode::Default => "default",
            HostMode::Dev => "dev",
            HostMode::Inspect => "inspect",
            HostMode::Codegen => "codegen",
        }
    }

    /// Whether a panel is shown (and therefore receives messages)
    pub fn has_ui(&self) -> bool {
        !matches!(self, HostMode::Codegen)
    }
}

impl fmt::Display for HostMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(HostMode::Default),
            "dev" => Ok(HostMode::Dev),
            "inspect" => Ok(HostMode::Inspect),
            "codegen" => Ok(HostMode::Codegen),
            other => Err(format!(
                "Invalid mode '{}'. Valid modes: default, dev, inspect, codegen",
                other
            )),
        }
    }
}

/// Message sent from the UI panel to the host
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiMessage {
    /// Ask for the current gradient so the panel can copy it
    CopyGradient,
    /// Any message type this host does not understand
    #[serde(other)]
    Unknown,
}

/// Message sent from the host to the UI panel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum HostMessage {
    /// Announces the host mode once at startup
    Mode { mode: HostMode },
    /// Gradient of the new selection
    GradientData {
        #[serde(rename = "gradientData")]
        gradient_data: GradientDescription,
    },
    /// Reply to [`UiMessage::CopyGradient`]
    CopyGradientData {
        #[serde(rename = "gradientData")]
        gradient_data: GradientDescription,
    },
    /// Human-readable reason no gradient could be produced
    Error { message: String },
}

impl HostMessage {
    pub fn error(err: &ExtractError) -> Self {
        HostMessage::Error {
            message: err.to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
