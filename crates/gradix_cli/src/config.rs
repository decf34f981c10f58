//! Gradix configuration file handling
//!
//! Settings live in `gradix.toml`:
//!
//! ```toml
//! [extract]
//! radial = false
//! precision = 5
//!
//! [codegen]
//! title = "Gradient Data"
//!
//! [host]
//! mode = "default"
//! ```

use anyhow::{Context, Result};
use gradix_bridge::{HostMode, DEFAULT_TITLE};
use gradix_extract::ExtractOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE: &str = "gradix.toml";

/// Top-level configuration (gradix.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GradixConfig {
    #[serde(default)]
    pub extract: ExtractOptions,
    #[serde(default)]
    pub codegen: CodegenConfig,
    #[serde(default)]
    pub host: HostConfig,
}

/// Code panel configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct CodegenConfig {
    /// Title of the generated code panel entry
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

/// Host emulation configuration
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HostConfig {
    #[serde(default)]
    pub mode: HostMode,
}

impl GradixConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `gradix.toml` in the
    /// working directory is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => {
                let default_path = PathBuf::from(CONFIG_FILE);
                if default_path.exists() {
                    Self::load_file(&default_path)
                } else {
                    tracing::debug!("No {} found, using defaults", CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid gradix configuration")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize gradix config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_file() {
        let config = GradixConfig::from_toml("").unwrap();
        assert!(!config.extract.radial);
        assert_eq!(config.extract.precision, 5);
        assert_eq!(config.codegen.title, "Gradient Data");
        assert_eq!(config.host.mode, HostMode::Default);
    }

    #[test]
    fn test_partial_sections() {
        let config = GradixConfig::from_toml(
            r#"
            [extract]
            radial = true

            [host]
            mode = "codegen"
            "#,
        )
        .unwrap();

        assert!(config.extract.radial);
        assert_eq!(config.extract.precision, 5);
        assert_eq!(config.host.mode, HostMode::Codegen);
    }

    #[test]
    fn test_out_of_range_precision_rejected() {
        let err = GradixConfig::from_toml("[extract]\nprecision = 400\n").unwrap_err();
        assert!(format!("{:#}", err).contains("out of range"));

        let config = GradixConfig::from_toml("[extract]\nprecision = 15\n").unwrap();
        assert_eq!(config.extract.precision, 15);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = GradixConfig::default();
        config.extract.precision = 3;
        config.codegen.title = "Gradient".to_string();
        fs::write(&path, config.to_toml().unwrap()).unwrap();

        let loaded = GradixConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.extract.precision, 3);
        assert_eq!(loaded.codegen.title, "Gradient");
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GradixConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
