//! Code panel generation

use gradix_extract::{GradientExtractor, SelectionSnapshot};
use serde::{Deserialize, Serialize};

use crate::format::JSON_LANGUAGE;

/// Title of the generated code panel entry
pub const DEFAULT_TITLE: &str = "Gradient Data";

/// One entry in the host's code panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodegenResult {
    pub title: String,
    pub code: String,
    pub language: String,
}

/// Produces code panel entries for a selection
#[derive(Clone, Debug)]
pub struct CodeGenerator {
    extractor: GradientExtractor,
    title: String,
}

impl CodeGenerator {
    pub fn new(extractor: GradientExtractor) -> Self {
        Self {
            extractor,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Generate the code panel for `snapshot`.
    ///
    /// Extraction failures become a JSON object with an `error` field so the
    /// panel always shows why no gradient was produced.
    pub fn generate(&self, snapshot: &SelectionSnapshot) -> Vec<CodegenResult> {
        let code = match self.extractor.extract(snapshot) {
            Ok(description) => description.to_json_pretty(),
            Err(e) => {
                tracing::debug!("Codegen without gradient: {}", e);
                serde_json::to_string_pretty(&serde_json::json!({ "error": e.to_string() }))
            }
        }
        .unwrap_or_else(|e| {
            tracing::error!("Failed to serialize gradient description: {}", e);
            serde_json::json!({ "error": e.to_string() }).to_string()
        });

        vec![CodegenResult {
            title: self.title.clone(),
            code,
            language: JSON_LANGUAGE.to_string(),
        }]
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(GradientExtractor::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradix_core::{AffineTransform, Color};
    use gradix_extract::{ColorStop, Fill, GradientFill, SceneNode, ShapeBounds};

    #[test]
    fn test_generate_linear() {
        let fill = GradientFill::new(
            AffineTransform::IDENTITY.to_rows(),
            vec![ColorStop::new(0.0, Color::RED), ColorStop::new(1.0, Color::BLUE)],
        );
        let snapshot = SelectionSnapshot::single(SceneNode::new(
            ShapeBounds::new(40.0, 20.0),
            vec![Fill::LinearGradient(fill)],
        ));

        let results = CodeGenerator::default().generate(&snapshot);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Gradient Data");
        assert_eq!(results[0].language, "JSON");
        assert!(results[0].code.starts_with("{\n  \"type\": \"GRADIENT_LINEAR\",\n  \"angle\": 0.0,"));

        let parsed: serde_json::Value = serde_json::from_str(&results[0].code).unwrap();
        assert_eq!(parsed["bounds"]["x2"], 1.0);
    }

    #[test]
    fn test_generate_reports_error() {
        let results = CodeGenerator::default()
            .with_title("Gradient")
            .generate(&SelectionSnapshot::empty());

        assert_eq!(results[0].title, "Gradient");
        assert_eq!(
            results[0].code,
            "{\n  \"error\": \"No selection or the selected shape has no fills\"\n}"
        );
    }
}
