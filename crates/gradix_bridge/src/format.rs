//! Code panel formatter
//!
//! The UI re-formats code it receives before display. Only JSON is
//! understood; any other language has no formatted result.

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Language tag of the code produced by this plugin
pub const JSON_LANGUAGE: &str = "JSON";

/// Print width the panel asks for when none is given
pub const DEFAULT_PRINT_WIDTH: usize = 50;

fn default_print_width() -> usize {
    DEFAULT_PRINT_WIDTH
}

/// Pretty-print `code` written in `language`.
///
/// Returns `Ok(None)` for languages without a formatter.
pub fn format_code(language: &str, code: &str) -> Result<Option<String>, FormatError> {
    match language {
        JSON_LANGUAGE => {
            let value: serde_json::Value =
                serde_json::from_str(code).map_err(|source| FormatError::Parse {
                    language: language.to_string(),
                    source,
                })?;
            serde_json::to_string_pretty(&value)
                .map(Some)
                .map_err(|source| FormatError::Parse {
                    language: language.to_string(),
                    source,
                })
        }
        _ => Ok(None),
    }
}

/// Request to format a piece of code
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatRequest {
    pub id: u64,
    pub language: String,
    pub code: String,
    /// Accepted for compatibility; JSON output ignores it
    #[serde(default = "default_print_width")]
    pub print_width: usize,
}

/// Formatted code, or `None` when the language is unsupported or the
/// input did not parse
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatResult {
    pub id: u64,
    pub result: Option<String>,
}

/// Formatter channel messages
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormatMessage {
    Format(FormatRequest),
    FormatResult(FormatResult),
}

/// Answers [`FormatMessage::Format`] requests
#[derive(Clone, Copy, Debug, Default)]
pub struct Formatter;

impl Formatter {
    /// Handle one formatter message, returning the reply if it was a request
    pub fn handle(&self, message: FormatMessage) -> Option<FormatMessage> {
        match message {
            FormatMessage::Format(request) => Some(FormatMessage::FormatResult(self.format(&request))),
            FormatMessage::FormatResult(_) => None,
        }
    }

    pub fn format(&self, request: &FormatRequest) -> FormatResult {
        let result = match format_code(&request.language, &request.code) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Format request {} failed: {}", request.id, e);
                None
            }
        };

        FormatResult {
            id: request.id,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_json() {
        assert_eq!(
            format_code("JSON", r#"{"a":1}"#).unwrap(),
            Some("{\n  \"a\": 1\n}".to_string())
        );
    }

    #[test]
    fn test_format_unknown_language() {
        assert_eq!(format_code("CSS", "a{color:red}").unwrap(), None);
    }

    #[test]
    fn test_format_invalid_json() {
        assert!(matches!(
            format_code("JSON", "{not json"),
            Err(FormatError::Parse { .. })
        ));
    }

    #[test]
    fn test_formatter_messages() {
        let request: FormatMessage = serde_json::from_str(
            r#"{"type":"FORMAT","id":7,"language":"JSON","code":"[1,2]"}"#,
        )
        .unwrap();

        let reply = Formatter.handle(request).unwrap();
        assert_eq!(
            reply,
            FormatMessage::FormatResult(FormatResult {
                id: 7,
                result: Some("[\n  1,\n  2\n]".to_string()),
            })
        );

        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["type"], "FORMAT_RESULT");
        assert!(Formatter.handle(reply).is_none());
    }
}
