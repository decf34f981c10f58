//! Error types for gradix_bridge

use thiserror::Error;

/// Errors raised by the host shell (never by extraction itself)
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The UI side of the channel went away
    #[error("Message channel closed")]
    ChannelClosed,
}

/// Errors raised by the code formatter
#[derive(Error, Debug)]
pub enum FormatError {
    /// Input is not valid for its declared language
    #[error("Failed to parse {language} code: {source}")]
    Parse {
        language: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for gradix_bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;
