//! Gradix host bridge
//!
//! The thin shell between a design tool and the gradient extractor:
//!
//! - [`SelectionProvider`]: where selection snapshots come from
//! - [`HostMessage`] / [`UiMessage`]: the JSON message channel to the panel
//! - [`PluginHost`]: event handling and an async run loop
//! - [`CodeGenerator`]: code panel entries with the gradient as JSON
//! - [`Formatter`]: pretty-printing for the code panel
//!
//! # Example
//!
//! ```rust
//! use gradix_bridge::{HostMessage, PluginHost, StaticSelection, UiMessage};
//! use gradix_extract::{ExtractOptions, SelectionSnapshot};
//!
//! let host = PluginHost::new(
//!     StaticSelection::new(SelectionSnapshot::empty()),
//!     ExtractOptions::default(),
//! );
//!
//! let reply = host.on_ui_message(&UiMessage::CopyGradient);
//! assert!(matches!(reply, Some(HostMessage::Error { .. })));
//! ```

pub mod codegen;
pub mod error;
pub mod format;
pub mod host;
pub mod message;
pub mod provider;

pub use codegen::{CodeGenerator, CodegenResult, DEFAULT_TITLE};
pub use error::{BridgeError, FormatError, Result};
pub use format::{
    format_code, FormatMessage, FormatRequest, FormatResult, Formatter, DEFAULT_PRINT_WIDTH,
    JSON_LANGUAGE,
};
pub use host::{HostEvent, PluginHost};
pub use message::{HostMessage, HostMode, UiMessage};
pub use provider::{SelectionProvider, SharedSelection, StaticSelection};
