//! Plugin host
//!
//! Wires a [`SelectionProvider`] to the extractor and answers host events.
//! Each event is processed to completion before the next one is read, so
//! with rapid selection changes the last message sent reflects the last
//! selection.

use gradix_extract::{ExtractOptions, GradientDescription, GradientExtractor};
use tokio::sync::{mpsc, oneshot};

use crate::codegen::{CodeGenerator, CodegenResult};
use crate::error::{BridgeError, Result};
use crate::message::{HostMessage, HostMode, UiMessage};
use crate::provider::SelectionProvider;

/// Event delivered to a running host
#[derive(Debug)]
pub enum HostEvent {
    /// Message posted by the UI panel
    Ui(UiMessage),
    /// The host's selection changed
    SelectionChanged,
    /// The code panel asks for its entries
    Generate(oneshot::Sender<Vec<CodegenResult>>),
    /// Acknowledged once every earlier event has been handled
    Flush(oneshot::Sender<()>),
}

/// Plugin host over a selection provider
pub struct PluginHost<P> {
    provider: P,
    extractor: GradientExtractor,
    codegen: CodeGenerator,
}

impl<P: SelectionProvider> PluginHost<P> {
    pub fn new(provider: P, options: ExtractOptions) -> Self {
        let extractor = GradientExtractor::new(options);
        Self {
            provider,
            codegen: CodeGenerator::new(extractor.clone()),
            extractor,
        }
    }

    /// Set the code panel entry title
    pub fn with_codegen_title(mut self, title: impl Into<String>) -> Self {
        self.codegen = self.codegen.with_title(title);
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn mode(&self) -> HostMode {
        self.provider.mode()
    }

    /// Messages posted when the plugin starts
    pub fn start(&self) -> Vec<HostMessage> {
        let mode = self.mode();
        tracing::info!("Gradient host starting in {} mode", mode);

        if mode.has_ui() {
            vec![HostMessage::Mode { mode }]
        } else {
            Vec::new()
        }
    }

    /// Extract the gradient of the current selection
    pub fn current_gradient(&self) -> gradix_extract::Result<GradientDescription> {
        self.extractor.extract(&self.provider.snapshot())
    }

    /// Message for the panel after a selection change (none without a panel)
    pub fn on_selection_change(&self) -> Option<HostMessage> {
        if !self.mode().has_ui() {
            return None;
        }

        Some(match self.current_gradient() {
            Ok(gradient_data) => HostMessage::GradientData { gradient_data },
            Err(e) => HostMessage::error(&e),
        })
    }

    /// Reply to a message from the panel (none without a panel)
    pub fn on_ui_message(&self, message: &UiMessage) -> Option<HostMessage> {
        if !self.mode().has_ui() {
            return None;
        }

        match message {
            UiMessage::CopyGradient => Some(match self.current_gradient() {
                Ok(gradient_data) => HostMessage::CopyGradientData { gradient_data },
                Err(e) => HostMessage::error(&e),
            }),
            UiMessage::Unknown => {
                tracing::debug!("Ignoring unknown UI message");
                None
            }
        }
    }

    /// Code panel entries for the current selection
    pub async fn generate(&self) -> Vec<CodegenResult> {
        self.codegen.generate(&self.provider.snapshot())
    }

    /// Process one event, returning the message to post to the panel
    pub fn handle(&self, event: HostEvent) -> Option<HostMessage> {
        match event {
            HostEvent::Ui(message) => self.on_ui_message(&message),
            HostEvent::SelectionChanged => self.on_selection_change(),
            HostEvent::Generate(reply) => {
                let results = self.codegen.generate(&self.provider.snapshot());
                if reply.send(results).is_err() {
                    tracing::debug!("Codegen requester went away");
                }
                None
            }
            HostEvent::Flush(ack) => {
                if ack.send(()).is_err() {
                    tracing::debug!("Flush requester went away");
                }
                None
            }
        }
    }

    /// Run until the event channel closes.
    ///
    /// Fails with [`BridgeError::ChannelClosed`] if the panel side of
    /// `outbound` is dropped first.
    pub async fn run(
        self,
        mut events: mpsc::Receiver<HostEvent>,
        outbound: mpsc::Sender<HostMessage>,
    ) -> Result<()> {
        for message in self.start() {
            outbound
                .send(message)
                .await
                .map_err(|_| BridgeError::ChannelClosed)?;
        }

        while let Some(event) = events.recv().await {
            tracing::trace!("Host event: {:?}", event);
            if let Some(message) = self.handle(event) {
                outbound
                    .send(message)
                    .await
                    .map_err(|_| BridgeError::ChannelClosed)?;
            }
        }

        tracing::info!("Gradient host stopped");
        Ok(())
    }
}
