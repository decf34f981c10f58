//! Session replay
//!
//! Feeds a newline-delimited stream of host events through a running
//! [`PluginHost`] and prints everything the host posts, one JSON object per
//! line:
//!
//! ```text
//! {"event":"select","selection":[{"absoluteBoundingBox":{...},"fills":[...]}]}
//! {"event":"message","message":{"type":"copy-gradient"}}
//! {"event":"generate"}
//! ```

use anyhow::{Context, Result};
use gradix_bridge::{
    CodegenResult, HostEvent, HostMessage, HostMode, PluginHost, SharedSelection, UiMessage,
};
use gradix_extract::{ExtractOptions, SceneNode, SelectionSnapshot};
use serde::Deserialize;
use std::io::Write;
use tokio::sync::{mpsc, oneshot};

/// One line of a session file
#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum SessionEvent {
    /// Replace the selection (triggers a selection change)
    Select {
        #[serde(default)]
        selection: Vec<SceneNode>,
    },
    /// Message from the panel
    Message { message: UiMessage },
    /// Code panel request
    Generate,
}

/// Parse a session file, skipping blank lines and `#` comments
pub fn parse_events(input: &str) -> Result<Vec<SessionEvent>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("Invalid session event on line {}", index + 1))
        })
        .collect()
}

/// Replay `events` and write every outbound message to `out`
pub async fn replay<W: Write>(
    events: Vec<SessionEvent>,
    options: ExtractOptions,
    mode: HostMode,
    codegen_title: &str,
    out: &mut W,
) -> Result<()> {
    let selection = SharedSelection::new(mode);
    let host =
        PluginHost::new(selection.clone(), options).with_codegen_title(codegen_title.to_string());

    let (event_tx, event_rx) = mpsc::channel(32);
    let (message_tx, mut message_rx) = mpsc::channel(32);
    let task = tokio::spawn(host.run(event_rx, message_tx));

    // Panel messages from `start()`
    settle(&event_tx, &mut message_rx, out).await?;

    for event in events {
        match event {
            SessionEvent::Select { selection: nodes } => {
                tracing::debug!("Selecting {} node(s)", nodes.len());
                selection.set(SelectionSnapshot::new(nodes));
                send(&event_tx, HostEvent::SelectionChanged).await?;

                // The host reads the shared slot, so settle before replacing it again
                settle(&event_tx, &mut message_rx, out).await?;
            }
            SessionEvent::Message { message } => {
                send(&event_tx, HostEvent::Ui(message)).await?;
                settle(&event_tx, &mut message_rx, out).await?;
            }
            SessionEvent::Generate => {
                let (reply_tx, reply_rx) = oneshot::channel();
                send(&event_tx, HostEvent::Generate(reply_tx)).await?;
                let results = reply_rx.await.context("Host stopped before replying")?;
                write_codegen(&results, out)?;
            }
        }
    }

    drop(event_tx);
    task.await.context("Host task panicked")??;
    drain(&mut message_rx, out)?;

    Ok(())
}

/// Wait until the host has handled every queued event, writing its
/// messages as they arrive so the outbound channel never fills up.
async fn settle<W: Write>(
    events: &mpsc::Sender<HostEvent>,
    messages: &mut mpsc::Receiver<HostMessage>,
    out: &mut W,
) -> Result<()> {
    let (ack_tx, mut ack_rx) = oneshot::channel();
    send(events, HostEvent::Flush(ack_tx)).await?;

    loop {
        tokio::select! {
            ack = &mut ack_rx => {
                ack.context("Host stopped before acknowledging")?;
                break;
            }
            Some(message) = messages.recv() => {
                writeln!(out, "{}", message.to_json()?)?;
            }
        }
    }

    // Posted before the ack, so already queued
    drain(messages, out)
}

async fn send(events: &mpsc::Sender<HostEvent>, event: HostEvent) -> Result<()> {
    events
        .send(event)
        .await
        .map_err(|_| anyhow::anyhow!("Host stopped accepting events"))
}

fn drain<W: Write>(messages: &mut mpsc::Receiver<HostMessage>, out: &mut W) -> Result<()> {
    while let Ok(message) = messages.try_recv() {
        writeln!(out, "{}", message.to_json()?)?;
    }
    Ok(())
}

fn write_codegen<W: Write>(results: &[CodegenResult], out: &mut W) -> Result<()> {
    for result in results {
        writeln!(out, "{}", serde_json::to_string(result)?)?;
    }
    Ok(())
}
