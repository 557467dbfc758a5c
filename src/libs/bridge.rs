//! Newline-delimited JSON bridge to the browser extension host.
//!
//! The extension's native messaging host writes one JSON object per line on
//! stdin and reads replies from stdout. Events are fire-and-forget; commands
//! carry an `id` the reply echoes back so the host can correlate them. EOF
//! on stdin means the host went away and the watcher should shut down.

use crate::engine::events::HostEvent;
use crate::engine::router::{Command, Reply};
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Deserialize, Debug)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Inbound {
    Event {
        #[serde(flatten)]
        event: HostEvent,
    },
    Command {
        id: u64,
        #[serde(flatten)]
        command: Command,
    },
}

#[derive(Serialize)]
struct Outbound<'a> {
    id: u64,
    #[serde(flatten)]
    reply: &'a Reply,
}

/// A decoded line from the host, ready for the event loop.
#[derive(Debug, PartialEq)]
pub enum BridgeInput {
    Event(HostEvent),
    Command { id: u64, command: Command },
}

/// Decodes one bridge line.
pub fn decode_line(line: &str) -> serde_json::Result<BridgeInput> {
    Ok(match serde_json::from_str::<Inbound>(line)? {
        Inbound::Event { event } => BridgeInput::Event(event),
        Inbound::Command { id, command } => BridgeInput::Command { id, command },
    })
}

/// Encodes one reply line for the given command id.
pub fn encode_reply(id: u64, reply: &Reply) -> serde_json::Result<String> {
    serde_json::to_string(&Outbound { id, reply })
}

/// Reads bridge lines from stdin and forwards them to the event loop.
///
/// Malformed lines are logged and skipped; a broken host must not take the
/// tracker down with it. The task ends on EOF or a read error, which closes
/// the channel and lets the watch loop begin its shutdown.
pub fn spawn_reader(tx: mpsc::Sender<BridgeInput>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match decode_line(line) {
                        Ok(input) => {
                            if tx.send(input).await.is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            msg_warning!(Message::BridgeDecodeFailed(e.to_string()));
                        }
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    msg_warning!(Message::BridgeDecodeFailed(e.to_string()));
                    break;
                }
            }
        }
    })
}

/// Writes one reply line to stdout, flushed so the host sees it immediately.
pub fn write_reply(id: u64, reply: &Reply) -> Result<()> {
    let line = encode_reply(id, reply)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    stdout.flush()?;
    Ok(())
}
