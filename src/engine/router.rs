//! Command routing: the request/reply surface of the engine.
//!
//! Commands arrive from the dashboard's extension over the bridge or from
//! CLI subcommands; each produces exactly one reply. They run on the same
//! event loop as tracking events, so a status snapshot always reflects a
//! settled engine.

use super::accumulator::UsageAccumulator;
use super::TrackerEngine;
use crate::libs::catalog::{Tool, ToolCatalog};
use crate::libs::credentials::Credentials;
use crate::libs::kv::KvStore;
use crate::libs::messages::Message;
use crate::libs::synclog::SyncLog;
use crate::{msg_debug, msg_warning};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Requests the engine answers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "command", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    /// Store credentials and fetch the catalog.
    #[serde(rename_all = "camelCase")]
    Connect {
        endpoint_url: String,
        api_key: String,
        access_token: String,
        refresh_token: String,
    },
    /// Drop credentials and wipe local tracking state.
    Disconnect,
    /// Snapshot of connection, catalog, and tracking state.
    GetStatus,
    /// The cached tool catalog, as is.
    GetTools,
    /// Refresh the catalog from the remote store, then return it.
    RefreshTools,
    /// Look for existing tools in a category before adding a new one.
    CheckDuplicate { category: String },
}

/// Answers to [`Command`]s.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "reply", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reply {
    Connected,
    Disconnected,
    #[serde(rename_all = "camelCase")]
    Status {
        connected: bool,
        tool_count: usize,
        tracking: Option<String>,
        pending_tools: usize,
        pending_seconds: u64,
    },
    Tools {
        tools: Vec<Tool>,
    },
    #[serde(rename_all = "camelCase")]
    Duplicate {
        found: bool,
        count: usize,
        least_used: Option<Tool>,
    },
    Error {
        message: String,
    },
}

impl<S: KvStore> TrackerEngine<S> {
    /// Routes one command to its handler and returns the reply.
    pub async fn handle_command(&mut self, command: Command) -> Reply {
        match command {
            Command::Connect {
                endpoint_url,
                api_key,
                access_token,
                refresh_token,
            } => {
                self.connect(Credentials {
                    endpoint_url,
                    api_key,
                    access_token,
                    refresh_token,
                })
                .await
            }
            Command::Disconnect => self.disconnect(),
            Command::GetStatus => Reply::Status {
                connected: self.credentials.is_some(),
                tool_count: self.catalog.len(),
                tracking: self.tracker.session().map(|session| session.tool_id.clone()),
                pending_tools: self.accumulator.len(),
                pending_seconds: self.accumulator.total(),
            },
            Command::GetTools => Reply::Tools {
                tools: self.catalog.tools.clone(),
            },
            Command::RefreshTools => match self.refresh_catalog(Utc::now()).await {
                Ok(()) => Reply::Tools {
                    tools: self.catalog.tools.clone(),
                },
                Err(e) => Reply::Error { message: e.to_string() },
            },
            Command::CheckDuplicate { category } => match self.catalog.least_used_in_category(&category) {
                Some((tool, count)) => Reply::Duplicate {
                    found: true,
                    count,
                    least_used: Some(tool.clone()),
                },
                None => Reply::Duplicate {
                    found: false,
                    count: 0,
                    least_used: None,
                },
            },
        }
    }

    /// Validates and adopts new credentials.
    ///
    /// Rejected credentials change nothing: prior credentials, catalog, and
    /// pending usage all stay as they were. Accepted credentials are
    /// persisted before the catalog fetch, and a failed initial fetch still
    /// counts as connected; the catalog fills in on the next tick.
    async fn connect(&mut self, credentials: Credentials) -> Reply {
        if let Err(e) = credentials.validate() {
            msg_warning!(Message::ConnectRejected(e.to_string()));
            return Reply::Error { message: e.to_string() };
        }
        if let Err(e) = credentials.store(&mut self.store, &self.secret) {
            return Reply::Error { message: e.to_string() };
        }
        self.credentials = Some(credentials);

        if let Err(e) = self.refresh_catalog(Utc::now()).await {
            msg_warning!(Message::CatalogRefreshFailed(e.to_string()));
        }
        msg_debug!(Message::Connected);
        Reply::Connected
    }

    /// Wipes credentials and every piece of local tracking state.
    ///
    /// The open session ends uncredited; a disconnect is not usage. Durable
    /// state is cleared first, and if that fails the engine keeps its
    /// in-memory state so a retry sees the same picture.
    fn disconnect(&mut self) -> Reply {
        if let Err(e) = self.store.clear() {
            return Reply::Error { message: e.to_string() };
        }
        let _ = self.tracker.stop(Utc::now());
        self.credentials = None;
        self.catalog = ToolCatalog::default();
        self.accumulator = UsageAccumulator::new();
        self.sync_log = SyncLog::default();
        msg_debug!(Message::Disconnected);
        Reply::Disconnected
    }
}
