//! Bounded log of recent sync attempts.
//!
//! Every push outcome lands here so `tusk log` can show what happened to
//! counted usage. The log keeps the most recent entries first and never
//! grows past capacity.

use crate::libs::kv::KvStore;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// State store key holding the serialized log.
pub const SYNC_LOG_KEY: &str = "sync_log";

/// Maximum number of entries retained.
pub const SYNC_LOG_CAPACITY: usize = 100;

/// One recorded push attempt.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SyncLogEntry {
    pub timestamp: DateTime<Utc>,
    pub tool_id: String,
    pub tool_name: Option<String>,
    pub seconds: u64,
    pub outcome: SyncOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// What became of the pushed seconds.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SyncOutcome {
    /// Accepted by the remote store.
    Synced,
    /// Push failed, seconds returned to the pending pool.
    Requeued,
    /// Tool no longer exists remotely, seconds discarded.
    Dropped,
}

/// Most-recent-first ring of sync attempts.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SyncLog {
    entries: VecDeque<SyncLogEntry>,
}

impl SyncLog {
    pub fn load<S: KvStore>(store: &S) -> Result<SyncLog> {
        let Some(json) = store.get(SYNC_LOG_KEY)? else {
            return Ok(SyncLog::default());
        };
        match serde_json::from_str(&json) {
            Ok(log) => Ok(log),
            Err(e) => {
                msg_warning!(Message::StateDecodeFailed(e.to_string()));
                Ok(SyncLog::default())
            }
        }
    }

    pub fn store<S: KvStore>(&self, store: &mut S) -> Result<()> {
        store.set(SYNC_LOG_KEY, &serde_json::to_string(self)?)
    }

    /// Records an attempt, evicting the oldest entry once at capacity.
    pub fn push(&mut self, entry: SyncLogEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(SYNC_LOG_CAPACITY);
    }

    /// Entries ordered most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &SyncLogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
