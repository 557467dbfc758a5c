//! Tool catalog types and the locally cached copy of the remote catalog.
//!
//! Tools are the things being tracked: each one names a product, its URL and
//! a category, and carries its own usage history. The engine keeps the full
//! catalog cached in the state store so domain matching and duplicate checks
//! work offline and survive restarts.

use crate::libs::kv::KvStore;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State store key holding the serialized catalog.
pub const CATALOG_KEY: &str = "catalog";

/// A tracked tool as the remote store represents it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub url: String,
    pub category: String,
    #[serde(default)]
    pub times_used: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub usage_history: Vec<UsageEntry>,
}

/// One recorded stretch of usage inside a tool's history.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsageEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub duration_seconds: u64,
    pub source: UsageSource,
}

/// Where a usage entry came from.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum UsageSource {
    Manual,
    Timer,
    Extension,
    DailyPrompt,
}

impl UsageEntry {
    /// Builds an automatic tracking entry stamped at `now`.
    ///
    /// The millisecond timestamp doubles as the entry id. Entries for one
    /// tool are at least a sync interval apart, so ids stay unique within
    /// the history they land in.
    pub fn tracked(now: DateTime<Utc>, duration_seconds: u64) -> Self {
        UsageEntry {
            id: now.timestamp_millis().to_string(),
            timestamp: now,
            duration_seconds,
            source: UsageSource::Extension,
        }
    }
}

/// Locally cached snapshot of the remote tool catalog.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolCatalog {
    pub tools: Vec<Tool>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl ToolCatalog {
    /// Loads the cached catalog from the state store.
    ///
    /// A missing entry yields an empty catalog. A corrupt entry does too,
    /// after a warning, so the next refresh can repopulate it.
    pub fn load<S: KvStore>(store: &S) -> Result<ToolCatalog> {
        let Some(json) = store.get(CATALOG_KEY)? else {
            return Ok(ToolCatalog::default());
        };
        match serde_json::from_str(&json) {
            Ok(catalog) => Ok(catalog),
            Err(e) => {
                msg_warning!(Message::StateDecodeFailed(e.to_string()));
                Ok(ToolCatalog::default())
            }
        }
    }

    /// Persists the catalog to the state store.
    pub fn store<S: KvStore>(&self, store: &mut S) -> Result<()> {
        store.set(CATALOG_KEY, &serde_json::to_string(self)?)
    }

    /// Replaces the cached tools with a freshly fetched list.
    pub fn replace(&mut self, tools: Vec<Tool>) {
        self.tools = tools;
        self.fetched_at = Some(Utc::now());
    }

    pub fn get(&self, tool_id: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.id == tool_id)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Finds the least-used tool in a category, case-insensitively, along
    /// with how many cached tools share that category.
    pub fn least_used_in_category(&self, category: &str) -> Option<(&Tool, usize)> {
        let wanted = category.to_lowercase();
        let mut in_category: Vec<&Tool> = self.tools.iter().filter(|tool| tool.category.to_lowercase() == wanted).collect();
        let count = in_category.len();
        in_category.sort_by_key(|tool| tool.times_used);
        in_category.first().map(|tool| (*tool, count))
    }
}
