//! Sync rounds: pushing counted usage and refreshing the catalog.
//!
//! All remote store traffic the engine initiates lives here. Tools are
//! pushed one at a time so a single bad row cannot poison the round, and
//! every outcome is recorded in the sync log.

use super::TrackerEngine;
use crate::api::{ApiError, AuthClient, StoreClient, UsagePatch};
use crate::libs::catalog::UsageEntry;
use crate::libs::credentials::Credentials;
use crate::libs::kv::KvStore;
use crate::libs::messages::Message;
use crate::libs::synclog::{SyncLogEntry, SyncOutcome};
use crate::{msg_debug, msg_error_anyhow, msg_warning};
use anyhow::Result;
use chrono::{DateTime, Utc};

/// Seconds before JWT expiry at which a proactive token refresh kicks in.
const TOKEN_EXPIRY_MARGIN: i64 = 60;

/// How one tool's push ended, for requeue bookkeeping.
enum PushError {
    /// The tool row is gone remotely; its seconds must be discarded.
    ToolMissing,
    /// Transient failure; the seconds go back in the pending pool.
    Failed(anyhow::Error),
}

impl<S: KvStore> TrackerEngine<S> {
    /// Runs one sync round at `now`.
    ///
    /// Without credentials the round is a no-op; nothing leaves the process
    /// until the user connects. Otherwise the open session is checkpointed
    /// so long sessions sync incrementally, then every pending tool is
    /// pushed in id order. An empty pending pool means zero requests.
    pub(crate) async fn sync_tick(&mut self, now: DateTime<Utc>) -> Result<()> {
        if self.credentials.is_none() {
            return Ok(());
        }
        if let Some(end) = self.tracker.checkpoint(now) {
            self.credit(end);
        }
        if self.accumulator.is_empty() {
            return Ok(());
        }

        for (tool_id, seconds) in self.accumulator.take() {
            match self.push_usage(&tool_id, seconds, now).await {
                Ok(tool_name) => {
                    msg_debug!(Message::UsageSynced {
                        tool_name: tool_name.clone(),
                        seconds,
                    });
                    self.sync_log.push(SyncLogEntry {
                        timestamp: now,
                        tool_id,
                        tool_name: Some(tool_name),
                        seconds,
                        outcome: SyncOutcome::Synced,
                        error: None,
                    });
                }
                Err(PushError::ToolMissing) => {
                    msg_warning!(Message::UsageDropped {
                        tool_id: tool_id.clone(),
                        seconds,
                    });
                    self.sync_log.push(SyncLogEntry {
                        timestamp: now,
                        tool_id,
                        tool_name: None,
                        seconds,
                        outcome: SyncOutcome::Dropped,
                        error: None,
                    });
                }
                Err(PushError::Failed(e)) => {
                    // nothing was written remotely, so the seconds are safe to retry
                    self.accumulator.add(&tool_id, seconds);
                    msg_warning!(Message::UsageRequeued {
                        tool_id: tool_id.clone(),
                        seconds,
                        error: e.to_string(),
                    });
                    self.sync_log.push(SyncLogEntry {
                        timestamp: now,
                        tool_id,
                        tool_name: None,
                        seconds,
                        outcome: SyncOutcome::Requeued,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        self.sync_log.store(&mut self.store)?;
        Ok(())
    }

    /// Pushes one tool's seconds, refreshing the token once on a 401.
    async fn push_usage(&mut self, tool_id: &str, seconds: u64, now: DateTime<Utc>) -> Result<String, PushError> {
        let credentials = match &self.credentials {
            Some(credentials) => credentials.clone(),
            None => return Err(PushError::Failed(msg_error_anyhow!(Message::NotConnected))),
        };

        match Self::push_usage_once(&credentials, tool_id, seconds, now).await {
            Ok(tool_name) => Ok(tool_name),
            Err(ApiError::ToolNotFound(_)) => Err(PushError::ToolMissing),
            Err(ApiError::Unauthorized) => {
                let refreshed = match self.refresh_credentials().await {
                    Ok(refreshed) => refreshed,
                    Err(e) => return Err(PushError::Failed(e)),
                };
                match Self::push_usage_once(&refreshed, tool_id, seconds, now).await {
                    Ok(tool_name) => Ok(tool_name),
                    Err(ApiError::ToolNotFound(_)) => Err(PushError::ToolMissing),
                    Err(e) => Err(PushError::Failed(e.into())),
                }
            }
            Err(e) => Err(PushError::Failed(e.into())),
        }
    }

    /// The fetch-increment-patch cycle for a single tool.
    ///
    /// Fetching the current row first keeps concurrent edits from other
    /// devices: the patch carries the row's own counters plus this round's
    /// entry, not a locally invented state.
    async fn push_usage_once(credentials: &Credentials, tool_id: &str, seconds: u64, now: DateTime<Utc>) -> Result<String, ApiError> {
        let client = StoreClient::new(credentials);
        let mut tool = client.fetch_tool(tool_id).await?;

        tool.times_used += 1;
        tool.last_used_at = Some(now);
        tool.usage_history.push(UsageEntry::tracked(now, seconds));

        let patch = UsagePatch {
            times_used: tool.times_used,
            last_used_at: tool.last_used_at,
            usage_history: tool.usage_history,
            updated_at: now,
        };
        client.update_usage(tool_id, &patch).await?;
        Ok(tool.name)
    }

    /// Mints a fresh access token and persists the updated credentials.
    ///
    /// Stored state changes only on success, so a failed refresh leaves the
    /// previous tokens in place for the next attempt. Deployments that omit
    /// the refresh token from the response keep the old one.
    pub(crate) async fn refresh_credentials(&mut self) -> Result<Credentials> {
        let current = match &self.credentials {
            Some(credentials) => credentials.clone(),
            None => return Err(msg_error_anyhow!(Message::NotConnected)),
        };

        let pair = AuthClient::new(&current).refresh(&current.refresh_token).await?;
        let refreshed = Credentials {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token.unwrap_or_else(|| current.refresh_token.clone()),
            ..current
        };
        refreshed.store(&mut self.store, &self.secret)?;
        self.credentials = Some(refreshed.clone());
        msg_debug!(Message::TokenRefreshed);
        Ok(refreshed)
    }

    /// Replaces the cached catalog with a fresh fetch.
    ///
    /// On failure the stale cache stays in place and the error propagates to
    /// the caller. On success the current URL is re-evaluated, since the new
    /// catalog may start or end a session.
    pub(crate) async fn refresh_catalog(&mut self, now: DateTime<Utc>) -> Result<()> {
        let Some(mut credentials) = self.credentials.clone() else {
            return Err(msg_error_anyhow!(Message::NotConnected));
        };

        // mint a fresh token ahead of expiry rather than eating a 401
        if credentials.expires_within(TOKEN_EXPIRY_MARGIN) {
            match self.refresh_credentials().await {
                Ok(refreshed) => credentials = refreshed,
                Err(e) => msg_debug!(Message::TokenRefreshFailed(e.to_string())),
            }
        }

        let tools = match StoreClient::new(&credentials).fetch_tools().await {
            Ok(tools) => tools,
            Err(ApiError::Unauthorized) => {
                let refreshed = self.refresh_credentials().await?;
                StoreClient::new(&refreshed).fetch_tools().await?
            }
            Err(e) => return Err(e.into()),
        };

        self.catalog.replace(tools);
        self.catalog.store(&mut self.store)?;
        msg_debug!(Message::CatalogRefreshed(self.catalog.len()));
        self.retrack(now);
        Ok(())
    }
}
