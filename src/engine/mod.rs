//! The tracking engine: browser activity in, synced usage out.
//!
//! `TrackerEngine` owns every piece of tracking state: credentials, the
//! cached catalog, the open session, pending usage, and the sync log. All
//! events and commands flow through one `&mut self` entry point each, so
//! state transitions are serialized by construction and a sync round can
//! never race a tab switch.
//!
//! The engine is split across sibling modules by concern:
//!
//! - [`events`] and [`router`] define the wire-facing event and command types
//! - [`matcher`] maps visited URLs to catalog tools
//! - [`tracker`] and [`accumulator`] hold the session state machine and the
//!   counted-but-unsynced seconds
//! - [`sync`] talks to the remote store

pub mod accumulator;
pub mod events;
pub mod matcher;
pub mod router;
pub mod sync;
pub mod tracker;

use crate::libs::catalog::ToolCatalog;
use crate::libs::credentials::Credentials;
use crate::libs::kv::KvStore;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::libs::synclog::SyncLog;
use crate::{msg_debug, msg_warning};
use accumulator::UsageAccumulator;
use anyhow::Result;
use chrono::{DateTime, Utc};
use events::{HostEvent, IdleState};
use tracker::{SessionEnd, Tracker};

/// Single-owner tracking state, generic over the persistence backend.
pub struct TrackerEngine<S: KvStore> {
    store: S,
    secret: Secret,
    credentials: Option<Credentials>,
    catalog: ToolCatalog,
    tracker: Tracker,
    accumulator: UsageAccumulator,
    sync_log: SyncLog,
    current_url: Option<String>,
    focused: bool,
    idle: IdleState,
}

impl<S: KvStore> TrackerEngine<S> {
    /// Builds an engine over `store`, restoring persisted state.
    ///
    /// Corrupt state entries degrade to their defaults with a warning, so a
    /// damaged database never prevents startup. The engine assumes focus and
    /// activity until the host says otherwise.
    pub fn new(store: S, min_active_seconds: u64) -> Result<Self> {
        let secret = Secret::new();
        let credentials = Credentials::load(&store, &secret)?;
        let catalog = ToolCatalog::load(&store)?;
        let sync_log = SyncLog::load(&store)?;
        Ok(TrackerEngine {
            store,
            secret,
            credentials,
            catalog,
            tracker: Tracker::new(min_active_seconds),
            accumulator: UsageAccumulator::new(),
            sync_log,
            current_url: None,
            focused: true,
            idle: IdleState::Active,
        })
    }

    pub fn is_connected(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    pub fn sync_log(&self) -> &SyncLog {
        &self.sync_log
    }

    /// Handles an event stamped with the current wall clock.
    pub async fn handle_event(&mut self, event: HostEvent) -> Result<()> {
        self.handle_event_at(event, Utc::now()).await
    }

    /// Handles an event at an explicit instant.
    ///
    /// Browser and idle events update the tracking gates and re-evaluate
    /// which tool, if any, should be tracked. Tick events run the sync and
    /// catalog rounds. A failed catalog refresh keeps the cached catalog and
    /// is not an error; the next tick tries again.
    pub async fn handle_event_at(&mut self, event: HostEvent, now: DateTime<Utc>) -> Result<()> {
        match event {
            HostEvent::TabActivated { url } => {
                self.current_url = Some(url);
                self.retrack(now);
            }
            HostEvent::WindowFocus { focused } => {
                self.focused = focused;
                self.retrack(now);
            }
            HostEvent::IdleState { state } => {
                self.idle = state;
                self.retrack(now);
            }
            HostEvent::SyncTick => self.sync_tick(now).await?,
            HostEvent::CatalogTick => {
                if self.credentials.is_some() {
                    if let Err(e) = self.refresh_catalog(now).await {
                        msg_warning!(Message::CatalogRefreshFailed(e.to_string()));
                    }
                }
            }
        }
        Ok(())
    }

    /// Reconciles the open session with the current gates and URL.
    ///
    /// A tool is tracked only while the window is focused, the user is
    /// active, and the current URL matches a catalog entry. Whatever session
    /// the reconciliation displaces is credited or discarded on the spot.
    /// The remembered URL survives focus loss and idle periods, so returning
    /// to an unchanged tab resumes tracking with a fresh session.
    fn retrack(&mut self, now: DateTime<Utc>) {
        let desired: Option<(String, String)> = if self.focused && !self.idle.is_inactive() {
            self.current_url
                .as_deref()
                .and_then(|url| matcher::matching_tool(&self.catalog.tools, url))
                .map(|tool| (tool.id.clone(), tool.name.clone()))
        } else {
            None
        };

        match desired {
            Some((tool_id, tool_name)) => {
                let switched = self.tracker.session().map(|session| session.tool_id != tool_id).unwrap_or(true);
                if let Some(end) = self.tracker.start(&tool_id, now) {
                    self.credit(end);
                }
                if switched {
                    msg_debug!(Message::TrackingStarted(tool_name));
                }
            }
            None => {
                if let Some(end) = self.tracker.stop(now) {
                    self.credit(end);
                }
            }
        }
    }

    /// Applies the debounce verdict of a closed session.
    fn credit(&mut self, end: SessionEnd) {
        if end.credited {
            msg_debug!(Message::TrackingStopped {
                tool_id: end.tool_id.clone(),
                seconds: end.seconds,
            });
            self.accumulator.add(&end.tool_id, end.seconds);
        } else {
            msg_debug!(Message::TrackingDiscarded {
                tool_id: end.tool_id,
                seconds: end.seconds,
            });
        }
    }

    /// Closes the open session and makes a final best-effort sync.
    ///
    /// Pending usage that still cannot be pushed is lost with the process;
    /// at most one sync interval of credited time is at stake.
    pub async fn shutdown(&mut self) {
        let now = Utc::now();
        if let Some(end) = self.tracker.stop(now) {
            self.credit(end);
        }
        if let Err(e) = self.sync_tick(now).await {
            msg_warning!(Message::SyncFailed(e.to_string()));
        }
    }
}
