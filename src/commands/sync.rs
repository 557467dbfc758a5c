//! Manual catalog refresh command.
//!
//! Usage pushes happen inside the watch process on their own timer; what a
//! cold process can usefully force is a catalog refresh, which this does.

use crate::db::store::SqliteStore;
use crate::engine::router::{Command, Reply};
use crate::engine::TrackerEngine;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let tracker = config.tracker.unwrap_or_default();
    let mut engine = TrackerEngine::new(SqliteStore::new()?, tracker.min_active_seconds)?;

    if !engine.is_connected() {
        msg_bail_anyhow!(Message::NotConnected);
    }

    match engine.handle_command(Command::RefreshTools).await {
        Reply::Tools { tools } => {
            msg_success!(Message::CatalogRefreshed(tools.len()));
            Ok(())
        }
        Reply::Error { message } => Err(anyhow::anyhow!(message)),
        other => Err(anyhow::anyhow!("unexpected reply: {:?}", other)),
    }
}
