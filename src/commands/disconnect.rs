//! Disconnect command: drop credentials and wipe local tracking state.

use crate::db::store::SqliteStore;
use crate::engine::router::{Command, Reply};
use crate::engine::TrackerEngine;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let tracker = config.tracker.unwrap_or_default();
    let mut engine = TrackerEngine::new(SqliteStore::new()?, tracker.min_active_seconds)?;

    if !engine.is_connected() {
        msg_info!(Message::NotConnected);
        return Ok(());
    }

    match engine.handle_command(Command::Disconnect).await {
        Reply::Disconnected => {
            msg_success!(Message::Disconnected);
            Ok(())
        }
        Reply::Error { message } => Err(anyhow::anyhow!(message)),
        other => Err(anyhow::anyhow!("unexpected reply: {:?}", other)),
    }
}
