//! Status command: connection, catalog, and sync state at a glance.
//!
//! A cold process can only report durable state. Live tracking figures
//! (open session, pending seconds) exist inside the running watch process
//! and are reached through the bridge instead, so this command ends with a
//! hint to that effect.

use crate::db::store::SqliteStore;
use crate::engine::router::{Command, Reply};
use crate::engine::TrackerEngine;
use crate::libs::config::Config;
use crate::libs::credentials::CREDENTIALS_KEY;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let tracker = config.tracker.unwrap_or_default();

    let store = SqliteStore::new()?;
    let credentials_updated = store.last_updated(CREDENTIALS_KEY)?;
    let mut engine = TrackerEngine::new(store, tracker.min_active_seconds)?;

    let reply = engine.handle_command(Command::GetStatus).await;
    let Reply::Status { connected, tool_count, .. } = reply else {
        return Err(anyhow::anyhow!("unexpected reply: {:?}", reply));
    };

    msg_print!(Message::StatusHeader);

    let mut rows = vec![
        ("Connected".to_string(), if connected { "yes" } else { "no" }.to_string()),
        ("Cached tools".to_string(), tool_count.to_string()),
    ];
    if let Some(fetched_at) = engine.catalog().fetched_at {
        rows.push(("Catalog refreshed".to_string(), fetched_at.format("%Y-%m-%d %H:%M:%S").to_string()));
    }
    if let Some(updated_at) = credentials_updated {
        rows.push(("Credentials updated".to_string(), updated_at.format("%Y-%m-%d %H:%M:%S").to_string()));
    }
    if let Some(entry) = engine.sync_log().entries().next() {
        rows.push((
            "Last sync".to_string(),
            format!("{} ({:?})", entry.timestamp.format("%Y-%m-%d %H:%M:%S"), entry.outcome),
        ));
    }
    View::status(&rows)?;

    msg_info!(Message::StatusHintWatch);
    Ok(())
}
