//! Sync log command: recent push attempts and their outcomes.

use crate::db::store::SqliteStore;
use crate::libs::messages::Message;
use crate::libs::synclog::{SyncLog, SyncLogEntry};
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the log command.
#[derive(Debug, Args)]
pub struct LogArgs {
    /// Number of entries to show, most recent first
    #[arg(short, long, default_value_t = 20)]
    last: usize,
}

pub fn cmd(args: LogArgs) -> Result<()> {
    let store = SqliteStore::new()?;
    let log = SyncLog::load(&store)?;

    if log.is_empty() {
        msg_info!(Message::SyncLogEmpty);
        return Ok(());
    }

    msg_print!(Message::SyncLogHeader);
    let entries: Vec<&SyncLogEntry> = log.entries().take(args.last).collect();
    View::sync_log(&entries)?;
    Ok(())
}
