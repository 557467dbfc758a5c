//! Tools command: list the cached catalog, optionally refreshing first.

use crate::db::store::SqliteStore;
use crate::engine::router::{Command, Reply};
use crate::engine::TrackerEngine;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the tools command.
#[derive(Debug, Args)]
pub struct ToolsArgs {
    /// Fetch a fresh catalog from the remote store before listing
    #[arg(short, long)]
    refresh: bool,
}

pub async fn cmd(args: ToolsArgs) -> Result<()> {
    let config = Config::read()?;
    let tracker = config.tracker.unwrap_or_default();
    let mut engine = TrackerEngine::new(SqliteStore::new()?, tracker.min_active_seconds)?;

    let command = if args.refresh { Command::RefreshTools } else { Command::GetTools };
    match engine.handle_command(command).await {
        Reply::Tools { tools } => {
            if tools.is_empty() {
                msg_info!(Message::NoToolsCached);
                return Ok(());
            }
            msg_print!(Message::ToolsHeader);
            View::tools(&tools)?;
            Ok(())
        }
        Reply::Error { message } => Err(anyhow::anyhow!(message)),
        other => Err(anyhow::anyhow!("unexpected reply: {:?}", other)),
    }
}
