//! Duplicate check command.
//!
//! Answers "do I already pay for something like this?" before a new tool is
//! added: reports how many cached tools share a category and which of them
//! is used least. Works entirely from the cached catalog, so it needs no
//! connection.

use crate::db::store::SqliteStore;
use crate::engine::router::{Command, Reply};
use crate::engine::TrackerEngine;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the duplicates command.
#[derive(Debug, Args)]
pub struct DuplicatesArgs {
    /// Category to check, matched case-insensitively
    category: String,
}

pub async fn cmd(args: DuplicatesArgs) -> Result<()> {
    let config = Config::read()?;
    let tracker = config.tracker.unwrap_or_default();
    let mut engine = TrackerEngine::new(SqliteStore::new()?, tracker.min_active_seconds)?;

    let reply = engine
        .handle_command(Command::CheckDuplicate {
            category: args.category.clone(),
        })
        .await;

    match reply {
        Reply::Duplicate {
            found: true,
            count,
            least_used: Some(tool),
        } => {
            msg_warning!(Message::DuplicateFound {
                name: tool.name.clone(),
                times_used: tool.times_used,
                count,
            });
            View::tools(&[tool])?;
            Ok(())
        }
        Reply::Duplicate { .. } => {
            msg_success!(Message::NoDuplicateInCategory(args.category));
            Ok(())
        }
        Reply::Error { message } => Err(anyhow::anyhow!(message)),
        other => Err(anyhow::anyhow!("unexpected reply: {:?}", other)),
    }
}
