//! Remote store connection command.
//!
//! Collects the endpoint URL, API key, and token pair, then runs the same
//! connect path the browser bridge uses: validate, persist encrypted, fetch
//! the catalog. Values missing from the command line are prompted for, with
//! secrets read without echo.

use crate::db::store::SqliteStore;
use crate::engine::router::{Command, Reply};
use crate::engine::TrackerEngine;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

/// Command-line arguments for the connect command.
#[derive(Debug, Args)]
pub struct ConnectArgs {
    /// Remote store URL
    #[arg(long)]
    url: Option<String>,

    /// Project API key
    #[arg(long)]
    api_key: Option<String>,

    /// Access token (JWT)
    #[arg(long)]
    access_token: Option<String>,

    /// Refresh token
    #[arg(long)]
    refresh_token: Option<String>,
}

/// Executes the connect command.
pub async fn cmd(args: ConnectArgs) -> Result<()> {
    let endpoint_url = match args.url {
        Some(url) => url,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEndpointUrl.to_string())
            .interact_text()?,
    };
    let api_key = match args.api_key {
        Some(key) => key,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiKey.to_string())
            .interact()?,
    };
    let access_token = match args.access_token {
        Some(token) => token,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAccessToken.to_string())
            .interact()?,
    };
    let refresh_token = match args.refresh_token {
        Some(token) => token,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRefreshToken.to_string())
            .interact()?,
    };

    let config = Config::read()?;
    let tracker = config.tracker.unwrap_or_default();
    let mut engine = TrackerEngine::new(SqliteStore::new()?, tracker.min_active_seconds)?;

    let reply = engine
        .handle_command(Command::Connect {
            endpoint_url,
            api_key,
            access_token,
            refresh_token,
        })
        .await;

    match reply {
        Reply::Connected => {
            msg_success!(Message::Connected);
            Ok(())
        }
        Reply::Error { message } => Err(anyhow::anyhow!(message)),
        other => Err(anyhow::anyhow!("unexpected reply: {:?}", other)),
    }
}
