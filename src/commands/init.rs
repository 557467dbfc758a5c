//! Application configuration initialization command.
//!
//! Provides an interactive setup wizard that guides users through
//! configuring tusk for first-time use: tracking thresholds and sync
//! cadence. Remote store credentials are handled separately by
//! `tusk connect`.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write default settings without prompting
    #[arg(short, long)]
    defaults: bool,
}

/// Executes the initialization command.
///
/// Runs the interactive wizard, or writes a default configuration when
/// `--defaults` is given (useful for provisioning scripts).
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.defaults {
        Config::default().save()?;
        msg_success!(Message::ConfigSaved);
        return Ok(());
    }

    // Run interactive configuration wizard
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
