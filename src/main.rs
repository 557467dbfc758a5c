use anyhow::Result;
use tusk::commands::Cli;
use tusk::libs::messages::macros::is_debug_mode;

#[tokio::main]
async fn main() -> Result<()> {
    // In debug mode the message macros route through tracing, so a
    // subscriber has to be installed or that output goes nowhere.
    if is_debug_mode() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tusk=debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Cli::menu().await
}
