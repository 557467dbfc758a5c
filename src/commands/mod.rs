pub mod connect;
pub mod disconnect;
pub mod duplicates;
pub mod init;
pub mod log;
pub mod status;
pub mod sync;
pub mod tools;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Connect to a remote tool store")]
    Connect(connect::ConnectArgs),
    #[command(about = "Disconnect and clear local tracking state")]
    Disconnect,
    #[command(about = "Run the tracking engine against the browser bridge")]
    Watch,
    #[command(about = "Show connection and catalog status")]
    Status,
    #[command(about = "List cached tools")]
    Tools(tools::ToolsArgs),
    #[command(about = "Check a category for existing tools before adding one")]
    Duplicates(duplicates::DuplicatesArgs),
    #[command(about = "Refresh the tool catalog now")]
    Sync,
    #[command(about = "Show recent sync attempts")]
    Log(log::LogArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Connect(args) => connect::cmd(args).await,
            Commands::Disconnect => disconnect::cmd().await,
            Commands::Watch => watch::cmd().await,
            Commands::Status => status::cmd().await,
            Commands::Tools(args) => tools::cmd(args).await,
            Commands::Duplicates(args) => duplicates::cmd(args).await,
            Commands::Sync => sync::cmd().await,
            Commands::Log(args) => log::cmd(args),
        }
    }
}
