//! # Tusk - Tool Usage Synchronization Kit
//!
//! The native companion engine for an LTD dashboard. It watches real browser
//! usage of the paid tools in your catalog and keeps the usage numbers in
//! sync with the dashboard's remote store.
//!
//! ## Features
//!
//! - **Usage Tracking**: Sessions open and close from browser tab, focus, and idle events
//! - **Idle Detection**: Input monitoring ends sessions when the user walks away
//! - **Tool Catalog**: Locally cached tool list with periodic refresh
//! - **Remote Sync**: Batched usage pushes with automatic access token renewal
//! - **Duplicate Check**: Category lookup before buying yet another tool
//! - **Extension Bridge**: Newline-delimited JSON protocol over stdio
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tusk::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod engine;
pub mod libs;
