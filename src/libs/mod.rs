//! Core library modules for the tusk application.
//!
//! Serves as the main entry point for all tusk library components, providing
//! a centralized access point to the application's core functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Domain Types**: Tool catalog, credentials, sync log
//! - **Host Integration**: Browser bridge, input-based idle detection
//! - **User Interface**: Console table rendering, message formatting
//! - **Security**: Encrypted credential storage
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tusk::libs::catalog::ToolCatalog;
//! use tusk::libs::kv::MemoryStore;
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = MemoryStore::new();
//! let catalog = ToolCatalog::load(&store)?;
//! println!("{} tools cached", catalog.len());
//! # Ok(())
//! # }
//! ```

pub mod bridge;
pub mod catalog;
pub mod config;
pub mod credentials;
pub mod data_storage;
pub mod idle;
pub mod kv;
pub mod messages;
pub mod secret;
pub mod synclog;
pub mod view;
