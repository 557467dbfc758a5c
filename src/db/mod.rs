//! Database layer for the tusk application.
//!
//! Provides durable persistence built on SQLite. The engine treats the
//! database as a key-value store of serialized state: the encrypted
//! credentials, the cached tool catalog, and the sync log each live under
//! their own key. Keeping state in SQLite rather than loose files gives
//! atomic writes and a single artifact to wipe on disconnect.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tusk::db::store::SqliteStore;
//! use tusk::libs::kv::KvStore;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut store = SqliteStore::new()?;
//! store.set("catalog", "{\"tools\":[]}")?;
//! let cached = store.get("catalog")?;
//! # Ok(())
//! # }
//! ```

/// Core database connection and initialization module.
pub mod db;

/// Key-value state storage over the core connection.
pub mod store;
