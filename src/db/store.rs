use super::db::Db;
use crate::libs::kv::KvStore;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, OptionalExtension};

/// SQLite schema for engine state.
///
/// One row per state key (credentials, catalog, sync log). The value column
/// holds serialized JSON; `updated_at` records the last write for display in
/// `tusk status`.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS kv (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )";

/// Durable key-value store backed by the local SQLite database.
pub struct SqliteStore {
    db: Db,
}

impl SqliteStore {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA, [])?;
        Ok(SqliteStore { db })
    }

    /// When the given key was last written, if ever.
    pub fn last_updated(&self, key: &str) -> Result<Option<NaiveDateTime>> {
        let updated_at = self
            .db
            .conn
            .query_row("SELECT updated_at FROM kv WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(updated_at)
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .db
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.db.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, CURRENT_TIMESTAMP)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.db.conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.db.conn.execute("DELETE FROM kv", [])?;
        Ok(())
    }
}
