//! List-backed storage: the store collaborator behind the engine.
//!
//! The engine only needs three capabilities from its store: append a line to
//! a named list, read the whole list back in insertion order, and delete the
//! list. [`ListStore`] captures exactly that; [`SqliteStore`] persists lists
//! in SQLite, [`MemoryStore`] keeps them in a map for tests and ephemeral use.

use eyre::{Context, Result};
use rusqlite::{Connection, params};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Minimal store contract: ordered, append-only lists keyed by name.
pub trait ListStore {
    /// Append one line to the end of the named list.
    fn append(&mut self, key: &str, line: &str) -> Result<()>;

    /// Read the whole list in insertion order. Missing key reads as empty.
    fn read_all(&self, key: &str) -> Result<Vec<String>>;

    /// Delete the named list entirely.
    fn delete(&mut self, key: &str) -> Result<()>;
}

/// SQLite-backed list store.
///
/// One table holds every list; `seq` is monotonically assigned by SQLite so
/// reads ordered by it reproduce insertion order.
pub struct SqliteStore {
    db: Connection,
}

impl SqliteStore {
    /// Open (creating if needed) a store at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create store directory")?;
        }
        let db = Connection::open(path).context("Failed to open SQLite database")?;
        let store = Self { db };
        store.init_schema()?;
        Ok(store)
    }

    /// Open an in-memory store, discarded on drop.
    pub fn open_in_memory() -> Result<Self> {
        let db = Connection::open_in_memory().context("Failed to open in-memory SQLite database")?;
        let store = Self { db };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.db
            .execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS log_entries (
                    seq INTEGER PRIMARY KEY AUTOINCREMENT,
                    key TEXT NOT NULL,
                    line TEXT NOT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_log_entries_key ON log_entries(key);
            "#,
            )
            .context("Failed to initialize schema")?;
        Ok(())
    }
}

impl ListStore for SqliteStore {
    fn append(&mut self, key: &str, line: &str) -> Result<()> {
        self.db
            .execute("INSERT INTO log_entries (key, line) VALUES (?1, ?2)", params![key, line])
            .context("Failed to append entry")?;
        Ok(())
    }

    fn read_all(&self, key: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .db
            .prepare("SELECT line FROM log_entries WHERE key = ?1 ORDER BY seq")
            .context("Failed to prepare read")?;
        let lines = stmt
            .query_map(params![key], |row| row.get::<_, String>(0))
            .context("Failed to read entries")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Failed to decode entries")?;
        Ok(lines)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.db
            .execute("DELETE FROM log_entries WHERE key = ?1", params![key])
            .context("Failed to delete entries")?;
        Ok(())
    }
}

/// In-memory list store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    lists: HashMap<String, Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListStore for MemoryStore {
    fn append(&mut self, key: &str, line: &str) -> Result<()> {
        self.lists.entry(key.to_string()).or_default().push(line.to_string());
        Ok(())
    }

    fn read_all(&self, key: &str) -> Result<Vec<String>> {
        Ok(self.lists.get(key).cloned().unwrap_or_default())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.lists.remove(key);
        Ok(())
    }
}
