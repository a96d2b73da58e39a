//! Durable alias storage
//!
//! A single-table embedded database mapping alias names to command
//! templates. The store is opened once per process and the connection holds
//! an exclusive lock for its whole lifetime, so a second concurrently
//! running instance fails to open the store until the first exits.

use crate::error::{AliasError, Result};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Durable alias -> command template store
#[derive(Debug)]
pub struct AliasStore {
    path: PathBuf,
    conn: Connection,
}

impl AliasStore {
    /// Open or create the store at the given path.
    ///
    /// This is the only fatal failure point: every later operation reports a
    /// per-operation [`AliasError::StorageTx`] instead.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let conn =
            Connection::open(&path).map_err(|e| AliasError::storage_open(&path, e))?;
        let store = Self { path, conn };
        store.migrate()?;
        debug!("Opened alias store at {}", store.path.display());
        Ok(store)
    }

    /// Path the store was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn migrate(&self) -> Result<()> {
        // The CREATE TABLE write acquires the exclusive lock immediately,
        // so concurrent openers are rejected here rather than on first use.
        self.conn
            .execute_batch(
                r#"
                PRAGMA locking_mode=EXCLUSIVE;
                PRAGMA journal_mode=WAL;
                PRAGMA synchronous=FULL;

                CREATE TABLE IF NOT EXISTS commands (
                  alias TEXT PRIMARY KEY,
                  template TEXT NOT NULL
                );
                "#,
            )
            .map_err(|e| AliasError::storage_open(&self.path, e))
    }

    /// Insert or overwrite the template stored under `alias`.
    ///
    /// Saving an existing alias silently replaces it; only `edit` cares
    /// about prior existence. The write is committed before returning.
    pub fn put(&self, alias: &str, template: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO commands (alias, template) VALUES (?1, ?2)
                 ON CONFLICT(alias) DO UPDATE SET template = excluded.template",
                params![alias, template],
            )
            .map_err(|e| AliasError::storage_tx("put", e))?;
        debug!("Stored template under alias '{}'", alias);
        Ok(())
    }

    /// Look up the template stored under `alias`.
    ///
    /// `None` is the explicit not-found outcome, distinct from storage
    /// errors.
    pub fn get(&self, alias: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT template FROM commands WHERE alias = ?1",
                params![alias],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| AliasError::storage_tx("get", e))
    }

    /// Whether an alias is present in the store
    pub fn exists(&self, alias: &str) -> Result<bool> {
        self.conn
            .query_row(
                "SELECT 1 FROM commands WHERE alias = ?1",
                params![alias],
                |_| Ok(()),
            )
            .optional()
            .map(|found| found.is_some())
            .map_err(|e| AliasError::storage_tx("exists", e))
    }

    /// Visit every (alias, template) pair in the store's natural key order.
    ///
    /// Iteration order is a property of the storage, not a contract;
    /// callers should only rely on set membership.
    pub fn for_each(&self, mut visit: impl FnMut(&str, &str)) -> Result<()> {
        let mut stmt = self
            .conn
            .prepare("SELECT alias, template FROM commands ORDER BY alias")
            .map_err(|e| AliasError::storage_tx("list", e))?;
        let mut rows = stmt
            .query([])
            .map_err(|e| AliasError::storage_tx("list", e))?;
        while let Some(row) = rows.next().map_err(|e| AliasError::storage_tx("list", e))? {
            let alias: String = row.get(0).map_err(|e| AliasError::storage_tx("list", e))?;
            let template: String =
                row.get(1).map_err(|e| AliasError::storage_tx("list", e))?;
            visit(&alias, &template);
        }
        Ok(())
    }
}
