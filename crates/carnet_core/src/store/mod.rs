//! Key-value blob storage bootstrap and access.
//!
//! # Responsibility
//! - Own the durable key-value medium backing all persisted collections.
//! - Keep SQLite details inside the storage boundary.
//!
//! # Invariants
//! - Blob values are opaque strings; callers decide the document format.
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Seeding never overwrites a key that is already present.

use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
mod seed;

pub use open::{open_store, open_store_in_memory};
pub use seed::{seed_defaults, DEFAULT_ADMIN_PASSWORD};

/// Blob key for the articles collection document.
pub const ARTICLES_KEY: &str = "carnet_articles";
/// Blob key for the tags collection document.
pub const TAGS_KEY: &str = "carnet_tags";
/// Blob key for the article-id -> tag-id list association map.
pub const ARTICLE_TAGS_KEY: &str = "carnet_article_tags";
/// Blob key for the stored admin credential (raw string, not JSON).
pub const ADMIN_PASSWORD_KEY: &str = "carnet_admin_password";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Durable, locally-scoped key-value blob store.
///
/// The contract is deliberately minimal: `get` returns the raw string for a
/// key or `None` when absent, `set` writes a raw string unconditionally.
/// Collections are stored as whole JSON documents and rewritten on every
/// mutation; there is no partial update and no cross-key transaction.
pub struct BlobStore {
    conn: Connection,
}

impl BlobStore {
    pub(crate) fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Returns the raw value stored under `key`, or `None` when absent.
    pub fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM blobs WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }
        Ok(None)
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO blobs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    /// Returns whether `key` currently holds a value.
    pub fn contains(&self, key: &str) -> StoreResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM blobs WHERE key = ?1);",
            [key],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}
