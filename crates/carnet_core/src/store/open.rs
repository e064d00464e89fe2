//! Connection bootstrap for the blob store.
//!
//! # Responsibility
//! - Open file or in-memory stores.
//! - Apply schema migrations and default-content seeding before returning.
//!
//! # Invariants
//! - Returned stores have migrations fully applied.
//! - Returned stores contain all four collection keys (seeded on first use).

use super::migrations::apply_migrations;
use super::seed::seed_defaults;
use super::{BlobStore, StoreResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens a blob store file, applying migrations and first-use seeding.
///
/// # Side effects
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StoreResult<BlobStore> {
    open_mode("file", Connection::open(path))
}

/// Opens an in-memory blob store, applying migrations and seeding.
///
/// Used by tests and the CLI smoke probe; contents vanish on drop.
pub fn open_store_in_memory() -> StoreResult<BlobStore> {
    open_mode("memory", Connection::open_in_memory())
}

fn open_mode(mode: &str, opened: rusqlite::Result<Connection>) -> StoreResult<BlobStore> {
    let started_at = Instant::now();
    info!("event=store_open module=store status=start mode={mode}");

    let result = opened.map_err(Into::into).and_then(|mut conn| {
        conn.busy_timeout(Duration::from_secs(5))?;
        apply_migrations(&mut conn)?;
        let store = BlobStore::new(conn);
        seed_defaults(&store)?;
        Ok(store)
    });

    match &result {
        Ok(_) => info!(
            "event=store_open module=store status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=store_open module=store status=error mode={mode} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }

    result
}
