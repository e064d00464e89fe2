//! First-use default content for the blob store.
//!
//! # Invariants
//! - Seeding is per-key idempotent: a key already present is never touched.
//! - Seed documents must stay parseable by the repository layer.

use super::{
    BlobStore, StoreResult, ADMIN_PASSWORD_KEY, ARTICLES_KEY, ARTICLE_TAGS_KEY, TAGS_KEY,
};
use log::info;

/// Credential assumed when no password was ever stored or changed.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

const DEFAULT_ARTICLES_JSON: &str = include_str!("seed/articles.json");
const DEFAULT_TAGS_JSON: &str = include_str!("seed/tags.json");
const DEFAULT_ARTICLE_TAGS_JSON: &str = include_str!("seed/article_tags.json");

/// Seeds sample content and the default credential for any absent key.
pub fn seed_defaults(store: &BlobStore) -> StoreResult<()> {
    let defaults = [
        (ARTICLES_KEY, DEFAULT_ARTICLES_JSON),
        (TAGS_KEY, DEFAULT_TAGS_JSON),
        (ARTICLE_TAGS_KEY, DEFAULT_ARTICLE_TAGS_JSON),
        (ADMIN_PASSWORD_KEY, DEFAULT_ADMIN_PASSWORD),
    ];

    let mut seeded = 0usize;
    for (key, value) in defaults {
        if store.contains(key)? {
            continue;
        }
        store.set(key, value.trim_end())?;
        seeded += 1;
    }

    if seeded > 0 {
        info!("event=store_seed module=store status=ok seeded_keys={seeded}");
    }

    Ok(())
}
