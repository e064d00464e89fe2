//! Article domain model.
//!
//! # Responsibility
//! - Define the persisted article record and its creation/update inputs.
//!
//! # Invariants
//! - `id` and `created_at` are fixed at creation time.
//! - `date` is a free display label, not the sort key; ordering always uses
//!   `created_at`.

use serde::{Deserialize, Serialize};

/// Persisted article record.
///
/// Serialized field names follow the blob document schema (`createdAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Slug derived from the title at creation. Immutable and unique.
    pub id: String,
    pub title: String,
    /// Human-facing date label, defaulted to today (`%d/%m/%Y`) if omitted.
    pub date: String,
    pub summary: String,
    /// Rich-text markup, partitioned into sections by the renderer.
    pub content: String,
    /// Creation instant in epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// Input fields for creating an article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    /// Display date label; `None` or blank falls back to today.
    pub date: Option<String>,
    pub summary: Option<String>,
    pub content: String,
}

/// Partial update for an existing article.
///
/// Only fields that are `Some` are considered: `title`/`content` apply only
/// when non-empty after trimming, `date`/`summary` apply whenever present,
/// even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub date: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
}
