//! Core domain logic for Carnet, a local content-management layer for a
//! static blog.
//!
//! Articles, tags and their associations live as JSON documents in a
//! durable key-value blob store; repositories enforce per-entity invariants
//! over whole-collection read-modify-write; a pure renderer derives the
//! public listing (filtering, sorting, collapsible sections) from
//! collection snapshots.

pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::article::{Article, ArticleDraft, ArticlePatch};
pub use model::slug::slugify;
pub use model::tag::{Tag, TagDraft, DEFAULT_TAG_COLOR};
pub use model::AssociationMap;
pub use render::{
    render_article_list, ArticleBody, ArticleListView, ArticleView, EmptyListState, FoldState,
    SectionView, SortMode, TagOption, ViewQuery,
};
pub use repo::article_repo::{ArticleRepository, KvArticleRepository};
pub use repo::association_repo::{AssociationRepository, KvAssociationRepository};
pub use repo::auth::{AuthGate, KvAuthGate};
pub use repo::tag_repo::{KvTagRepository, TagRepository};
pub use repo::{RepoError, RepoResult};
pub use service::content_service::{ContentService, ContentSnapshot};
pub use service::session::AdminSession;
pub use store::{
    open_store, open_store_in_memory, BlobStore, StoreError, DEFAULT_ADMIN_PASSWORD,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
