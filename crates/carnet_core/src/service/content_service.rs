//! Content workflows and snapshot loading.
//!
//! # Responsibility
//! - Load the full collection state in one pass for rendering.
//! - Provide the composite admin workflows (create/edit an article together
//!   with its tag assignment).
//!
//! # Invariants
//! - Callers re-snapshot after every mutation instead of patching state
//!   incrementally. Deliberate simplicity-over-efficiency tradeoff: the
//!   collections are small and a full reload is always consistent.

use crate::model::article::{Article, ArticleDraft, ArticlePatch};
use crate::model::tag::{Tag, TagDraft};
use crate::model::AssociationMap;
use crate::repo::article_repo::{ArticleRepository, KvArticleRepository};
use crate::repo::association_repo::{AssociationRepository, KvAssociationRepository};
use crate::repo::tag_repo::{KvTagRepository, TagRepository};
use crate::repo::RepoResult;
use crate::store::BlobStore;

/// Point-in-time copy of every persisted collection.
///
/// The renderer's sole data input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSnapshot {
    pub articles: Vec<Article>,
    pub tags: Vec<Tag>,
    pub associations: AssociationMap,
}

/// Façade over the repositories for UI-level workflows.
pub struct ContentService<'s> {
    store: &'s BlobStore,
}

impl<'s> ContentService<'s> {
    pub fn new(store: &'s BlobStore) -> Self {
        Self { store }
    }

    fn articles(&self) -> KvArticleRepository<'s> {
        KvArticleRepository::new(self.store)
    }

    fn tags(&self) -> KvTagRepository<'s> {
        KvTagRepository::new(self.store)
    }

    fn associations(&self) -> KvAssociationRepository<'s> {
        KvAssociationRepository::new(self.store)
    }

    /// Reloads every collection from the store.
    pub fn snapshot(&self) -> RepoResult<ContentSnapshot> {
        Ok(ContentSnapshot {
            articles: self.articles().get_all()?,
            tags: self.tags().get_all()?,
            associations: self.associations().get_all()?,
        })
    }

    /// Creates an article, then assigns its tags when any were selected.
    ///
    /// The two writes are not transactional: if the tag assignment fails,
    /// the article stays created and the error is reported to the caller.
    pub fn create_article_with_tags(
        &self,
        draft: &ArticleDraft,
        tag_ids: &[String],
    ) -> RepoResult<Article> {
        let article = self.articles().create(draft)?;
        if !tag_ids.is_empty() {
            self.associations().set(&article.id, tag_ids)?;
        }
        Ok(article)
    }

    /// Applies an article patch and replaces its tag list.
    pub fn update_article_with_tags(
        &self,
        id: &str,
        patch: &ArticlePatch,
        tag_ids: &[String],
    ) -> RepoResult<Article> {
        let article = self.articles().update(id, patch)?;
        self.associations().set(&article.id, tag_ids)?;
        Ok(article)
    }

    pub fn delete_article(&self, id: &str) -> RepoResult<()> {
        self.articles().delete(id)
    }

    pub fn create_tag(&self, draft: &TagDraft) -> RepoResult<Tag> {
        self.tags().create(draft)
    }

    pub fn delete_tag(&self, id: &str) -> RepoResult<()> {
        self.tags().delete(id)
    }

    /// Replaces one article's tag list without touching the article.
    pub fn set_article_tags(&self, article_id: &str, tag_ids: &[String]) -> RepoResult<()> {
        self.associations().set(article_id, tag_ids)
    }
}
