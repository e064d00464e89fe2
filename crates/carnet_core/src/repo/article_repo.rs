//! Article repository contract and key-value implementation.
//!
//! # Responsibility
//! - CRUD over the articles collection document.
//! - Slug id derivation and uniqueness at creation.
//! - Best-effort association cleanup when an article is deleted.
//!
//! # Invariants
//! - `id` and `created_at` never change after creation.
//! - The collection keeps insertion order; `get_all` returns it unchanged.

use crate::model::article::{Article, ArticleDraft, ArticlePatch};
use crate::model::slug::slugify;
use crate::repo::association_repo::KvAssociationRepository;
use crate::repo::{corrupt_blob, unencodable_blob, RepoError, RepoResult};
use crate::store::{BlobStore, ARTICLES_KEY};
use chrono::{Local, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Wrapper shape of the persisted articles blob.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ArticlesDoc {
    articles: Vec<Article>,
}

/// Repository interface for article CRUD operations.
pub trait ArticleRepository {
    /// Returns all articles in insertion order.
    fn get_all(&self) -> RepoResult<Vec<Article>>;
    /// Creates an article, deriving its slug id from the title.
    fn create(&self, draft: &ArticleDraft) -> RepoResult<Article>;
    /// Applies a partial update; `id` and `created_at` are preserved.
    fn update(&self, id: &str, patch: &ArticlePatch) -> RepoResult<Article>;
    /// Deletes an article and drops its association entry (best effort).
    fn delete(&self, id: &str) -> RepoResult<()>;
}

/// Key-value backed article repository.
pub struct KvArticleRepository<'s> {
    store: &'s BlobStore,
}

impl<'s> KvArticleRepository<'s> {
    pub fn new(store: &'s BlobStore) -> Self {
        Self { store }
    }

    fn load(&self) -> RepoResult<Vec<Article>> {
        match self.store.get(ARTICLES_KEY)? {
            Some(raw) => {
                let doc: ArticlesDoc =
                    serde_json::from_str(&raw).map_err(|err| corrupt_blob(ARTICLES_KEY, err))?;
                Ok(doc.articles)
            }
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, articles: Vec<Article>) -> RepoResult<()> {
        let doc = ArticlesDoc { articles };
        let raw =
            serde_json::to_string(&doc).map_err(|err| unencodable_blob(ARTICLES_KEY, err))?;
        self.store.set(ARTICLES_KEY, &raw)?;
        Ok(())
    }
}

impl ArticleRepository for KvArticleRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<Article>> {
        self.load()
    }

    fn create(&self, draft: &ArticleDraft) -> RepoResult<Article> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(RepoError::Validation("article title is required".to_string()));
        }
        let content = draft.content.trim();
        if content.is_empty() {
            return Err(RepoError::Validation(
                "article content is required".to_string(),
            ));
        }

        let mut articles = self.load()?;
        let id = slugify(title);
        if articles.iter().any(|article| article.id == id) {
            return Err(RepoError::Duplicate(format!(
                "an article with id `{id}` already exists"
            )));
        }

        let article = Article {
            id: id.clone(),
            title: title.to_string(),
            date: draft
                .date
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .unwrap_or_else(default_date_label),
            summary: draft
                .summary
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            content: content.to_string(),
            created_at: Utc::now().timestamp_millis(),
        };

        articles.push(article.clone());
        self.save(articles)?;
        info!("event=article_create module=repo status=ok article_id={id}");
        Ok(article)
    }

    fn update(&self, id: &str, patch: &ArticlePatch) -> RepoResult<Article> {
        let mut articles = self.load()?;
        let article = articles
            .iter_mut()
            .find(|article| article.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("article not found: {id}")))?;

        if let Some(title) = patch.title.as_deref() {
            let trimmed = title.trim();
            if !trimmed.is_empty() {
                article.title = trimmed.to_string();
            }
        }
        if let Some(content) = patch.content.as_deref() {
            let trimmed = content.trim();
            if !trimmed.is_empty() {
                article.content = trimmed.to_string();
            }
        }
        // date is applied verbatim, summary trimmed, both even when empty.
        if let Some(date) = patch.date.as_deref() {
            article.date = date.to_string();
        }
        if let Some(summary) = patch.summary.as_deref() {
            article.summary = summary.trim().to_string();
        }

        let updated = article.clone();
        self.save(articles)?;
        info!("event=article_update module=repo status=ok article_id={id}");
        Ok(updated)
    }

    fn delete(&self, id: &str) -> RepoResult<()> {
        let mut articles = self.load()?;
        let before = articles.len();
        articles.retain(|article| article.id != id);
        if articles.len() == before {
            return Err(RepoError::NotFound(format!("article not found: {id}")));
        }
        self.save(articles)?;

        // The article is gone at this point; a failed cascade leaves a
        // dangling association entry, which renderers tolerate.
        let associations = KvAssociationRepository::new(self.store);
        if let Err(err) = associations.remove_entry(id) {
            warn!(
                "event=article_delete module=repo status=partial article_id={id} cascade_error={err}"
            );
        } else {
            info!("event=article_delete module=repo status=ok article_id={id}");
        }
        Ok(())
    }
}

/// Today's date formatted the way the UI displays dates (`%d/%m/%Y`).
fn default_date_label() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}
