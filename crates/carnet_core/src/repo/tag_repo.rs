//! Tag repository contract and key-value implementation.
//!
//! # Responsibility
//! - CRUD over the tags collection document.
//! - Case-insensitive name uniqueness at creation.
//! - Best-effort removal of a deleted tag from every association list.

use crate::model::tag::{generate_tag_id, Tag, TagDraft, DEFAULT_TAG_COLOR};
use crate::repo::association_repo::KvAssociationRepository;
use crate::repo::{corrupt_blob, unencodable_blob, RepoError, RepoResult};
use crate::store::{BlobStore, TAGS_KEY};
use chrono::Utc;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Wrapper shape of the persisted tags blob.
#[derive(Debug, Default, Serialize, Deserialize)]
struct TagsDoc {
    tags: Vec<Tag>,
}

/// Repository interface for tag operations.
pub trait TagRepository {
    /// Returns all tags in insertion order.
    fn get_all(&self) -> RepoResult<Vec<Tag>>;
    /// Creates a tag with a generated opaque id.
    fn create(&self, draft: &TagDraft) -> RepoResult<Tag>;
    /// Deletes a tag and strips its id from all associations (best effort).
    fn delete(&self, id: &str) -> RepoResult<()>;
}

/// Key-value backed tag repository.
pub struct KvTagRepository<'s> {
    store: &'s BlobStore,
}

impl<'s> KvTagRepository<'s> {
    pub fn new(store: &'s BlobStore) -> Self {
        Self { store }
    }

    fn load(&self) -> RepoResult<Vec<Tag>> {
        match self.store.get(TAGS_KEY)? {
            Some(raw) => {
                let doc: TagsDoc =
                    serde_json::from_str(&raw).map_err(|err| corrupt_blob(TAGS_KEY, err))?;
                Ok(doc.tags)
            }
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, tags: Vec<Tag>) -> RepoResult<()> {
        let doc = TagsDoc { tags };
        let raw = serde_json::to_string(&doc).map_err(|err| unencodable_blob(TAGS_KEY, err))?;
        self.store.set(TAGS_KEY, &raw)?;
        Ok(())
    }
}

impl TagRepository for KvTagRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<Tag>> {
        self.load()
    }

    fn create(&self, draft: &TagDraft) -> RepoResult<Tag> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(RepoError::Validation("tag name is required".to_string()));
        }

        let mut tags = self.load()?;
        let name_lower = name.to_lowercase();
        if tags.iter().any(|tag| tag.name.to_lowercase() == name_lower) {
            return Err(RepoError::Duplicate(format!(
                "a tag named `{name}` already exists"
            )));
        }

        let tag = Tag {
            id: generate_tag_id(),
            name: name.to_string(),
            color: draft
                .color
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .unwrap_or(DEFAULT_TAG_COLOR)
                .to_string(),
            created_at: Utc::now().timestamp_millis(),
        };

        tags.push(tag.clone());
        self.save(tags)?;
        info!("event=tag_create module=repo status=ok tag_id={}", tag.id);
        Ok(tag)
    }

    fn delete(&self, id: &str) -> RepoResult<()> {
        let mut tags = self.load()?;
        let before = tags.len();
        tags.retain(|tag| tag.id != id);
        if tags.len() == before {
            return Err(RepoError::NotFound(format!("tag not found: {id}")));
        }
        self.save(tags)?;

        let associations = KvAssociationRepository::new(self.store);
        if let Err(err) = associations.strip_tag(id) {
            warn!("event=tag_delete module=repo status=partial tag_id={id} cascade_error={err}");
        } else {
            info!("event=tag_delete module=repo status=ok tag_id={id}");
        }
        Ok(())
    }
}
