//! Article-tag association repository.
//!
//! # Responsibility
//! - Own the single source of truth for tag membership: the map from
//!   article id to its ordered tag id list.
//!
//! # Invariants
//! - `set` replaces the whole list for one article; there is no merge.
//! - Neither side of the mapping is validated against live entities;
//!   dangling references are tolerated and filtered by renderers.

use crate::model::AssociationMap;
use crate::repo::{corrupt_blob, unencodable_blob, RepoResult};
use crate::store::{BlobStore, ARTICLE_TAGS_KEY};
use log::info;

/// Repository interface for the association map.
pub trait AssociationRepository {
    /// Returns the full association map; an absent blob reads as empty.
    fn get_all(&self) -> RepoResult<AssociationMap>;
    /// Replaces `article_id`'s tag list wholesale. Duplicate ids in the
    /// input are kept as-is; existence of either side is not checked.
    fn set(&self, article_id: &str, tag_ids: &[String]) -> RepoResult<()>;
}

/// Key-value backed association repository.
pub struct KvAssociationRepository<'s> {
    store: &'s BlobStore,
}

impl<'s> KvAssociationRepository<'s> {
    pub fn new(store: &'s BlobStore) -> Self {
        Self { store }
    }

    pub(crate) fn load(&self) -> RepoResult<AssociationMap> {
        match self.store.get(ARTICLE_TAGS_KEY)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|err| corrupt_blob(ARTICLE_TAGS_KEY, err))
            }
            None => Ok(AssociationMap::new()),
        }
    }

    pub(crate) fn save(&self, map: &AssociationMap) -> RepoResult<()> {
        let raw =
            serde_json::to_string(map).map_err(|err| unencodable_blob(ARTICLE_TAGS_KEY, err))?;
        self.store.set(ARTICLE_TAGS_KEY, &raw)?;
        Ok(())
    }

    /// Drops the whole entry for one article. Returns whether it existed.
    ///
    /// Cascade hook for article deletion.
    pub(crate) fn remove_entry(&self, article_id: &str) -> RepoResult<bool> {
        let mut map = self.load()?;
        let removed = map.remove(article_id).is_some();
        if removed {
            self.save(&map)?;
        }
        Ok(removed)
    }

    /// Strips one tag id from every article's list.
    ///
    /// Cascade hook for tag deletion. An emptied list keeps its article
    /// key in place.
    pub(crate) fn strip_tag(&self, tag_id: &str) -> RepoResult<()> {
        let mut map = self.load()?;
        for tag_ids in map.values_mut() {
            tag_ids.retain(|id| id != tag_id);
        }
        self.save(&map)
    }
}

impl AssociationRepository for KvAssociationRepository<'_> {
    fn get_all(&self) -> RepoResult<AssociationMap> {
        self.load()
    }

    fn set(&self, article_id: &str, tag_ids: &[String]) -> RepoResult<()> {
        let mut map = self.load()?;
        map.insert(article_id.to_string(), tag_ids.to_vec());
        self.save(&map)?;
        info!(
            "event=association_set module=repo status=ok article_id={article_id} tag_count={}",
            tag_ids.len()
        );
        Ok(())
    }
}
