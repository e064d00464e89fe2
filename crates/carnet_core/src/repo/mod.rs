//! Repository layer: entity CRUD façades over the blob store.
//!
//! # Responsibility
//! - Define per-entity data access contracts and their key-value backed
//!   implementations.
//! - Enforce per-entity invariants (required fields, id uniqueness) before
//!   any write reaches the store.
//!
//! # Invariants
//! - Every mutation is a whole-collection read-modify-write; there is no
//!   partial update and no cross-collection transaction.
//! - Cascading association cleanup is best-effort: a failed cleanup never
//!   undoes the primary delete.

use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod article_repo;
pub mod association_repo;
pub mod auth;
pub mod tag_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure taxonomy shared by all repositories and the auth gate.
#[derive(Debug)]
pub enum RepoError {
    /// A required field is missing or empty after trimming.
    Validation(String),
    /// A uniqueness constraint was violated.
    Duplicate(String),
    /// The target id does not exist.
    NotFound(String),
    /// Credential mismatch.
    Auth(String),
    /// Storage-layer failure.
    Store(StoreError),
    /// A persisted blob could not be decoded or encoded.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(message)
            | Self::Duplicate(message)
            | Self::NotFound(message)
            | Self::Auth(message) => write!(f, "{message}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Maps a JSON decode failure for `key` to a repository error.
pub(crate) fn corrupt_blob(key: &str, err: serde_json::Error) -> RepoError {
    RepoError::InvalidData(format!("blob `{key}` is not valid JSON: {err}"))
}

/// Maps a JSON encode failure for `key` to a repository error.
pub(crate) fn unencodable_blob(key: &str, err: serde_json::Error) -> RepoError {
    RepoError::InvalidData(format!("failed to encode blob `{key}`: {err}"))
}
