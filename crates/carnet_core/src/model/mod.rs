//! Domain model for articles, tags and their associations.
//!
//! # Responsibility
//! - Define the persisted record shapes and their creation inputs.
//! - Own identifier derivation (title slugs, opaque tag tokens).
//!
//! # Invariants
//! - `Article::id` is a slug derived from the title at creation and never
//!   changes afterwards.
//! - The association map is the only record of tag membership; no reverse
//!   index exists.

use std::collections::BTreeMap;

pub mod article;
pub mod slug;
pub mod tag;

/// Mapping from article id to its ordered list of tag ids.
///
/// Dangling ids on either side are tolerated here; renderers filter them
/// out silently instead of this layer enforcing referential integrity.
pub type AssociationMap = BTreeMap<String, Vec<String>>;
