//! Article list renderer.
//!
//! # Responsibility
//! - Derive a filtered/sorted/sectioned view of articles from collection
//!   snapshots, as a typed render tree (no markup strings).
//! - Track transient per-section fold state.
//!
//! # Invariants
//! - Rendering is a pure function of its inputs; it never touches storage.
//! - Dangling tag ids in associations are dropped silently.
//! - Fold state is positional and reset on reload; it is never persisted.

use crate::model::article::Article;
use crate::model::slug::collation_key;
use crate::model::tag::Tag;
use crate::service::content_service::ContentSnapshot;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

pub mod sections;

use sections::partition_sections;

/// Article ordering requested by the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Newest `created_at` first. Also the fallback for unknown inputs.
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
}

impl SortMode {
    /// Parses the UI's sort selector value; unrecognized values fall back
    /// to [`SortMode::DateDesc`].
    pub fn parse(value: &str) -> Self {
        match value {
            "date-asc" => Self::DateAsc,
            "title-asc" => Self::TitleAsc,
            "title-desc" => Self::TitleDesc,
            _ => Self::DateDesc,
        }
    }
}

/// Filter and ordering options for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub sort: SortMode,
    /// When set, only articles whose association list contains this tag id
    /// are shown.
    pub tag_filter: Option<String>,
}

/// Transient collapsed/expanded flags, keyed by `(article id, ordinal)`.
///
/// Keys are positional: editing content so that block ordinals shift will
/// re-attach fold flags to whatever section now sits at that ordinal.
#[derive(Debug, Clone, Default)]
pub struct FoldState {
    collapsed: BTreeSet<(String, usize)>,
}

impl FoldState {
    pub fn is_collapsed(&self, article_id: &str, index: usize) -> bool {
        self.collapsed.contains(&(article_id.to_string(), index))
    }

    /// Flips one section's collapsed flag.
    pub fn toggle(&mut self, article_id: &str, index: usize) {
        let key = (article_id.to_string(), index);
        if !self.collapsed.remove(&key) {
            self.collapsed.insert(key);
        }
    }

    /// Collapses or expands every section ordinal of one article.
    pub fn set_all(&mut self, article_id: &str, section_count: usize, collapsed: bool) {
        for index in 0..section_count {
            let key = (article_id.to_string(), index);
            if collapsed {
                self.collapsed.insert(key);
            } else {
                self.collapsed.remove(&key);
            }
        }
    }
}

/// Why a rendered list came out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyListState {
    /// No articles exist at all.
    NoArticles,
    /// Articles exist but none match the current filter.
    NoMatches,
}

/// One entry of the tag filter dropdown, built from live tags only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOption {
    pub id: String,
    pub name: String,
}

/// One top-level content section, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    /// Ordinal within the article; the fold-state key.
    pub index: usize,
    pub markup: String,
    /// Headings render unconditionally and are never collapsible.
    pub is_heading: bool,
    /// Always `false` for headings.
    pub collapsed: bool,
    /// Plain-text preview shown while collapsed.
    pub preview: String,
}

/// Body of one rendered article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleBody {
    /// Content had no top-level elements; shown as-is without folding.
    Raw(String),
    Sections(Vec<SectionView>),
}

/// One article of the rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    pub id: String,
    pub title: String,
    pub date: String,
    pub summary: String,
    /// Live tags only; dangling association ids are dropped.
    pub tags: Vec<Tag>,
    pub body: ArticleBody,
}

/// Full render tree for the public article listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListView {
    pub articles: Vec<ArticleView>,
    /// Set when `articles` is empty, distinguishing "nothing exists" from
    /// "nothing matches the filter".
    pub empty: Option<EmptyListState>,
    /// Filter dropdown entries, in tag insertion order.
    pub tag_options: Vec<TagOption>,
}

/// Renders the article listing from a snapshot and view options.
pub fn render_article_list(
    snapshot: &ContentSnapshot,
    query: &ViewQuery,
    folds: &FoldState,
) -> ArticleListView {
    let tags_by_id: HashMap<&str, &Tag> = snapshot
        .tags
        .iter()
        .map(|tag| (tag.id.as_str(), tag))
        .collect();

    let mut filtered: Vec<&Article> = snapshot
        .articles
        .iter()
        .filter(|article| match query.tag_filter.as_deref() {
            Some(filter) => snapshot
                .associations
                .get(&article.id)
                .is_some_and(|tag_ids| tag_ids.iter().any(|id| id == filter)),
            None => true,
        })
        .collect();

    filtered.sort_by(|a, b| compare_articles(a, b, query.sort));

    let articles: Vec<ArticleView> = filtered
        .into_iter()
        .map(|article| build_article_view(article, snapshot, &tags_by_id, folds))
        .collect();

    let empty = if articles.is_empty() {
        if snapshot.articles.is_empty() {
            Some(EmptyListState::NoArticles)
        } else {
            Some(EmptyListState::NoMatches)
        }
    } else {
        None
    };

    ArticleListView {
        articles,
        empty,
        tag_options: snapshot
            .tags
            .iter()
            .map(|tag| TagOption {
                id: tag.id.clone(),
                name: tag.name.clone(),
            })
            .collect(),
    }
}

fn compare_articles(a: &Article, b: &Article, sort: SortMode) -> Ordering {
    match sort {
        SortMode::DateDesc => b.created_at.cmp(&a.created_at),
        SortMode::DateAsc => a.created_at.cmp(&b.created_at),
        SortMode::TitleAsc => collation_key(&a.title).cmp(&collation_key(&b.title)),
        SortMode::TitleDesc => collation_key(&b.title).cmp(&collation_key(&a.title)),
    }
}

fn build_article_view(
    article: &Article,
    snapshot: &ContentSnapshot,
    tags_by_id: &HashMap<&str, &Tag>,
    folds: &FoldState,
) -> ArticleView {
    let tags = snapshot
        .associations
        .get(&article.id)
        .map(|tag_ids| {
            tag_ids
                .iter()
                .filter_map(|id| tags_by_id.get(id.as_str()))
                .map(|tag| (*tag).clone())
                .collect()
        })
        .unwrap_or_default();

    let parsed = partition_sections(&article.content);
    let body = if parsed.is_empty() {
        ArticleBody::Raw(article.content.clone())
    } else {
        ArticleBody::Sections(
            parsed
                .into_iter()
                .enumerate()
                .map(|(index, section)| SectionView {
                    index,
                    collapsed: !section.is_heading && folds.is_collapsed(&article.id, index),
                    is_heading: section.is_heading,
                    markup: section.markup,
                    preview: section.preview,
                })
                .collect(),
        )
    };

    ArticleView {
        id: article.id.clone(),
        title: article.title.clone(),
        date: article.date.clone(),
        summary: article.summary.clone(),
        tags,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::{FoldState, SortMode};

    #[test]
    fn sort_mode_parse_falls_back_to_date_desc() {
        assert_eq!(SortMode::parse("date-desc"), SortMode::DateDesc);
        assert_eq!(SortMode::parse("title-asc"), SortMode::TitleAsc);
        assert_eq!(SortMode::parse("definitely-not-a-mode"), SortMode::DateDesc);
        assert_eq!(SortMode::parse(""), SortMode::DateDesc);
    }

    #[test]
    fn fold_state_toggles_and_sets_all() {
        let mut folds = FoldState::default();
        assert!(!folds.is_collapsed("a", 0));

        folds.toggle("a", 0);
        assert!(folds.is_collapsed("a", 0));
        folds.toggle("a", 0);
        assert!(!folds.is_collapsed("a", 0));

        folds.set_all("a", 3, true);
        assert!(folds.is_collapsed("a", 2));
        assert!(!folds.is_collapsed("b", 0));

        folds.set_all("a", 3, false);
        assert!(!folds.is_collapsed("a", 1));
    }
}
