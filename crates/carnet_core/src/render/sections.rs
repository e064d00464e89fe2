//! Partitioning of article markup into top-level block sections.
//!
//! # Responsibility
//! - Split rich-text content into its top-level block nodes.
//! - Derive the plain-text preview shown for a collapsed section.
//!
//! # Invariants
//! - Sections are identified positionally; editing content so that block
//!   ordinals shift silently re-keys fold state to whatever now sits at
//!   that ordinal. Accepted imprecision.
//! - Text between top-level elements is ignored, matching DOM `children`
//!   semantics.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum preview length in characters before truncation.
pub const PREVIEW_MAX_CHARS: usize = 50;

static TAG_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<(/?)([a-z][a-z0-9]*)(?:\s[^>]*?)?(/?)>").expect("valid tag token regex")
});
static ANY_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

// Elements that never carry a closing tag in the supported markup.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta"];

/// One top-level block node of an article's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The node's markup, verbatim from the source content.
    pub markup: String,
    /// Plain-text preview, truncated to [`PREVIEW_MAX_CHARS`] chars.
    pub preview: String,
    /// Lowercased element name (`p`, `h3`, `ul`, ...).
    pub tag_name: String,
    /// Headings (h2-h6) render unconditionally and never fold.
    pub is_heading: bool,
}

/// Splits `content` into its top-level block sections.
///
/// Nested elements (including same-name nesting) stay inside their
/// enclosing top-level node. An unclosed top-level element swallows the
/// rest of the content. Content without any element yields no sections;
/// the renderer then falls back to the raw content.
pub fn partition_sections(content: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    // (name, start offset, nesting depth) of the open top-level element.
    let mut open: Option<(String, usize, usize)> = None;

    for caps in TAG_TOKEN_RE.captures_iter(content) {
        let token = caps.get(0).expect("regex match has a full capture");
        let is_close = !caps[1].is_empty();
        let name = caps[2].to_lowercase();
        let self_closed = !caps[3].is_empty() || VOID_TAGS.contains(&name.as_str());

        match open.take() {
            None => {
                if is_close {
                    // Stray close tag at top level, skip it.
                    continue;
                }
                if self_closed {
                    sections.push(make_section(&content[token.start()..token.end()], &name));
                } else {
                    open = Some((name, token.start(), 1));
                }
            }
            Some((open_name, start, depth)) => {
                if name != open_name {
                    open = Some((open_name, start, depth));
                } else if is_close {
                    if depth == 1 {
                        sections.push(make_section(&content[start..token.end()], &open_name));
                    } else {
                        open = Some((open_name, start, depth - 1));
                    }
                } else if self_closed {
                    open = Some((open_name, start, depth));
                } else {
                    open = Some((open_name, start, depth + 1));
                }
            }
        }
    }

    if let Some((name, start, _)) = open {
        sections.push(make_section(&content[start..], &name));
    }

    sections
}

fn make_section(markup: &str, tag_name: &str) -> Section {
    Section {
        markup: markup.to_string(),
        preview: derive_preview(markup),
        tag_name: tag_name.to_string(),
        is_heading: matches!(tag_name, "h2" | "h3" | "h4" | "h5" | "h6"),
    }
}

/// Derives the collapsed-state preview text for one section.
///
/// Strips all tags, trims, keeps the first [`PREVIEW_MAX_CHARS`] chars and
/// appends an ellipsis when the text was longer.
pub fn derive_preview(markup: &str) -> String {
    let text = ANY_TAG_RE.replace_all(markup, "");
    let text = text.trim();
    let mut preview: String = text.chars().take(PREVIEW_MAX_CHARS).collect();
    if text.chars().count() > PREVIEW_MAX_CHARS {
        preview.push_str("...");
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::{derive_preview, partition_sections, PREVIEW_MAX_CHARS};

    #[test]
    fn partitions_top_level_blocks_and_flags_headings() {
        let content = "<p>intro</p><h3>Titre</h3><ul><li>a</li><li>b</li></ul>";
        let sections = partition_sections(content);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].tag_name, "p");
        assert!(!sections[0].is_heading);
        assert!(sections[1].is_heading);
        assert_eq!(sections[2].tag_name, "ul");
        assert_eq!(sections[2].markup, "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn same_name_nesting_stays_in_one_section() {
        let content = "<ul><li>x<ul><li>y</li></ul></li></ul><p>after</p>";
        let sections = partition_sections(content);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].markup.ends_with("</li></ul>"));
        assert_eq!(sections[1].tag_name, "p");
    }

    #[test]
    fn void_and_self_closed_elements_are_single_sections() {
        let sections = partition_sections("<hr><p>body</p><br/>");
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].tag_name, "hr");
        assert_eq!(sections[2].tag_name, "br");
    }

    #[test]
    fn unclosed_element_swallows_remaining_content() {
        let sections = partition_sections("<p>first</p><blockquote>rest <em>here</em>");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].tag_name, "blockquote");
        assert!(sections[1].markup.ends_with("</em>"));
    }

    #[test]
    fn content_without_elements_yields_no_sections() {
        assert!(partition_sections("plain text only").is_empty());
        assert!(partition_sections("").is_empty());
    }

    #[test]
    fn preview_strips_tags_and_truncates_with_ellipsis() {
        assert_eq!(derive_preview("<p>court</p>"), "court");

        let long = format!("<p>{}</p>", "x".repeat(PREVIEW_MAX_CHARS + 10));
        let preview = derive_preview(&long);
        assert_eq!(preview.chars().count(), PREVIEW_MAX_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn preview_keeps_nested_text_in_document_order() {
        assert_eq!(
            derive_preview("<ul><li>un</li><li>deux</li></ul>"),
            "undeux"
        );
    }
}
