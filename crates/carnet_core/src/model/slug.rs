//! Title folding helpers: URL-safe slugs and collation keys.
//!
//! # Invariants
//! - `slugify` is deterministic and idempotent: `slugify(slugify(t)) ==
//!   slugify(t)`.
//! - Both helpers strip diacritics through NFD decomposition, so accented
//!   and plain spellings fold to the same form.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Derives a URL-safe article id from a title.
///
/// Lowercases, strips diacritics, collapses every non-alphanumeric run to a
/// single hyphen and trims leading/trailing hyphens. `"Café du Matin!"`
/// becomes `"cafe-du-matin"`.
pub fn slugify(title: &str) -> String {
    let folded = fold_diacritics(title);
    let mut slug = String::with_capacity(folded.len());
    let mut pending_hyphen = false;

    for ch in folded.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Builds a locale-insensitive comparison key for title sorting.
///
/// Approximates a French-locale compare by folding case and diacritics, so
/// "Zèbre" sorts with "zebre" rather than after all ASCII titles.
pub fn collation_key(value: &str) -> String {
    fold_diacritics(value)
}

fn fold_diacritics(value: &str) -> String {
    value
        .trim()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{collation_key, slugify};

    #[test]
    fn slugify_strips_diacritics_and_punctuation() {
        assert_eq!(slugify("Café du Matin!"), "cafe-du-matin");
        assert_eq!(slugify("Recherche bibliographique"), "recherche-bibliographique");
    }

    #[test]
    fn slugify_collapses_runs_and_trims_hyphens() {
        assert_eq!(slugify("  ---Hello,,,   World---  "), "hello-world");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slugify_is_idempotent() {
        for title in ["Café du Matin!", "État de l'art (2026)", "a--b"] {
            let once = slugify(title);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn collation_key_folds_case_and_accents() {
        assert_eq!(collation_key("Zèbre"), "zebre");
        assert!(collation_key("Alpha") < collation_key("Zèbre"));
        assert!(collation_key("État") < collation_key("Futur"));
    }
}
