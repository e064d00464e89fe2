//! Tag domain model and opaque id generation.
//!
//! # Invariants
//! - Tag names are unique case-insensitively across the collection.
//! - Generated ids combine a time component with a random suffix; collision
//!   probability is treated as negligible, not formally prevented.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Color applied when a tag is created without one.
pub const DEFAULT_TAG_COLOR: &str = "#007bff";

const RANDOM_SUFFIX_CHARS: usize = 9;

/// Persisted tag record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Opaque generated token, see [`generate_tag_id`].
    pub id: String,
    pub name: String,
    /// Hex color used for tag chips.
    pub color: String,
    /// Creation instant in epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// Input fields for creating a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDraft {
    pub name: String,
    /// Hex color; `None` or blank falls back to [`DEFAULT_TAG_COLOR`].
    pub color: Option<String>,
}

/// Generates a process-unique opaque tag id.
///
/// Current epoch milliseconds in base-36 followed by a short random suffix.
pub fn generate_tag_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let random = Uuid::new_v4().simple().to_string();
    format!("{}{}", to_base36(millis), &random[..RANDOM_SUFFIX_CHARS])
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{generate_tag_id, to_base36};

    #[test]
    fn base36_encodes_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1768435200000), to_base36(1768435200000));
    }

    #[test]
    fn generated_ids_are_nonempty_and_distinct() {
        let first = generate_tag_id();
        let second = generate_tag_id();
        assert!(!first.is_empty());
        assert_ne!(first, second);
    }
}
