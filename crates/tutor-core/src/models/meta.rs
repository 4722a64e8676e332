//! Tutorial-wide metadata and name handling.

use serde::{Deserialize, Serialize};

/// Value used by the description format for properties that were never set.
pub const UNSET: &str = "nil";

/// Metadata copied onto every step of one tutorial.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TutorialMeta {
    pub name: String,
    pub author: String,
    pub icon: String,
}

impl Default for TutorialMeta {
    fn default() -> Self {
        Self {
            name: UNSET.to_string(),
            author: UNSET.to_string(),
            icon: UNSET.to_string(),
        }
    }
}

/// Turns a tutorial name into the prefix of its step slugs.
///
/// Lowercases and replaces every whitespace character with `-`.
///
/// ```rust
/// use tutor_core::models::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("Two  Spaces"), "two--spaces");
/// ```
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

/// Canonical form used when comparing tutorial names for uniqueness.
///
/// Trims and collapses internal whitespace runs to a single space.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_replaces_each_whitespace_char() {
        assert_eq!(slugify("My\tFirst Tutorial"), "my-first-tutorial");
        assert_eq!(slugify("already-slugged"), "already-slugged");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Blinking   Lights "), "Blinking Lights");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_default_meta_is_unset() {
        let meta = TutorialMeta::default();
        assert_eq!(meta.name, UNSET);
        assert_eq!(meta.author, UNSET);
        assert_eq!(meta.icon, UNSET);
    }
}
