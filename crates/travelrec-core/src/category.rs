// crates/travelrec-core/src/category.rs

use crate::text::fold_key;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The unit of keyword classification.
///
/// A closed enumeration rather than a string comparison: every piece of
/// logic downstream of the normalizer matches on these three variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beach,
    Temple,
    Country,
}

impl Category {
    /// Map free text to a category via folded substring containment.
    ///
    /// "beach", "temple", "country" and "countries" all match regardless of
    /// case or surrounding whitespace; accents are folded the same way the
    /// rest of the crate matches names. Empty or unclassifiable input
    /// yields `None`.
    pub fn parse(raw: &str) -> Option<Category> {
        let keyword = fold_key(raw.trim());
        if keyword.is_empty() {
            return None;
        }
        if keyword.contains("beach") {
            return Some(Category::Beach);
        }
        if keyword.contains("temple") {
            return Some(Category::Temple);
        }
        // "countries" does not contain "country"; both spellings match.
        if keyword.contains("country") || keyword.contains("countries") {
            return Some(Category::Country);
        }
        None
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Beach => "beach",
            Category::Temple => "temple",
            Category::Country => "country",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_category() {
        assert_eq!(Category::parse("Beaches"), Some(Category::Beach));
        assert_eq!(Category::parse("TEMPLE "), Some(Category::Temple));
        assert_eq!(Category::parse("Countries"), Some(Category::Country));
        assert_eq!(Category::parse("country"), Some(Category::Country));
    }

    #[test]
    fn rejects_empty_and_unknown_input() {
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::parse("   "), None);
        assert_eq!(Category::parse("mountains"), None);
    }

    #[test]
    fn folds_accents_before_matching() {
        assert_eq!(Category::parse("Tëmple"), Some(Category::Temple));
    }

    #[test]
    fn matches_on_containment() {
        assert_eq!(
            Category::parse("sandy beach holidays"),
            Some(Category::Beach)
        );
    }
}
