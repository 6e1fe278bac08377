//! # Keyword Matching
//!
//! The single matching primitive behind accommodation skip lists, contextual
//! conflicts, replacement rules, the notes keyword scan and the international
//! heuristic: case-insensitive substring containment over normalized text.
//!
//! Matching is deliberately naive. `"car"` matches `"Scarf"`; vocabularies
//! and catalog item names are chosen with that in mind.

use serde::{Deserialize, Serialize};

/// Normalize text for matching: trimmed and lower-cased.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// An ordered, de-duplicated set of normalized keyword fragments.
///
/// Blank fragments are dropped at construction, so an empty-string keyword
/// can never match everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Build a set from arbitrary fragments.
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = Vec::new();
        for fragment in fragments {
            let normalized = normalize(fragment.as_ref());
            if !normalized.is_empty() && !keywords.contains(&normalized) {
                keywords.push(normalized);
            }
        }
        Self { keywords }
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Whether the set holds no fragments.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Iterate fragments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Whether `text` contains any fragment.
    pub fn matches(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    /// The first fragment contained in `text`.
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.first_match_normalized(&normalize(text))
    }

    /// Like [`Self::first_match`], for text that is already normalized.
    pub fn first_match_normalized(&self, normalized: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| normalized.contains(k.as_str()))
            .map(String::as_str)
    }
}

impl From<Vec<String>> for KeywordSet {
    fn from(fragments: Vec<String>) -> Self {
        Self::new(fragments)
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.keywords
    }
}

impl<'a> FromIterator<&'a str> for KeywordSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self::new(iter)
    }
}
