//! Stopword sets for keyword ranking.
//!
//! Stopwords are data, not control flow: callers can swap the default list
//! for their own dictionary or extend it.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Default stopwords: articles and the most common prepositions and
/// conjunctions.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "is", "in", "at", "of", "on", "and", "a", "to", "it", "for", "with", "as", "was",
    "that", "this", "an", "be",
];

static DEFAULT_SET: LazyLock<StopwordSet> =
    LazyLock::new(|| StopwordSet::from_words(DEFAULT_STOPWORDS.iter().copied()));

/// A set of normalized (lowercase) stopwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from arbitrary words. Entries are lowercased and trimmed;
    /// blank entries are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// An empty set: every normalized word is eligible as a keyword.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Add more words to this set.
    #[must_use]
    pub fn extended<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        self
    }

    /// Whether `word` (already normalized) is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        DEFAULT_SET.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_contains_articles_and_conjunctions() {
        let set = StopwordSet::default();
        for w in ["the", "a", "an", "and", "is", "of"] {
            assert!(set.contains(w), "{w} should be a stopword");
        }
        assert!(!set.contains("rust"));
        assert_eq!(set.len(), DEFAULT_STOPWORDS.len());
    }

    #[test]
    fn from_words_normalizes_entries() {
        let set = StopwordSet::from_words(["  Foo ", "BAR", ""]);
        assert!(set.contains("foo"));
        assert!(set.contains("bar"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn extended_keeps_existing_words() {
        let set = StopwordSet::default().extended(["however"]);
        assert!(set.contains("the"));
        assert!(set.contains("however"));
    }

    #[test]
    fn empty_set_contains_nothing() {
        let set = StopwordSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains("the"));
    }
}
