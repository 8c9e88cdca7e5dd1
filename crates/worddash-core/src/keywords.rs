//! Keyword frequency ranking.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::stopwords::StopwordSet;
use crate::text;

/// Number of keywords reported by default.
pub const DEFAULT_KEYWORD_LIMIT: usize = 5;

/// A normalized word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Keyword {
    /// Lowercased word with non-word characters removed.
    pub word: String,
    /// Occurrences in the input.
    pub count: usize,
}

/// Rank the most frequent non-stopword words.
///
/// Each raw token is normalized with [`text::normalize_word`]; empty results
/// and stopwords are skipped. Ties keep the order in which words first
/// appeared.
#[tracing::instrument(skip_all, fields(words = words.len(), limit = limit))]
pub fn top_keywords(words: &[&str], stopwords: &StopwordSet, limit: usize) -> Vec<Keyword> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut tally: Vec<Keyword> = Vec::new();

    for raw in words {
        let word = text::normalize_word(raw);
        if word.is_empty() || stopwords.contains(&word) {
            continue;
        }
        match index.get(&word) {
            Some(&i) => tally[i].count += 1,
            None => {
                index.insert(word.clone(), tally.len());
                tally.push(Keyword { word, count: 1 });
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-seen order
    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally.truncate(limit);
    tally
}
