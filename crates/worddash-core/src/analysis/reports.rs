//! Report structs produced by the analyzer.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for use
//! in CLI JSON output and the published schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::keywords::Keyword;
use crate::readability::ReadingLevel;

/// Every metric derived from one input string.
///
/// Recomputed from scratch on each call; two calls on the same input yield
/// equal values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Statistics {
    /// Whitespace-delimited tokens after trimming.
    pub word_count: usize,
    /// Characters in the raw input, whitespace included.
    ///
    /// With markdown stripping enabled this counts the remaining prose, not
    /// the markup that was removed.
    pub char_count: usize,
    /// Characters in the raw input with whitespace removed. Follows
    /// `char_count` when markdown is stripped.
    pub char_count_no_spaces: usize,
    /// Minutes to read at the configured pace, rounded up.
    pub reading_time_minutes: usize,
    /// Non-empty segments between runs of `.`, `!` or `?`.
    pub sentence_count: usize,
    /// Non-empty segments between blank lines.
    pub paragraph_count: usize,
    /// Longest raw token, punctuation included. Empty when there are no words.
    pub longest_word: String,
    /// Mean raw token length, rounded to two decimals. Zero when there are
    /// no words.
    pub average_word_length: f64,
    /// Most frequent non-stopword words, most frequent first.
    pub top_keywords: Vec<Keyword>,
    /// Readability band for [`Statistics::reading_ease`].
    pub reading_level: ReadingLevel,
    /// Flesch Reading Ease score.
    pub reading_ease: f64,
    /// Heuristic syllable total across all tokens.
    pub syllable_count: usize,
}

impl Statistics {
    /// Whether the input held no words at all.
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
