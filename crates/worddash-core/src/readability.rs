//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = easier text. Both divisors fall back to 1 so blank input
//! scores a finite 206.835 instead of failing.
//!
//! Syllables come from the vowel-run heuristic in [`crate::syllables`], so
//! scores are approximate.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::syllables::SyllableHeuristic;
use crate::text;

/// Coarse readability band derived from a Flesch Reading Ease score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ReadingLevel {
    /// Score above 90.
    #[serde(rename = "Very Easy")]
    VeryEasy,
    /// Score above 80.
    #[serde(rename = "Easy")]
    Easy,
    /// Score above 70.
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    /// Score above 60.
    #[serde(rename = "Standard")]
    Standard,
    /// Score above 50.
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    /// Score above 30.
    #[serde(rename = "Difficult")]
    Difficult,
    /// Score of 30 or below.
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
}

impl ReadingLevel {
    /// Lower bounds (exclusive) for each band, checked from easiest down.
    const THRESHOLDS: [(f64, Self); 6] = [
        (90.0, Self::VeryEasy),
        (80.0, Self::Easy),
        (70.0, Self::FairlyEasy),
        (60.0, Self::Standard),
        (50.0, Self::FairlyDifficult),
        (30.0, Self::Difficult),
    ];

    /// Map a reading-ease score to its band.
    pub fn from_score(score: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| score > *min)
            .map_or(Self::VeryDifficult, |(_, level)| *level)
    }

    /// Human-readable label, e.g. `"Fairly Easy"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
        }
    }
}

impl fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the Flesch Reading Ease score from raw counts.
pub fn reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    let words_per_sentence = words as f64 / sentences.max(1) as f64;
    let syllables_per_word = syllables as f64 / words.max(1) as f64;
    206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word
}

/// Result of readability analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch Reading Ease score.
    pub score: f64,
    /// Band the score falls in.
    pub level: ReadingLevel,
    /// Number of sentences detected.
    pub sentences: usize,
    /// Number of words detected.
    pub words: usize,
    /// Total syllable count.
    pub syllables: usize,
    /// Minimum acceptable score (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Whether the score falls below the minimum.
    pub below_min: bool,
}

/// Score the readability of `text`.
///
/// # Arguments
///
/// * `text` — The text to analyze.
/// * `heuristic` — Syllable rules to count with.
/// * `min_score` — Optional minimum acceptable reading-ease score.
#[tracing::instrument(skip(text, heuristic), fields(text_len = text.len()))]
pub fn check_readability(
    text: &str,
    heuristic: &SyllableHeuristic,
    min_score: Option<f64>,
) -> ReadabilityReport {
    let word_list = text::split_words(text);
    let words = word_list.len();
    let sentences = text::split_sentences(text).len();
    let syllables = heuristic.count_all(word_list.iter().copied());

    let score = reading_ease(words, sentences, syllables);
    let below_min = min_score.is_some_and(|min| score < min);

    ReadabilityReport {
        score,
        level: ReadingLevel::from_score(score),
        sentences,
        words,
        syllables,
        min_score,
        below_min,
    }
}
