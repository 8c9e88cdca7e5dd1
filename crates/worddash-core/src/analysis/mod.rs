//! Text statistics.
//!
//! [`Analyzer`] turns one input string into a [`Statistics`] record. It is a
//! pure transformation: no I/O, no hidden state, and no failure mode. Every
//! string, including the empty string, produces a valid result.
//!
//! ```
//! use worddash_core::analyze;
//!
//! let stats = analyze("Hello world. This is great!");
//! assert_eq!(stats.word_count, 5);
//! assert_eq!(stats.sentence_count, 2);
//! assert_eq!(stats.longest_word, "great!");
//! ```

pub mod reports;

use std::borrow::Cow;

pub use reports::Statistics;

use crate::keywords::{self, DEFAULT_KEYWORD_LIMIT, Keyword};
use crate::markdown;
use crate::readability::{self, ReadabilityReport, ReadingLevel};
use crate::stopwords::StopwordSet;
use crate::syllables::SyllableHeuristic;
use crate::text;

/// Average adult silent reading pace.
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Analyze `text` with default settings.
pub fn analyze(text: &str) -> Statistics {
    Analyzer::default().analyze(text)
}

/// Configurable text analyzer.
///
/// Holds the dictionaries and tuning knobs; immutable once built, so one
/// instance can serve any number of inputs.
#[derive(Debug, Clone)]
pub struct Analyzer {
    stopwords: StopwordSet,
    syllables: SyllableHeuristic,
    words_per_minute: usize,
    keyword_limit: usize,
    strip_markdown: bool,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            stopwords: StopwordSet::default(),
            syllables: SyllableHeuristic::default(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
            strip_markdown: false,
        }
    }
}

impl Analyzer {
    /// Create an analyzer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stopword set used for keyword ranking.
    #[must_use]
    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Replace the syllable rules used for readability.
    #[must_use]
    pub fn with_syllable_heuristic(mut self, syllables: SyllableHeuristic) -> Self {
        self.syllables = syllables;
        self
    }

    /// Set the reading pace. Zero is treated as one word per minute.
    #[must_use]
    pub fn with_words_per_minute(mut self, words_per_minute: usize) -> Self {
        self.words_per_minute = words_per_minute.max(1);
        self
    }

    /// Set how many keywords to report.
    #[must_use]
    pub const fn with_keyword_limit(mut self, limit: usize) -> Self {
        self.keyword_limit = limit;
        self
    }

    /// Strip markdown formatting before analysis.
    ///
    /// Code, headings and markup are removed; paragraph breaks survive. All
    /// counts, character counts included, then describe the remaining prose.
    #[must_use]
    pub const fn with_markdown_stripping(mut self, strip: bool) -> Self {
        self.strip_markdown = strip;
        self
    }

    /// The stopword set in use.
    pub const fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// The syllable rules in use.
    pub const fn syllable_heuristic(&self) -> &SyllableHeuristic {
        &self.syllables
    }

    /// Words per minute used for reading time.
    pub const fn words_per_minute(&self) -> usize {
        self.words_per_minute
    }

    /// Maximum number of keywords reported.
    pub const fn keyword_limit(&self) -> usize {
        self.keyword_limit
    }

    fn prose<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.strip_markdown {
            Cow::Owned(markdown::strip_to_prose(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Compute every metric for `text`.
    #[tracing::instrument(skip_all, fields(text_len = text.len(), strip_md = self.strip_markdown))]
    pub fn analyze(&self, text: &str) -> Statistics {
        let prose = self.prose(text);
        let prose = prose.as_ref();

        let words = text::split_words(prose);
        let word_count = words.len();
        let sentence_count = text::split_sentences(prose).len();
        let paragraph_count = text::split_paragraphs(prose).len();

        let mut longest_word = "";
        let mut longest_len = 0;
        let mut total_len = 0;
        for &word in &words {
            let len = text::char_len(word);
            total_len += len;
            if len > longest_len {
                longest_word = word;
                longest_len = len;
            }
        }

        let average_word_length = if word_count == 0 {
            0.0
        } else {
            round2(total_len as f64 / word_count as f64)
        };

        let syllable_count = self.syllables.count_all(words.iter().copied());
        let reading_ease = readability::reading_ease(word_count, sentence_count, syllable_count);

        let stats = Statistics {
            word_count,
            char_count: text::char_len(prose),
            char_count_no_spaces: text::char_len_without_whitespace(prose),
            reading_time_minutes: word_count.div_ceil(self.words_per_minute),
            sentence_count,
            paragraph_count,
            longest_word: longest_word.to_string(),
            average_word_length,
            top_keywords: keywords::top_keywords(&words, &self.stopwords, self.keyword_limit),
            reading_level: ReadingLevel::from_score(reading_ease),
            reading_ease,
            syllable_count,
        };

        tracing::debug!(
            words = stats.word_count,
            sentences = stats.sentence_count,
            level = %stats.reading_level,
            "analysis complete"
        );
        stats
    }

    /// Score readability only, optionally gated on a minimum score.
    pub fn readability(&self, text: &str, min_score: Option<f64>) -> ReadabilityReport {
        let prose = self.prose(text);
        readability::check_readability(prose.as_ref(), &self.syllables, min_score)
    }

    /// Rank keywords only.
    pub fn keywords(&self, text: &str) -> Vec<Keyword> {
        let prose = self.prose(text);
        let words = text::split_words(prose.as_ref());
        keywords::top_keywords(&words, &self.stopwords, self.keyword_limit)
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_all_zero() {
        let stats = analyze("");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.char_count, 0);
        assert_eq!(stats.char_count_no_spaces, 0);
        assert_eq!(stats.sentence_count, 0);
        assert_eq!(stats.paragraph_count, 0);
        assert_eq!(stats.longest_word, "");
        assert_eq!(stats.average_word_length, 0.0);
        assert!(stats.top_keywords.is_empty());
        assert_eq!(stats.reading_time_minutes, 0);
        assert_eq!(stats.syllable_count, 0);
        assert!(stats.reading_ease.is_finite());
        assert!(stats.is_empty());
    }

    #[test]
    fn whitespace_only_input() {
        let stats = analyze("  \n\n\t ");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.char_count, 6);
        assert_eq!(stats.char_count_no_spaces, 0);
        assert_eq!(stats.paragraph_count, 0);
        assert_eq!(stats.longest_word, "");
    }

    #[test]
    fn punctuation_only_input() {
        let stats = analyze("?!... --- !!!");
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.sentence_count, 1);
        assert!(stats.top_keywords.is_empty());
        assert!(stats.reading_ease.is_finite());
    }

    #[test]
    fn hello_world_example() {
        let stats = analyze("Hello world. This is great!");
        assert_eq!(stats.word_count, 5);
        assert_eq!(stats.sentence_count, 2);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.longest_word, "great!");
        assert_eq!(stats.char_count, 27);
        assert_eq!(stats.char_count_no_spaces, 23);
        assert_eq!(stats.average_word_length, 4.6);
        assert_eq!(stats.reading_time_minutes, 1);
    }

    #[test]
    fn longest_word_tie_keeps_first() {
        let stats = analyze("abc xyz de");
        assert_eq!(stats.longest_word, "abc");
    }

    #[test]
    fn longest_word_counts_characters() {
        // "ééé" is longer in bytes but shorter in characters.
        let stats = analyze("ééé abcd");
        assert_eq!(stats.longest_word, "abcd");
        assert_eq!(stats.char_count, 8);
    }

    #[test]
    fn average_word_length_rounds_to_two_places() {
        // 1 + 2 + 2 = 5 chars over 3 words = 1.666...
        let stats = analyze("a bb cc");
        assert_eq!(stats.average_word_length, 1.67);
    }

    #[test]
    fn raw_tokens_keep_punctuation_but_keywords_do_not() {
        let stats = analyze("Rust, rust! RUST.");
        assert_eq!(stats.longest_word, "Rust,");
        assert_eq!(stats.top_keywords.len(), 1);
        assert_eq!(stats.top_keywords[0].word, "rust");
        assert_eq!(stats.top_keywords[0].count, 3);
    }

    #[test]
    fn reading_time_boundaries() {
        let two_hundred = vec!["word"; 200].join(" ");
        assert_eq!(analyze(&two_hundred).reading_time_minutes, 1);

        let two_hundred_one = vec!["word"; 201].join(" ");
        assert_eq!(analyze(&two_hundred_one).reading_time_minutes, 2);

        assert_eq!(analyze("one").reading_time_minutes, 1);
    }

    #[test]
    fn custom_reading_pace() {
        let text = vec!["word"; 300].join(" ");
        let stats = Analyzer::new().with_words_per_minute(100).analyze(&text);
        assert_eq!(stats.reading_time_minutes, 3);

        let stats = Analyzer::new().with_words_per_minute(0).analyze("a b");
        assert_eq!(stats.reading_time_minutes, 2);
    }

    #[test]
    fn keywords_never_include_stopwords() {
        let stats = analyze(
            "The cat and the dog is on the mat. It was the best of it, as that is an end.",
        );
        let stop = StopwordSet::default();
        assert!(stats.top_keywords.len() <= 5);
        assert!(stats.top_keywords.iter().all(|k| !stop.contains(&k.word)));
    }

    #[test]
    fn custom_keyword_limit_and_stopwords() {
        let analyzer = Analyzer::new()
            .with_keyword_limit(2)
            .with_stopwords(StopwordSet::from_words(["cat"]));
        let stats = analyzer.analyze("cat cat cat the the dog bird");
        let words: Vec<_> = stats.top_keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["the", "dog"]);
    }

    #[test]
    fn paragraphs_and_sentences() {
        let text = "First line. Second sentence!\nSame paragraph?\n\nNew paragraph here.";
        let stats = analyze(text);
        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.sentence_count, 4);
    }

    #[test]
    fn analysis_is_deterministic() {
        let text = "Repeatable input. Repeatable output! zebra apple zebra apple";
        let first = analyze(text);
        let second = analyze(text);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn appending_a_word_never_decreases_counts() {
        let base = "Some text. With a few words";
        for extra in ["more", "!!", "x", "supercalifragilistic"] {
            let before = analyze(base);
            let after = analyze(&format!("{base} {extra}"));
            assert!(after.word_count >= before.word_count);
            assert!(after.char_count >= before.char_count);
            assert!(after.char_count_no_spaces >= before.char_count_no_spaces);
        }
    }

    #[test]
    fn invariants_hold_for_assorted_inputs() {
        let inputs = [
            "",
            " ",
            "word",
            "...",
            "a\n\n\nb",
            "Tabs\tand\u{00a0}non-breaking spaces.",
            "日本語 のテキスト。",
        ];
        for input in inputs {
            let stats = analyze(input);
            assert!(stats.char_count_no_spaces <= stats.char_count, "{input:?}");
            assert_eq!(stats.word_count == 0, stats.longest_word.is_empty(), "{input:?}");
            assert!(stats.top_keywords.len() <= 5);
        }
    }

    #[test]
    fn markdown_stripping_ignores_code_and_headings() {
        let md = "# Title\n\nThe cat sat.\n\n```rust\nlet x = 1;\n```\n\nThe dog ran.";
        let plain = analyze(md);
        let stripped = Analyzer::new().with_markdown_stripping(true).analyze(md);
        assert!(stripped.word_count < plain.word_count);
        assert_eq!(stripped.word_count, 6);
        assert_eq!(stripped.paragraph_count, 2);
    }

    #[test]
    fn char_counts_follow_stripped_prose() {
        let md = "# Title\n\n**Bold** words.";
        let raw = analyze(md);
        assert_eq!(raw.char_count, md.chars().count());

        let stripped = Analyzer::new().with_markdown_stripping(true).analyze(md);
        let prose = markdown::strip_to_prose(md);
        assert_eq!(stripped.char_count, text::char_len(&prose));
        assert_eq!(
            stripped.char_count_no_spaces,
            text::char_len_without_whitespace(&prose)
        );
        assert!(stripped.char_count < raw.char_count);
    }

    #[test]
    fn readability_matches_full_analysis() {
        let analyzer = Analyzer::new();
        let text = "The cat sat on the mat. The dog ran fast.";
        let stats = analyzer.analyze(text);
        let report = analyzer.readability(text, Some(50.0));
        assert_eq!(report.level, stats.reading_level);
        assert_eq!(report.syllables, stats.syllable_count);
        assert!((report.score - stats.reading_ease).abs() < f64::EPSILON);
        assert!(!report.below_min);
    }

    #[test]
    fn keywords_shortcut_matches_full_analysis() {
        let analyzer = Analyzer::new();
        let text = "alpha beta alpha gamma";
        assert_eq!(analyzer.keywords(text), analyzer.analyze(text).top_keywords);
    }
}
