//! Text segmentation.
//!
//! Splits raw input into words, sentences, and paragraphs. Splitting is
//! purely lexical: a sentence ends at any run of `.`, `!` or `?`, so "Dr."
//! and "3.14" both end a sentence.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of sentence-ending punctuation.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Two or more consecutive newlines.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid regex"));

/// Split text into raw word tokens.
///
/// Tokens keep their case and punctuation. Whitespace-only input yields no
/// tokens.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text into sentences, dropping segments that are blank after
/// trimming.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into paragraphs separated by blank lines.
///
/// A single newline continues the paragraph. Lines holding only spaces do not
/// count as blank: `"a\n \nb"` is one paragraph.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Normalize a raw token for keyword ranking: lowercase it and drop every
/// character outside `[a-z0-9_]`.
///
/// Only ASCII counts as a word character, so `café` becomes `caf` and a
/// token with no ASCII letters or digits normalizes to the empty string.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Number of non-whitespace characters in `text`.
pub fn char_len_without_whitespace(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}
