//! Heuristic syllable counting.
//!
//! Counts syllables by vowel runs after trimming common silent endings. This
//! is an approximation, not a phonetic dictionary: "queue" counts as one,
//! "naive" as one, and some `-ed` past tenses lose a real syllable. Those
//! misses are an accepted limitation of the readability score, not bugs.
//!
//! The rules are held in [`SyllableHeuristic`] so callers can swap the
//! vowel set or ending patterns for other dictionaries.

use std::sync::LazyLock;

use regex::Regex;

/// Endings removed before counting: consonant + `es`, `ed`, consonant +
/// silent `e`. `l` is excluded from the consonant class so "-ble"/"-ple"
/// keep their final syllable.
pub const DEFAULT_SILENT_SUFFIX: &str = r"(?:[^laeiouy]es|ed|[^laeiouy]e)$";

/// A leading `y` acts as a consonant ("yes", "yellow").
pub const DEFAULT_LEADING_STRIP: &str = r"^y";

/// Characters counted as vowels.
pub const DEFAULT_VOWELS: &str = "aeiouy";

/// Words this short (in characters) always count as one syllable.
pub const DEFAULT_SHORT_WORD_MAX: usize = 3;

static DEFAULT_HEURISTIC: LazyLock<SyllableHeuristic> = LazyLock::new(|| SyllableHeuristic {
    vowels: DEFAULT_VOWELS.chars().collect(),
    short_word_max: DEFAULT_SHORT_WORD_MAX,
    silent_suffix: Regex::new(DEFAULT_SILENT_SUFFIX).expect("valid regex"),
    leading_strip: Regex::new(DEFAULT_LEADING_STRIP).expect("valid regex"),
});

/// Rules for estimating the syllables in a word.
#[derive(Debug, Clone)]
pub struct SyllableHeuristic {
    vowels: Vec<char>,
    short_word_max: usize,
    silent_suffix: Regex,
    leading_strip: Regex,
}

impl SyllableHeuristic {
    /// Build a heuristic from custom rules.
    ///
    /// # Errors
    ///
    /// Returns an error if either pattern is not a valid regular expression.
    pub fn new(
        vowels: &str,
        short_word_max: usize,
        silent_suffix: &str,
        leading_strip: &str,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            vowels: vowels.to_lowercase().chars().collect(),
            short_word_max,
            silent_suffix: Regex::new(silent_suffix)?,
            leading_strip: Regex::new(leading_strip)?,
        })
    }

    /// Estimate the syllables in a single word token.
    ///
    /// Always returns at least 1, even for tokens with no vowels or no
    /// letters at all.
    pub fn count(&self, word: &str) -> usize {
        let word = word.to_lowercase();
        if word.chars().count() <= self.short_word_max {
            return 1;
        }

        let trimmed = self.silent_suffix.replace(&word, "");
        let trimmed = self.leading_strip.replace(&trimmed, "");

        let mut runs = 0;
        let mut in_run = false;
        for ch in trimmed.chars() {
            let is_vowel = self.vowels.contains(&ch);
            if is_vowel && !in_run {
                runs += 1;
            }
            in_run = is_vowel;
        }

        runs.max(1)
    }

    /// Total syllables across a sequence of word tokens.
    pub fn count_all<'a, I>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        words.into_iter().map(|w| self.count(w)).sum()
    }
}

impl Default for SyllableHeuristic {
    fn default() -> Self {
        DEFAULT_HEURISTIC.clone()
    }
}

/// Count syllables in `word` with the default heuristic.
pub fn count_syllables(word: &str) -> usize {
    DEFAULT_HEURISTIC.count(word)
}
