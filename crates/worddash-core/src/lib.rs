//! Core library for worddash.
//!
//! Computes text statistics (word and character counts, reading time,
//! sentence and paragraph counts, longest word, average word length,
//! readability, and top keywords) for the `worddash` CLI and any downstream
//! consumers.
//!
//! # Modules
//!
//! - [`analysis`] - The analyzer and its [`Statistics`] report
//! - [`text`] - Word, sentence, and paragraph segmentation
//! - [`syllables`] - Heuristic syllable counting
//! - [`readability`] - Flesch Reading Ease scoring
//! - [`keywords`] - Keyword frequency ranking
//! - [`stopwords`] - Stopword sets
//! - [`markdown`] - Markdown-to-prose stripping
//! - [`export`] - Plain-text export of the raw input
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use worddash_core::{Analyzer, ReadingLevel};
//!
//! let stats = Analyzer::new().analyze("The cat sat on the mat.");
//! assert_eq!(stats.word_count, 6);
//! assert_eq!(stats.reading_level, ReadingLevel::VeryEasy);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod keywords;
pub mod markdown;
pub mod readability;
pub mod stopwords;
pub mod syllables;
pub mod text;

pub use analysis::{Analyzer, Statistics, analyze};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, ExportError, ExportResult};
pub use keywords::Keyword;
pub use readability::{ReadabilityReport, ReadingLevel};
pub use stopwords::StopwordSet;
pub use syllables::SyllableHeuristic;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
