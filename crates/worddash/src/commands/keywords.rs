//! Keywords command — most frequent non-stopword words.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use worddash_core::{Config, StopwordSet};

use super::{is_markdown, read_input};

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Number of keywords to list.
    #[arg(long, short = 'n', value_name = "N")]
    pub limit: Option<usize>,

    /// Extra stopwords to ignore (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub stopwords: Vec<String>,

    /// Rank every word, stopwords included.
    #[arg(long, conflicts_with = "stopwords")]
    pub all_words: bool,
}

/// List the top keywords of a file.
#[instrument(name = "cmd_keywords", skip_all, fields(file = %args.file))]
pub fn cmd_keywords(args: KeywordsArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, limit = ?args.limit, "executing keywords command");

    let content = read_input(&args.file, config.input_limit())?;

    let stopwords = if args.all_words {
        StopwordSet::empty()
    } else {
        config.stopword_set().extended(&args.stopwords)
    };
    let analyzer = config
        .analyzer()
        .with_stopwords(stopwords)
        .with_keyword_limit(args.limit.unwrap_or(config.keyword_limit))
        .with_markdown_stripping(config.strip_markdown || is_markdown(&args.file));

    let keywords = analyzer.keywords(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&keywords)?);
    } else if keywords.is_empty() {
        println!("{}", "no keywords found".dimmed());
    } else {
        let width = keywords
            .iter()
            .map(|k| k.count.to_string().len())
            .max()
            .unwrap_or(1);
        for k in &keywords {
            println!("{}  {}", format!("{:>width$}", k.count).yellow(), k.word);
        }
    }

    Ok(())
}
