//! Analyze command — full text statistics.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use worddash_core::{Config, Statistics};

use super::{display_name, is_markdown, read_input};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Strip markdown before analysis (implied for .md files).
    #[arg(long, conflicts_with = "raw")]
    pub strip_markdown: bool,

    /// Analyze markdown files as-is, markup included.
    #[arg(long)]
    pub raw: bool,

    /// Number of keywords to report.
    #[arg(long, value_name = "N")]
    pub keywords: Option<usize>,

    /// Reading pace in words per minute.
    #[arg(long, value_name = "N")]
    pub wpm: Option<usize>,
}

/// Compute and print every statistic for a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(args: AnalyzeArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, keywords = ?args.keywords, wpm = ?args.wpm, "executing analyze command");

    let content = read_input(&args.file, config.input_limit())?;

    let strip_md =
        !args.raw && (args.strip_markdown || config.strip_markdown || is_markdown(&args.file));
    let mut analyzer = config.analyzer().with_markdown_stripping(strip_md);
    if let Some(limit) = args.keywords {
        analyzer = analyzer.with_keyword_limit(limit);
    }
    if let Some(wpm) = args.wpm {
        analyzer = analyzer.with_words_per_minute(wpm);
    }

    let stats = analyzer.analyze(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_statistics(display_name(&args.file), &stats);
    }

    Ok(())
}

/// Render a statistics block for humans.
pub fn print_statistics(label: &str, stats: &Statistics) {
    println!("{}", label.bold());
    println!("  {} {}", "Words:          ".cyan(), stats.word_count);
    println!(
        "  {} {} ({} without spaces)",
        "Characters:     ".cyan(),
        stats.char_count,
        stats.char_count_no_spaces,
    );
    println!("  {} {}", "Sentences:      ".cyan(), stats.sentence_count);
    println!("  {} {}", "Paragraphs:     ".cyan(), stats.paragraph_count);
    println!(
        "  {} {} min",
        "Reading time:   ".cyan(),
        stats.reading_time_minutes
    );

    if stats.is_empty() {
        println!("  {} {}", "Longest word:   ".cyan(), "-".dimmed());
    } else {
        println!("  {} {}", "Longest word:   ".cyan(), stats.longest_word);
    }
    println!(
        "  {} {:.2}",
        "Avg word length:".cyan(),
        stats.average_word_length
    );
    println!(
        "  {} {} (score {:.1})",
        "Reading level:  ".cyan(),
        stats.reading_level.bold(),
        stats.reading_ease,
    );

    if stats.top_keywords.is_empty() {
        println!("  {} {}", "Top keywords:   ".cyan(), "none".dimmed());
    } else {
        let top: Vec<_> = stats
            .top_keywords
            .iter()
            .map(|k| format!("{} ({})", k.word, k.count))
            .collect();
        println!("  {} {}", "Top keywords:   ".cyan(), top.join(", "));
    }
}

/// One-line summary used by live mode.
pub fn summary_line(stats: &Statistics) -> String {
    format!(
        "{} words | {} chars | {} sentences | {} paragraphs | {} min | {}",
        stats.word_count,
        stats.char_count,
        stats.sentence_count,
        stats.paragraph_count,
        stats.reading_time_minutes,
        stats.reading_level,
    )
}
