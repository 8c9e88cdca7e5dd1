//! Readability command — Flesch Reading Ease scoring.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use worddash_core::Config;

use super::{display_name, is_markdown, read_input};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Minimum acceptable reading-ease score (higher is easier).
    #[arg(long)]
    pub min_score: Option<f64>,
}

/// Score readability of a file using Flesch Reading Ease.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing readability command");

    let content = read_input(&args.file, config.input_limit())?;

    let strip_md = config.strip_markdown || is_markdown(&args.file);
    let min_score = args.min_score.or(config.min_reading_ease);

    let report = config
        .analyzer()
        .with_markdown_stripping(strip_md)
        .readability(&content, min_score);
    let name = display_name(&args.file);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.below_min {
        let min = report.min_score.unwrap_or(0.0);
        bail!(
            "{} scores {:.1} ({}), below minimum {:.0}. Shorten sentences or use simpler words.",
            name,
            report.score,
            report.level,
            min,
        );
    } else if let Some(min) = report.min_score {
        println!(
            "{} {} scores {:.1} ({}, min: {:.0})",
            "PASS:".green(),
            name,
            report.score,
            report.level,
            min,
        );
    } else {
        println!("{:.1} ({})", report.score, report.level);
    }

    Ok(())
}
