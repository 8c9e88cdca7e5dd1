//! Live command — re-analyze stdin as it arrives.
//!
//! Each line, terminator included, is appended to the buffer and the whole
//! buffer is analyzed again; the spinner message always reflects the text
//! so far.

use std::io::BufRead;

use anyhow::{Context, bail};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, instrument, trace};

use worddash_core::Config;

use super::analyze::{print_statistics, summary_line};

/// Arguments for the `live` subcommand.
#[derive(Args, Debug, Default)]
pub struct LiveArgs {
    /// Strip markdown before each analysis.
    #[arg(long)]
    pub strip_markdown: bool,
}

/// Read stdin line by line, refreshing statistics after each line.
///
/// Prints the final report once stdin closes.
#[instrument(name = "cmd_live", skip_all)]
pub fn cmd_live(args: LiveArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(strip_markdown = args.strip_markdown, "executing live command");

    let analyzer = config
        .analyzer()
        .with_markdown_stripping(args.strip_markdown || config.strip_markdown);
    let limit = config.input_limit();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(summary_line(&analyzer.analyze("")));

    let mut buffer = String::new();
    let mut stdin = std::io::stdin().lock();
    let mut lines = 0usize;
    loop {
        // Keeps the line terminator, so the buffer matches stdin byte for byte.
        let read = stdin
            .read_line(&mut buffer)
            .context("failed to read stdin")?;
        if read == 0 {
            break;
        }
        lines += 1;

        if let Some(max) = limit
            && buffer.len() > max
        {
            spinner.finish_and_clear();
            bail!("input too large: stdin exceeds {max} bytes");
        }

        let stats = analyzer.analyze(&buffer);
        trace!(line = lines, words = stats.word_count, "refreshed");
        spinner.set_message(summary_line(&stats));
        spinner.tick();
    }
    spinner.finish_and_clear();

    let stats = analyzer.analyze(&buffer);
    if global_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_statistics("<stdin>", &stats);
    }

    Ok(())
}
