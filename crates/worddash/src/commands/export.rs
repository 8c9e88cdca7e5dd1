//! Export command — save the raw text to a plain-text file.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use worddash_core::Config;
use worddash_core::export::{DEFAULT_EXPORT_FILE, export_text};

use super::{display_name, read_input};

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Text to export (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Destination file (default: worddash-text.txt).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,

    /// Overwrite the destination if it exists.
    #[arg(long)]
    pub force: bool,
}

#[derive(Serialize)]
struct ExportSummary<'a> {
    source: &'a str,
    path: &'a Utf8Path,
    bytes: usize,
}

/// Copy the input, unchanged, to a UTF-8 text file.
#[instrument(name = "cmd_export", skip_all, fields(file = %args.file))]
pub fn cmd_export(args: ExportArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, output = ?args.output, force = args.force, "executing export command");

    let content = read_input(&args.file, config.input_limit())?;

    let output = args
        .output
        .or_else(|| config.export_file.clone())
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_EXPORT_FILE));

    let bytes = export_text(&content, &output, args.force)?;

    if global_json {
        let summary = ExportSummary {
            source: display_name(&args.file),
            path: &output,
            bytes,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} {} bytes to {}",
            "Exported".green(),
            bytes,
            output.cyan()
        );
    }

    Ok(())
}
