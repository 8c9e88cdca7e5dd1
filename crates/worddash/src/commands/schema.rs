//! Schema command — JSON Schema for the `--json` reports.

use clap::{Args, ValueEnum};
use tracing::{debug, instrument};

use worddash_core::{Keyword, ReadabilityReport, Statistics};

/// Which report to describe.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum SchemaTarget {
    /// Output of `analyze --json` and `live --json`.
    #[default]
    Statistics,
    /// Output of `readability --json`.
    Readability,
    /// Output of `keywords --json`.
    Keywords,
}

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {
    /// Report to describe.
    #[arg(value_enum, default_value_t)]
    pub report: SchemaTarget,
}

/// Print the JSON Schema of a report type.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(args: SchemaArgs) -> anyhow::Result<()> {
    debug!(report = ?args.report, "executing schema command");

    let schema = match args.report {
        SchemaTarget::Statistics => schemars::schema_for!(Statistics),
        SchemaTarget::Readability => schemars::schema_for!(ReadabilityReport),
        SchemaTarget::Keywords => schemars::schema_for!(Vec<Keyword>),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);

    Ok(())
}
