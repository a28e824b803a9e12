//! Generate command: write the verb table to a `.docx` document.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use irregular_verbs_core::{Config, VerbEntry, VerbTable, render, table_with_extras};

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Output file (defaults to the configured `output`, then irregular_verbs.docx).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Ignore `extra_verbs` from configuration.
    #[arg(long)]
    pub builtin_only: bool,
}

/// Build the verb table for a command, honoring `--builtin-only`.
pub(crate) fn build_for(config: &Config, builtin_only: bool) -> VerbTable {
    let extras: &[VerbEntry] = if builtin_only {
        &[]
    } else {
        config.extra_verbs.as_deref().unwrap_or_default()
    };
    table_with_extras(extras)
}

/// Build the table and render it to the destination document.
#[instrument(name = "cmd_generate", skip_all, fields(output = ?args.output))]
pub fn cmd_generate(
    args: GenerateArgs,
    global_json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let destination = args.output.unwrap_or_else(|| config.output_path());
    debug!(%destination, builtin_only = args.builtin_only, "executing generate command");

    let table = build_for(config, args.builtin_only);
    let summary = render(&table, &destination)
        .with_context(|| format!("failed to generate {destination}"))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} {}",
            "Document created successfully:".green(),
            summary.path
        );
        println!("Total irregular verbs: {}", summary.rows_written);
    }

    Ok(())
}
