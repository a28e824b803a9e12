//! Inspect command: read back a generated document.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use irregular_verbs_core::{TableContents, inspect};

use super::format_rows;

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Document to read.
    pub file: Utf8PathBuf,
}

#[derive(Serialize)]
struct InspectReport<'a> {
    #[serde(flatten)]
    contents: &'a TableContents,
    /// Table rows including the header.
    row_count: usize,
}

/// Print the title, row count, and rows of a generated document.
#[instrument(name = "cmd_inspect", skip_all, fields(file = %args.file))]
pub fn cmd_inspect(args: InspectArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing inspect command");

    let contents =
        inspect(&args.file).with_context(|| format!("failed to inspect {}", args.file))?;

    if global_json {
        let report = InspectReport {
            contents: &contents,
            row_count: contents.row_count(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", contents.title().unwrap_or("(untitled)").bold());
    println!(
        "{}: {} (header + {} verbs)",
        "Rows".dimmed(),
        contents.row_count(),
        contents.rows.len()
    );
    println!();
    let header = contents.header.each_ref().map(String::as_str);
    for line in format_rows(header, &contents.rows) {
        println!("{line}");
    }

    Ok(())
}
