//! List command: print the verb table without writing a document.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use irregular_verbs_core::Config;
use irregular_verbs_core::render::HEADER;

use super::format_rows;
use super::generate::build_for;

/// Arguments for the `list` subcommand.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Ignore `extra_verbs` from configuration.
    #[arg(long)]
    pub builtin_only: bool,
}

/// Print the deduplicated, sorted verb table.
#[instrument(name = "cmd_list", skip_all)]
pub fn cmd_list(args: ListArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(builtin_only = args.builtin_only, "executing list command");

    let table = build_for(config, args.builtin_only);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    let mut lines = format_rows(HEADER, table.entries()).into_iter();
    if let Some(header) = lines.next() {
        println!("{}", header.bold());
    }
    for line in lines {
        println!("{line}");
    }
    println!();
    println!("{}: {}", "Total irregular verbs".dimmed(), table.len());

    Ok(())
}
