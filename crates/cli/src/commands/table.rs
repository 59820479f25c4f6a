//! Table CLI command.
//!
//! Prints the loss progression table to the requested depth.

use anyhow::Result;
use clap::Args;

use martingale_core::{build_progression, ProgressionRow, ReportFormatter};

use super::InputArgs;

/// Arguments for the table command.
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Emit JSON rows instead of the text table
    #[arg(long)]
    pub json: bool,
}

/// Runs the table command.
///
/// # Errors
///
/// Returns an error if input resolution or JSON serialization fails.
pub fn run_table(args: &TableArgs) -> Result<()> {
    let profile = args.inputs.resolve()?;
    let rows = build_progression(&profile.params(), profile.rows);

    if args.json {
        let rows: Vec<ProgressionRow> = rows.collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", ReportFormatter::format_table(rows));
    }
    Ok(())
}
