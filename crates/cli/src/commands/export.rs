//! Export CLI command.
//!
//! Writes the loss progression table as CSV to a file or stdout.

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use martingale_core::{build_progression, write_csv};

use super::InputArgs;

/// Arguments for the export command.
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Output CSV file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Runs the export command.
///
/// # Errors
///
/// Returns an error if input resolution fails or the output cannot be
/// written.
pub fn run_export(args: &ExportArgs) -> Result<()> {
    let profile = args.inputs.resolve()?;
    let rows = build_progression(&profile.params(), profile.rows);

    let written = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {path}"))?;
            write_csv(BufWriter::new(file), rows)?
        }
        None => write_csv(std::io::stdout().lock(), rows)?,
    };

    if let Some(path) = &args.output {
        info!(rows = written, path, "wrote progression CSV");
    }
    Ok(())
}
