//! Stats CLI command.
//!
//! Computes the headline streak statistics for one parameter set and
//! prints them as a text report or JSON.

use anyhow::Result;
use clap::Args;
use tracing::info;

use martingale_core::{compute_statistics, ReportFormatter};

use super::InputArgs;

/// Arguments for the stats command.
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Emit JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

/// Runs the stats command.
///
/// # Errors
///
/// Returns an error if input resolution or JSON serialization fails.
pub fn run_stats(args: &StatsArgs) -> Result<()> {
    let profile = args.inputs.resolve()?;
    let params = profile.params();
    let stats = compute_statistics(&params);

    info!(
        max_loss_streak = stats.max_loss_streak,
        bust_probability = stats.bust_probability,
        "computed streak statistics"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", ReportFormatter::format(&params, &stats));
    }
    Ok(())
}
