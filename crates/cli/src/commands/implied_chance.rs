//! Implied-chance CLI command.
//!
//! Prints the fair win chance implied by a payout and house edge under
//! a zero-expected-value assumption.

use anyhow::Result;
use clap::Args;

use martingale_core::{format, implied_chance};

/// Arguments for the implied-chance command.
#[derive(Args, Debug, Clone)]
pub struct ImpliedChanceArgs {
    /// Gross payout multiple on a win, before house edge
    #[arg(long, default_value = "2.0")]
    pub payout: f64,

    /// Percentage skimmed from the payout
    #[arg(long, default_value = "1.0")]
    pub house_edge: f64,
}

/// Runs the implied-chance command.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run_implied_chance(args: &ImpliedChanceArgs) -> Result<()> {
    let chance = implied_chance(args.payout, args.house_edge);
    let actual = (args.payout * (1.0 - args.house_edge / 100.0)).max(0.0);

    println!(
        "implied chance: {} (payout after edge: {})",
        format::percent(chance),
        format::multiple(actual)
    );
    Ok(())
}
