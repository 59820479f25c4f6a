//! CLI commands for the Martingale streak calculator.

pub mod export;
pub mod implied_chance;
pub mod stats;
pub mod table;

pub use export::{run_export, ExportArgs};
pub use implied_chance::{run_implied_chance, ImpliedChanceArgs};
pub use stats::{run_stats, StatsArgs};
pub use table::{run_table, TableArgs};

use anyhow::Result;
use clap::Args;
use tracing::debug;

use martingale_core::{CalcProfile, ProfileLoader};

/// Calculator inputs shared by every subcommand.
///
/// Values resolve in three layers: built-in defaults, then an optional
/// TOML profile (plus `MARTINGALE_` environment overrides), then any
/// flag given here.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Profile TOML file (flags override profile values)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Bankroll available to absorb losses
    #[arg(long)]
    pub balance: Option<f64>,

    /// Size of the first wager
    #[arg(long)]
    pub base_bet: Option<f64>,

    /// Gross payout multiple on a win, before house edge
    #[arg(long)]
    pub payout: Option<f64>,

    /// Win probability per round, in percent
    #[arg(long)]
    pub chance: Option<f64>,

    /// Factor applied to the bet after each loss
    #[arg(long)]
    pub multiplier: Option<f64>,

    /// Percentage skimmed from the payout
    #[arg(long)]
    pub house_edge: Option<f64>,

    /// Progression table depth
    #[arg(long)]
    pub rows: Option<u32>,

    /// Derive chance from payout and house edge instead of --chance
    #[arg(long)]
    pub sync: bool,
}

impl InputArgs {
    /// Resolves the layered inputs into a single profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile file cannot be loaded.
    pub fn resolve(&self) -> Result<CalcProfile> {
        let mut profile = match &self.config {
            Some(path) => ProfileLoader::load(path)?,
            None => CalcProfile::default(),
        };

        if let Some(balance) = self.balance {
            profile.balance = balance;
        }
        if let Some(base_bet) = self.base_bet {
            profile.base_bet = base_bet;
        }
        if let Some(payout) = self.payout {
            profile.payout = payout;
        }
        if let Some(chance) = self.chance {
            profile.chance = chance;
        }
        if let Some(multiplier) = self.multiplier {
            profile.multiplier = multiplier;
        }
        if let Some(house_edge) = self.house_edge {
            profile.house_edge = house_edge;
        }
        if let Some(rows) = self.rows {
            profile.rows = rows;
        }
        if self.sync {
            profile.sync_chance = true;
        }

        debug!(?profile, "resolved calculator inputs");
        Ok(profile)
    }
}
