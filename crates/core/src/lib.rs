//! Streak statistics and progression tables for Martingale wagering on
//! Dice/Limbo style probability games.
//!
//! Everything here is a pure, synchronous function over scalar inputs:
//! callers (a CLI, a service, a test harness) supply a [`BetParams`] and
//! render the resulting [`StreakStats`] or [`ProgressionRow`] sequence.

pub mod config;
pub mod export;
pub mod format;
pub mod params;
pub mod progression;
pub mod report;
pub mod streak;

pub use config::{CalcProfile, ProfileLoader};
pub use export::{csv_string, write_csv};
pub use params::{BetParams, CHANCE_EPSILON};
pub use progression::{build_progression, Progression, ProgressionRow};
pub use report::ReportFormatter;
pub use streak::{compute_statistics, cumulative_stake, implied_chance, StreakStats};
