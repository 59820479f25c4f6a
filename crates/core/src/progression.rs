//! Row-by-row loss progression table.
//!
//! Each row describes the state of the progression if the player has
//! lost every round up to that depth: the bet on the table, everything
//! staked so far, the profit of winning exactly there, and how likely
//! the streak is. Rows are generated lazily; callers choose how deep to
//! look, including past the sustainable streak.

use serde::{Deserialize, Serialize};

use crate::params::BetParams;

/// One depth of the loss progression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionRow {
    /// 1-based loss depth.
    pub loss_index: u32,
    /// Bet size after `loss_index - 1` prior losses.
    pub bet_amount: f64,
    /// Running sum of all bets through this row.
    pub cumulative_bet: f64,
    /// Profit of a win at this row, at nominal payout.
    pub gross_profit: f64,
    /// Profit of a win at this row net of all prior losing stakes.
    pub net_profit: f64,
    /// Probability of losing this many rounds in a row.
    pub loss_probability: f64,
    /// `1 / loss_probability`, absent when the inverse is not finite.
    pub odds: Option<f64>,
}

/// Lazy iterator over progression rows.
///
/// `Clone` the iterator to restart it; each instance yields exactly the
/// row count it was built with.
#[derive(Debug, Clone)]
pub struct Progression {
    payout: f64,
    multiplier: f64,
    loss_chance: f64,
    remaining: u32,
    next_index: u32,
    bet_amount: f64,
    cumulative_bet: f64,
    streak_probability: f64,
}

/// Builds a progression of exactly `row_count` rows.
///
/// The row count is independent of the sustainable streak; rows past it
/// simply describe depths the bankroll could not fund. The gross profit
/// column uses the nominal payout; the headline `profit_per_win` in
/// [`crate::streak::StreakStats`] uses the edge-adjusted payout. Both
/// figures are intentional and callers displaying them side by side
/// should label them accordingly.
#[must_use]
pub fn build_progression(params: &BetParams, row_count: u32) -> Progression {
    let params = params.normalized();
    Progression {
        payout: params.payout,
        multiplier: params.multiplier,
        loss_chance: params.loss_probability(),
        remaining: row_count,
        next_index: 0,
        bet_amount: params.base_bet,
        cumulative_bet: 0.0,
        streak_probability: 1.0,
    }
}

impl Iterator for Progression {
    type Item = ProgressionRow;

    fn next(&mut self) -> Option<ProgressionRow> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.next_index += 1;

        let bet_amount = self.bet_amount;
        // Accumulate rather than re-derive so the column always agrees
        // with the per-row bets actually shown.
        self.cumulative_bet += bet_amount;
        self.streak_probability *= self.loss_chance;

        let gross_profit = bet_amount * (self.payout - 1.0);
        let net_profit = gross_profit - (self.cumulative_bet - bet_amount);

        let row = ProgressionRow {
            loss_index: self.next_index,
            bet_amount,
            cumulative_bet: self.cumulative_bet,
            gross_profit,
            net_profit,
            loss_probability: self.streak_probability,
            odds: inverse_odds(self.streak_probability),
        };

        self.bet_amount *= self.multiplier;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Progression {}

fn inverse_odds(probability: f64) -> Option<f64> {
    if probability > 0.0 {
        let odds = 1.0 / probability;
        odds.is_finite().then_some(odds)
    } else {
        None
    }
}
