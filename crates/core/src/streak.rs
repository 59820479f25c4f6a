//! Closed-form streak statistics for a Martingale progression.
//!
//! Derives the largest number of consecutive losses a bankroll can fund
//! when the bet grows geometrically after each loss, the probability of
//! exceeding that streak (bust), and the profit realized on a single win.
//!
//! The derivation assumes independent, identically distributed rounds
//! with a fixed win probability. That is a modeling assumption, not an
//! empirical claim.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::params::{BetParams, CHANCE_EPSILON};

/// Threshold below which an edge-adjusted payout is treated as zero.
const PAYOUT_EPSILON: f64 = 1e-12;

/// Headline statistics derived from one set of [`BetParams`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreakStats {
    /// Largest loss streak the bankroll can fund in full.
    pub max_loss_streak: u32,
    /// Probability of losing `max_loss_streak + 1` rounds in a row.
    pub bust_probability: f64,
    /// Net gain of a single base-stake win, after house edge.
    pub profit_per_win: f64,
    /// Payout multiple after house edge.
    pub actual_payout: f64,
}

/// Computes the headline statistics for one parameter set.
///
/// Degenerate inputs never raise: a non-positive `base_bet` yields a
/// streak of zero, `chance = 100` yields a bust probability of zero, and
/// a chance at the epsilon floor yields a bust probability approaching
/// one. All are defined outputs, not errors.
#[must_use]
pub fn compute_statistics(params: &BetParams) -> StreakStats {
    let params = params.normalized();
    let q = params.loss_probability();

    let max_loss_streak = max_loss_streak(params.balance, params.base_bet, params.multiplier);
    let bust_probability = q.powf(f64::from(max_loss_streak) + 1.0).clamp(0.0, 1.0);

    let actual_payout = params.actual_payout();
    let profit_per_win = params.base_bet * (actual_payout - 1.0);

    debug!(
        max_loss_streak,
        bust_probability, actual_payout, "derived streak statistics"
    );

    StreakStats {
        max_loss_streak,
        bust_probability,
        profit_per_win,
        actual_payout,
    }
}

/// Total amount staked after `losses` consecutive losses.
///
/// Geometric sum `base_bet * (m^L - 1) / (m - 1)` for a growing bet,
/// linear `base_bet * L` when the bet does not grow.
#[must_use]
pub fn cumulative_stake(base_bet: f64, multiplier: f64, losses: u32) -> f64 {
    if losses == 0 || base_bet <= 0.0 {
        return 0.0;
    }
    if multiplier <= 1.0 {
        return base_bet * f64::from(losses);
    }
    base_bet * (multiplier.powf(f64::from(losses)) - 1.0) / (multiplier - 1.0)
}

/// Fair win chance (in percent) implied by a payout and house edge.
///
/// Under a zero-expected-value assumption the fair chance is
/// `100 / actual_payout`, clamped into `(0, 100]`. A payout at or below
/// [`PAYOUT_EPSILON`] has no meaningful implied chance; the epsilon
/// floor is returned so downstream math stays defined.
#[must_use]
pub fn implied_chance(payout: f64, house_edge: f64) -> f64 {
    let edge = if house_edge.is_finite() {
        house_edge.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let actual = if payout.is_finite() {
        (payout * (1.0 - edge / 100.0)).max(0.0)
    } else {
        0.0
    };

    if actual > PAYOUT_EPSILON {
        (100.0 / actual).clamp(CHANCE_EPSILON, 100.0)
    } else {
        CHANCE_EPSILON
    }
}

/// Largest L such that the cumulative stake after L losses fits in `balance`.
fn max_loss_streak(balance: f64, base_bet: f64, multiplier: f64) -> u32 {
    if base_bet <= 0.0 || balance <= 0.0 {
        return 0;
    }

    if multiplier <= 1.0 {
        // Flat (or shrinking) bets: the stake grows at most linearly.
        let streak = (balance / base_bet).floor();
        return saturate_u32(streak);
    }

    // Geometric growth: solve base_bet * (m^L - 1)/(m - 1) <= balance.
    let rhs = balance * (multiplier - 1.0) / base_bet + 1.0;
    if rhs <= 1.0 {
        return 0;
    }
    let closed_form = (rhs.ln() / multiplier.ln()).floor();
    let mut streak = saturate_u32(closed_form);

    // The log form can land one off at exact powers of the multiplier.
    // Reconstruct the stake at L and L+1 and nudge accordingly.
    if streak > 0 && cumulative_stake(base_bet, multiplier, streak) > balance {
        streak -= 1;
    } else if streak < u32::MAX && cumulative_stake(base_bet, multiplier, streak + 1) <= balance {
        streak += 1;
    }
    streak
}

fn saturate_u32(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        0
    } else if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        // Bounds checked above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let truncated = value as u32;
        truncated
    }
}
