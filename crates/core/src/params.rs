//! Input parameters for a Martingale progression.

use serde::{Deserialize, Serialize};

/// Smallest win chance (in percent) the calculator will work with.
///
/// A chance of exactly zero makes the per-round loss probability 1,
/// which is a legitimate result (guaranteed eventual bust) but breaks
/// odds/inverse computations downstream. Degenerate chances are floored
/// at this epsilon instead.
pub const CHANCE_EPSILON: f64 = 1e-7;

/// The six scalar inputs of a Martingale computation.
///
/// All fields are plain `f64`; values are normalized (clamped into their
/// documented ranges) by [`BetParams::normalized`] before any math runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BetParams {
    /// Bankroll available to absorb consecutive losses.
    pub balance: f64,
    /// Size of the first wager.
    pub base_bet: f64,
    /// Gross payout multiple on a win, before house edge.
    pub payout: f64,
    /// Win probability per round, in percent (0, 100].
    pub chance: f64,
    /// Factor applied to the bet after each loss.
    pub multiplier: f64,
    /// Percentage skimmed from the payout by the operator, [0, 100].
    pub house_edge: f64,
}

impl Default for BetParams {
    fn default() -> Self {
        Self {
            balance: 0.002,
            base_bet: 0.000_000_01,
            payout: 2.0,
            chance: 49.5,
            multiplier: 2.0,
            house_edge: 1.0,
        }
    }
}

impl BetParams {
    /// Returns a copy with every field clamped into its valid range.
    ///
    /// Non-finite inputs collapse to the safe end of their range rather
    /// than propagating NaN through the math.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            balance: non_negative(self.balance),
            base_bet: non_negative(self.base_bet),
            payout: non_negative(self.payout),
            chance: if self.chance.is_finite() {
                self.chance.clamp(CHANCE_EPSILON, 100.0)
            } else {
                CHANCE_EPSILON
            },
            multiplier: non_negative(self.multiplier),
            house_edge: if self.house_edge.is_finite() {
                self.house_edge.clamp(0.0, 100.0)
            } else {
                0.0
            },
        }
    }

    /// Payout multiple after the house edge is skimmed off.
    #[must_use]
    pub fn actual_payout(&self) -> f64 {
        (self.payout * (1.0 - self.house_edge / 100.0)).max(0.0)
    }

    /// Per-round loss probability `q = 1 - chance/100`.
    ///
    /// Expects normalized parameters; the result lies in [0, 1).
    #[must_use]
    pub fn loss_probability(&self) -> f64 {
        (1.0 - self.chance / 100.0).clamp(0.0, 1.0)
    }

    /// Returns a copy whose `chance` is replaced by the fair chance
    /// implied by `payout` and `house_edge`.
    ///
    /// This is the "sync chance with payout" mode: the caller opts in,
    /// the computation itself stays a pure function.
    #[must_use]
    pub fn with_synced_chance(mut self) -> Self {
        self.chance = crate::streak::implied_chance(self.payout, self.house_edge);
        self
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_profile() {
        let params = BetParams::default();
        assert!((params.balance - 0.002).abs() < f64::EPSILON);
        assert!((params.base_bet - 1e-8).abs() < f64::EPSILON);
        assert!((params.payout - 2.0).abs() < f64::EPSILON);
        assert!((params.chance - 49.5).abs() < f64::EPSILON);
        assert!((params.multiplier - 2.0).abs() < f64::EPSILON);
        assert!((params.house_edge - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn normalized_clamps_chance_into_range() {
        let low = BetParams {
            chance: 0.0,
            ..BetParams::default()
        }
        .normalized();
        assert!((low.chance - CHANCE_EPSILON).abs() < 1e-15);

        let high = BetParams {
            chance: 250.0,
            ..BetParams::default()
        }
        .normalized();
        assert!((high.chance - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn normalized_collapses_non_finite_inputs() {
        let params = BetParams {
            balance: f64::NAN,
            base_bet: f64::INFINITY,
            chance: f64::NAN,
            house_edge: f64::NEG_INFINITY,
            ..BetParams::default()
        }
        .normalized();

        assert_eq!(params.balance, 0.0);
        assert_eq!(params.base_bet, 0.0);
        assert!((params.chance - CHANCE_EPSILON).abs() < 1e-15);
        assert_eq!(params.house_edge, 0.0);
    }

    #[test]
    fn actual_payout_applies_house_edge() {
        let params = BetParams {
            payout: 2.0,
            house_edge: 1.0,
            ..BetParams::default()
        };
        assert!((params.actual_payout() - 1.98).abs() < 1e-12);
    }

    #[test]
    fn actual_payout_never_negative() {
        let params = BetParams {
            payout: 2.0,
            house_edge: 100.0,
            ..BetParams::default()
        };
        assert_eq!(params.actual_payout(), 0.0);
    }

    #[test]
    fn loss_probability_complements_chance() {
        let params = BetParams {
            chance: 49.5,
            ..BetParams::default()
        };
        assert!((params.loss_probability() - 0.505).abs() < 1e-12);
    }

    #[test]
    fn synced_chance_uses_implied_fair_value() {
        let params = BetParams {
            payout: 2.0,
            house_edge: 0.0,
            chance: 10.0,
            ..BetParams::default()
        }
        .with_synced_chance();
        assert!((params.chance - 50.0).abs() < 1e-9);
    }

    #[test]
    fn serde_roundtrip_preserves_fields() {
        let params = BetParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: BetParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }

    #[test]
    fn serde_fills_missing_fields_from_defaults() {
        let params: BetParams = serde_json::from_str(r#"{"balance": 1.5}"#).unwrap();
        assert!((params.balance - 1.5).abs() < f64::EPSILON);
        assert!((params.chance - 49.5).abs() < f64::EPSILON);
    }
}
