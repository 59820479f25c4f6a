//! Calculator profiles loaded from TOML and the environment.

use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::params::BetParams;

/// A saved calculator profile: the six scalar inputs plus presentation
/// choices (table depth and whether chance is derived from the payout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcProfile {
    pub balance: f64,
    pub base_bet: f64,
    pub payout: f64,
    pub chance: f64,
    pub multiplier: f64,
    pub house_edge: f64,
    /// Progression table depth.
    pub rows: u32,
    /// Derive `chance` from `payout` and `house_edge` instead of taking
    /// it as given.
    pub sync_chance: bool,
}

impl Default for CalcProfile {
    fn default() -> Self {
        let params = BetParams::default();
        Self {
            balance: params.balance,
            base_bet: params.base_bet,
            payout: params.payout,
            chance: params.chance,
            multiplier: params.multiplier,
            house_edge: params.house_edge,
            rows: 20,
            sync_chance: false,
        }
    }
}

impl CalcProfile {
    /// The computation inputs of this profile, with the sync mode
    /// already applied.
    #[must_use]
    pub fn params(&self) -> BetParams {
        let params = BetParams {
            balance: self.balance,
            base_bet: self.base_bet,
            payout: self.payout,
            chance: self.chance,
            multiplier: self.multiplier,
            house_edge: self.house_edge,
        };
        if self.sync_chance {
            params.with_synced_chance()
        } else {
            params
        }
    }
}

pub struct ProfileLoader;

impl ProfileLoader {
    /// Loads a profile by merging a TOML file with `MARTINGALE_`-prefixed
    /// environment variables; the environment wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// merged value has the wrong type.
    pub fn load(path: &str) -> Result<CalcProfile> {
        let profile: CalcProfile = Figment::from(figment::providers::Serialized::defaults(
            CalcProfile::default(),
        ))
        .merge(Toml::file(path))
        .merge(Env::prefixed("MARTINGALE_"))
        .extract()?;

        debug!(path, "loaded calculator profile");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_matches_default_params() {
        let profile = CalcProfile::default();
        assert_eq!(profile.params(), BetParams::default());
        assert_eq!(profile.rows, 20);
        assert!(!profile.sync_chance);
    }

    #[test]
    fn params_applies_sync_mode() {
        let profile = CalcProfile {
            payout: 2.0,
            house_edge: 0.0,
            chance: 10.0,
            sync_chance: true,
            ..CalcProfile::default()
        };
        assert!((profile.params().chance - 50.0).abs() < 1e-9);
    }

    #[test]
    fn load_merges_file_over_defaults() {
        let path = std::env::temp_dir().join("martingale-profile-merge-test.toml");
        std::fs::write(&path, "balance = 5.0\nrows = 3\n").unwrap();

        let profile = ProfileLoader::load(path.to_str().unwrap()).unwrap();
        assert!((profile.balance - 5.0).abs() < f64::EPSILON);
        assert_eq!(profile.rows, 3);
        // Untouched fields keep their defaults.
        assert!((profile.payout - 2.0).abs() < f64::EPSILON);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let path = std::env::temp_dir().join("martingale-profile-bad-test.toml");
        std::fs::write(&path, "balance = [not toml").unwrap();

        assert!(ProfileLoader::load(path.to_str().unwrap()).is_err());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        // Figment treats an absent TOML file as an empty provider.
        let profile = ProfileLoader::load("/nonexistent/martingale-profile.toml").unwrap();
        assert_eq!(profile, CalcProfile::default());
    }
}
