//! League calibration constants and linear weights
//!
//! All defaults approximate the 2023 MLB season. Swapping these for another
//! season's values changes every derived output but none of the formulas;
//! engines built from different calibrations can coexist safely.

use serde::{Deserialize, Serialize};

/// League-average environment for one reference season.
///
/// Fixed at engine construction and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueConstants {
    /// Scale factor converting a wOBA gap into runs for wRC+
    pub woba_scale: f64,
    /// League-average wOBA
    pub woba_league_avg: f64,
    /// League-average runs per game
    pub runs_per_game: f64,
    /// Additive constant aligning FIP with the league ERA scale
    pub fip_constant: f64,
    /// Park factor of a neutral park
    pub neutral_park_factor: f64,
}

impl Default for LeagueConstants {
    fn default() -> Self {
        Self {
            woba_scale: 1.255,
            woba_league_avg: 0.320,
            runs_per_game: 4.65,
            fip_constant: 3.10,
            neutral_park_factor: 1.0,
        }
    }
}

/// Run values of the offensive events entering the wOBA numerator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearWeights {
    /// Unintentional walk
    pub ubb: f64,
    /// Hit by pitch
    pub hbp: f64,
    /// Single
    pub single: f64,
    /// Double
    pub double: f64,
    /// Triple
    pub triple: f64,
    /// Home run
    pub home_run: f64,
}

impl Default for LinearWeights {
    fn default() -> Self {
        Self {
            ubb: 0.690,
            hbp: 0.722,
            single: 0.888,
            double: 1.271,
            triple: 1.616,
            home_run: 2.101,
        }
    }
}

/// Caller-side calibration for park/league adjusted OPS+.
///
/// Every member is a divisor; [`SabermetricsEngine::ops_plus`] rejects any
/// value that is not strictly positive. An invalid baseline is a caller
/// bug, not sparse data, so it fails loudly instead of returning the
/// zero-data sentinel.
///
/// [`SabermetricsEngine::ops_plus`]: crate::engine::SabermetricsEngine::ops_plus
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeagueBaseline {
    /// Park factor, 1.0 = neutral
    #[serde(default = "default_park_factor")]
    pub park_factor: f64,
    /// League-average on-base percentage
    #[serde(default = "default_league_obp")]
    pub obp: f64,
    /// League-average slugging percentage
    #[serde(default = "default_league_slg")]
    pub slg: f64,
}

fn default_park_factor() -> f64 {
    1.0
}

fn default_league_obp() -> f64 {
    0.320
}

fn default_league_slg() -> f64 {
    0.425
}

impl Default for LeagueBaseline {
    fn default() -> Self {
        Self {
            park_factor: default_park_factor(),
            obp: default_league_obp(),
            slg: default_league_slg(),
        }
    }
}

impl LeagueBaseline {
    pub(crate) fn validate(&self) -> crate::error::Result<()> {
        crate::error::require_positive("park_factor", self.park_factor)?;
        crate::error::require_positive("league_obp", self.obp)?;
        crate::error::require_positive("league_slg", self.slg)?;
        Ok(())
    }
}
