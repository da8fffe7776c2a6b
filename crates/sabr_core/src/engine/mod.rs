//! Metrics engine
//!
//! Pure formula set turning raw counting lines into derived rates and
//! indices, plus the comparison/aggregation logic layered on top. Every
//! operation is a stateless function of its inputs and the calibration
//! fixed at construction, so one engine instance serves any number of
//! concurrent callers without locking.
//!
//! Division policy: a denominator that comes from caller *data* (at-bats,
//! plate appearances, innings) yields the 0.0 sentinel when it is not
//! positive — "no data yet", not an error. A denominator that comes from
//! caller *configuration* (park factor, league baselines) must be strictly
//! positive and fails with [`MetricsError::Misconfiguration`] otherwise.
//!
//! [`MetricsError::Misconfiguration`]: crate::error::MetricsError

pub mod batting;
pub mod comparison;
pub mod constants;
pub mod pitching;
pub mod rating;
pub mod team;
pub mod war;

pub use batting::{BasicStats, BattingMetrics};
pub use comparison::{MetricComparison, PlayerComparison, DEFAULT_COMPARISON_METRICS};
pub use constants::{LeagueBaseline, LeagueConstants, LinearWeights};
pub use pitching::PitchingMetrics;
pub use rating::{BatterRating, FipVerdict, PitcherRating};
pub use team::TeamBattingSummary;
pub use war::position_adjustment;

/// Sabermetrics calculator bound to one season's calibration.
///
/// Construction performs no I/O; [`Default`] uses the embedded 2023
/// reference-season constants. All methods take `&self` and allocate only
/// their return value.
#[derive(Debug, Clone, Default)]
pub struct SabermetricsEngine {
    constants: LeagueConstants,
    weights: LinearWeights,
}

impl SabermetricsEngine {
    /// Engine with the default reference-season calibration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an injected calibration, for non-default seasons.
    pub fn with_constants(constants: LeagueConstants, weights: LinearWeights) -> Self {
        Self { constants, weights }
    }

    pub fn constants(&self) -> &LeagueConstants {
        &self.constants
    }

    pub fn weights(&self) -> &LinearWeights {
        &self.weights
    }
}

/// Ratio under the zero-data policy: denominators <= 0 yield 0.0.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_sentinel() {
        assert_eq!(ratio(5.0, 0.0), 0.0);
        assert_eq!(ratio(5.0, -2.0), 0.0);
        assert_eq!(ratio(5.0, 2.0), 2.5);
    }

    #[test]
    fn test_engines_with_different_calibrations_coexist() {
        let line = crate::models::BattingLine {
            ab: 400,
            h: 120,
            bb: 40,
            doubles: 20,
            hr: 15,
            ..Default::default()
        };

        let default_engine = SabermetricsEngine::new();
        let juiced = SabermetricsEngine::with_constants(
            LeagueConstants { woba_league_avg: 0.350, ..Default::default() },
            LinearWeights::default(),
        );

        let woba = default_engine.woba(&line);
        assert_eq!(woba, juiced.woba(&line), "wOBA does not depend on league average");

        let wrc_default = default_engine.wrc_plus(&line, 1.0).unwrap();
        let wrc_juiced = juiced.wrc_plus(&line, 1.0).unwrap();
        assert!(
            wrc_juiced < wrc_default,
            "a higher league average must deflate wRC+: {} vs {}",
            wrc_juiced,
            wrc_default
        );
    }
}
