//! Simplified value-above-replacement estimate
//!
//! A deliberately rough approximation for ranking and display, not a
//! reproduction of any official WAR implementation: offense comes from
//! wRC+ scaled by playing time, defense is a flat positional adjustment,
//! and the result is floored at 0. Real value above replacement can be
//! negative; the floor is part of this function's documented contract.

use crate::engine::SabermetricsEngine;
use crate::models::{BattingLine, Position};

/// Full-season (700 PA) positional adjustment in runs.
///
/// Premium defensive spots are credited, bat-first spots debited. Codes
/// without an entry (generic OF, P, UTIL) adjust by 0.
pub fn position_adjustment(position: Position) -> f64 {
    match position {
        Position::Catcher => 12.5,
        Position::FirstBase => -12.5,
        Position::SecondBase => 2.5,
        Position::ThirdBase => 2.5,
        Position::Shortstop => 7.5,
        Position::LeftField => -7.5,
        Position::CenterField => 2.5,
        Position::RightField => -7.5,
        Position::DesignatedHitter => -17.5,
        Position::Outfield | Position::Pitcher | Position::Utility => 0.0,
    }
}

impl SabermetricsEngine {
    /// Approximate wins above replacement for a batter.
    ///
    /// `((wRC+ - 100) / 100) * (PA / 700) * 20` offense, plus the
    /// positional adjustment and a 2.0-win replacement level, both scaled
    /// by `PA / 700`, floored at 0. Computed at the neutral park factor.
    pub fn war_approximation(&self, line: &BattingLine, position: Position) -> f64 {
        let wrc_plus = self.wrc_plus_neutral(line);
        let pa_share = line.plate_appearances() as f64 / 700.0;

        let offensive_value = ((wrc_plus - 100.0) / 100.0) * pa_share * 20.0;
        let positional_value = position_adjustment(position) * pa_share;
        let replacement_level = 2.0 * pa_share;

        (offensive_value + positional_value + replacement_level).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn productive_line() -> BattingLine {
        BattingLine {
            ab: 473,
            h: 134,
            bb: 89,
            hbp: 3,
            sf: 4,
            singles: Some(82),
            doubles: 21,
            triples: 1,
            hr: 30,
            k: 124,
            ibb: 18,
            ..Default::default()
        }
    }

    #[test]
    fn test_adjustment_table() {
        assert_eq!(position_adjustment(Position::Catcher), 12.5);
        assert_eq!(position_adjustment(Position::Shortstop), 7.5);
        assert_eq!(position_adjustment(Position::DesignatedHitter), -17.5);
        assert_eq!(position_adjustment(Position::Outfield), 0.0);
        assert_eq!(position_adjustment(Position::Utility), 0.0);
    }

    #[test]
    fn test_premium_position_outranks_bat_only_spot() {
        let engine = SabermetricsEngine::new();
        let line = productive_line();

        let at_catcher = engine.war_approximation(&line, Position::Catcher);
        let at_dh = engine.war_approximation(&line, Position::DesignatedHitter);
        assert!(
            at_catcher > at_dh,
            "same bat must be worth more behind the plate: {} vs {}",
            at_catcher,
            at_dh
        );
    }

    #[test]
    fn test_floor_at_zero() {
        let engine = SabermetricsEngine::new();
        // A weak bat at the most penalized position
        let line = BattingLine { ab: 600, h: 90, k: 250, ..Default::default() };
        let war = engine.war_approximation(&line, Position::DesignatedHitter);
        assert!(war >= 0.0, "the estimate is floored at 0 by contract: {}", war);
    }

    #[test]
    fn test_empty_line_is_zero() {
        let engine = SabermetricsEngine::new();
        assert_eq!(engine.war_approximation(&BattingLine::default(), Position::Catcher), 0.0);
    }

    // ========== Property-Based Tests ==========

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the estimate never goes below the documented floor
            #[test]
            fn prop_war_floored_at_zero(
                ab in 0u32..700,
                h in 0u32..250,
                bb in 0u32..150,
                k in 0u32..250
            ) {
                let engine = SabermetricsEngine::new();
                let line = BattingLine { ab, h, bb, k, ..Default::default() };
                for position in [
                    Position::Catcher,
                    Position::Shortstop,
                    Position::DesignatedHitter,
                    Position::Outfield,
                ] {
                    prop_assert!(engine.war_approximation(&line, position) >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_scales_with_playing_time() {
        let engine = SabermetricsEngine::new();
        let full = productive_line();
        // Same rates, half the playing time
        let half = BattingLine {
            ab: 236,
            h: 67,
            bb: 45,
            hbp: 1,
            sf: 2,
            singles: Some(41),
            doubles: 10,
            triples: 1,
            hr: 15,
            k: 62,
            ibb: 9,
            ..Default::default()
        };

        let war_full = engine.war_approximation(&full, Position::CenterField);
        let war_half = engine.war_approximation(&half, Position::CenterField);
        assert!(
            war_full > war_half,
            "more playing time at the same production must add value: {} vs {}",
            war_full,
            war_half
        );
    }
}
