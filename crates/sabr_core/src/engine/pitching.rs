//! Pitching metrics
//!
//! Per-inning rates off true fractional innings (baseball notation is
//! decoded by [`PitchingLine::innings`]). A pitcher with no innings
//! recorded gets the zero-data sentinel on every rate.
//!
//! [`PitchingLine::innings`]: crate::models::PitchingLine::innings

use serde::{Deserialize, Serialize};

use crate::engine::{ratio, SabermetricsEngine};
use crate::models::PitchingLine;

/// Full derived metric set for one pitcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchingMetrics {
    #[serde(rename = "ERA")]
    pub era: f64,
    #[serde(rename = "WHIP")]
    pub whip: f64,
    #[serde(rename = "FIP")]
    pub fip: f64,
    #[serde(rename = "K_per_9")]
    pub k_per_9: f64,
    #[serde(rename = "BB_per_9")]
    pub bb_per_9: f64,
    #[serde(rename = "HR_per_9")]
    pub hr_per_9: f64,
    #[serde(rename = "K_BB_ratio")]
    pub k_bb_ratio: f64,
}

impl SabermetricsEngine {
    /// Earned Run Average: ER * 9 / IP.
    pub fn era(&self, line: &PitchingLine) -> f64 {
        ratio(line.er as f64 * 9.0, line.innings())
    }

    /// Walks plus Hits per Inning Pitched.
    pub fn whip(&self, line: &PitchingLine) -> f64 {
        ratio((line.bb + line.h) as f64, line.innings())
    }

    /// Fielding Independent Pitching.
    ///
    /// Can legitimately go negative for extreme strikeout profiles with no
    /// home runs or walks; the value is mathematically correct and is not
    /// clamped.
    pub fn fip(&self, line: &PitchingLine) -> f64 {
        let innings = line.innings();
        if innings <= 0.0 {
            return 0.0;
        }
        (13.0 * line.hr as f64 + 3.0 * (line.bb + line.hbp) as f64 - 2.0 * line.k as f64)
            / innings
            + self.constants().fip_constant
    }

    /// The complete derived metric set for a pitcher.
    ///
    /// K/BB falls back to the raw strikeout count when a pitcher has
    /// strikeouts but no walks — a finite, informative stand-in for the
    /// undefined ratio — and to 0 when both are 0.
    pub fn pitcher_metrics(&self, line: &PitchingLine) -> PitchingMetrics {
        let innings = line.innings();

        let k_bb_ratio = if line.bb > 0 {
            line.k as f64 / line.bb as f64
        } else if line.k > 0 {
            line.k as f64
        } else {
            0.0
        };

        PitchingMetrics {
            era: self.era(line),
            whip: self.whip(line),
            fip: self.fip(line),
            k_per_9: ratio(line.k as f64 * 9.0, innings),
            bb_per_9: ratio(line.bb as f64 * 9.0, innings),
            hr_per_9: ratio(line.hr as f64 * 9.0, innings),
            k_bb_ratio,
        }
    }
}
