//! Qualitative performance grades
//!
//! Threshold bands turning numeric indices into display-ready labels,
//! plus the ERA-vs-FIP sustainability read.

use serde::{Deserialize, Serialize};

use crate::engine::{BattingMetrics, PitchingMetrics};

/// Batter grade derived from wRC+.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatterRating {
    MvpCandidate,
    AllStar,
    AboveAverage,
    LeagueAverage,
    BelowAverage,
}

impl BatterRating {
    /// Band a wRC+ value: >=140 MVP candidate, >=130 All-Star, >=115
    /// above average, >=100 league average, else below average.
    pub fn from_wrc_plus(wrc_plus: f64) -> Self {
        if wrc_plus >= 140.0 {
            BatterRating::MvpCandidate
        } else if wrc_plus >= 130.0 {
            BatterRating::AllStar
        } else if wrc_plus >= 115.0 {
            BatterRating::AboveAverage
        } else if wrc_plus >= 100.0 {
            BatterRating::LeagueAverage
        } else {
            BatterRating::BelowAverage
        }
    }

    pub fn from_metrics(metrics: &BattingMetrics) -> Self {
        Self::from_wrc_plus(metrics.wrc_plus)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BatterRating::MvpCandidate => "MVP CANDIDATE",
            BatterRating::AllStar => "ALL-STAR LEVEL",
            BatterRating::AboveAverage => "ABOVE AVERAGE",
            BatterRating::LeagueAverage => "LEAGUE AVERAGE",
            BatterRating::BelowAverage => "BELOW AVERAGE",
        }
    }
}

/// Pitcher grade derived from ERA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PitcherRating {
    Ace,
    AboveAverage,
    LeagueAverage,
    BelowAverage,
}

impl PitcherRating {
    /// Band an ERA value: <3.00 ace, <4.00 above average, <4.50 league
    /// average, else below average.
    pub fn from_era(era: f64) -> Self {
        if era < 3.00 {
            PitcherRating::Ace
        } else if era < 4.00 {
            PitcherRating::AboveAverage
        } else if era < 4.50 {
            PitcherRating::LeagueAverage
        } else {
            PitcherRating::BelowAverage
        }
    }

    pub fn from_metrics(metrics: &PitchingMetrics) -> Self {
        Self::from_era(metrics.era)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PitcherRating::Ace => "ACE LEVEL",
            PitcherRating::AboveAverage => "ABOVE AVERAGE",
            PitcherRating::LeagueAverage => "LEAGUE AVERAGE",
            PitcherRating::BelowAverage => "BELOW AVERAGE",
        }
    }
}

/// Sustainability read from the gap between ERA and FIP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FipVerdict {
    /// FIP below ERA: results have run worse than the underlying skill
    Unlucky,
    /// FIP above ERA: results have run better than the underlying skill
    Lucky,
    /// ERA and FIP align
    Sustainable,
}

impl FipVerdict {
    pub fn from_era_fip(era: f64, fip: f64) -> Self {
        if fip < era {
            FipVerdict::Unlucky
        } else if fip > era {
            FipVerdict::Lucky
        } else {
            FipVerdict::Sustainable
        }
    }

    pub fn from_metrics(metrics: &PitchingMetrics) -> Self {
        Self::from_era_fip(metrics.era, metrics.fip)
    }

    pub fn description(&self) -> &'static str {
        match self {
            FipVerdict::Unlucky => "FIP suggests pitcher has been unlucky - expect improvement",
            FipVerdict::Lucky => "FIP suggests pitcher has been lucky - expect regression",
            FipVerdict::Sustainable => "ERA and FIP align - performance is sustainable",
        }
    }
}
