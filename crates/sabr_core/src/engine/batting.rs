//! Batting metrics
//!
//! Basic rate stats plus the advanced indices (wOBA, wRC+, BABIP, ISO,
//! OPS+). Individual formulas stay public for composability; consumers
//! that want the whole set in one call use
//! [`SabermetricsEngine::player_metrics`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::constants::LeagueBaseline;
use crate::engine::{ratio, SabermetricsEngine};
use crate::error::{require_positive, Result};
use crate::models::BattingLine;

/// The four traditional rate stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    #[serde(rename = "AVG")]
    pub avg: f64,
    #[serde(rename = "OBP")]
    pub obp: f64,
    #[serde(rename = "SLG")]
    pub slg: f64,
    #[serde(rename = "OPS")]
    pub ops: f64,
}

/// Full derived metric set for one batter.
///
/// Created fresh per call and never cached; recomputation is cheap and a
/// cache would only add staleness bugs. Name-keyed access through
/// [`BattingMetrics::get`] uses the conventional metric labels so callers
/// can drive comparisons and tables off plain strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingMetrics {
    #[serde(rename = "AVG")]
    pub avg: f64,
    #[serde(rename = "OBP")]
    pub obp: f64,
    #[serde(rename = "SLG")]
    pub slg: f64,
    #[serde(rename = "OPS")]
    pub ops: f64,
    #[serde(rename = "wOBA")]
    pub woba: f64,
    #[serde(rename = "wRC+")]
    pub wrc_plus: f64,
    #[serde(rename = "BABIP")]
    pub babip: f64,
    #[serde(rename = "ISO")]
    pub iso: f64,
    #[serde(rename = "OPS+")]
    pub ops_plus: f64,
    #[serde(rename = "BB_Rate")]
    pub bb_rate: f64,
    #[serde(rename = "K_Rate")]
    pub k_rate: f64,
}

impl BattingMetrics {
    /// Metric labels in presentation order.
    pub const NAMES: [&'static str; 11] = [
        "AVG", "OBP", "SLG", "OPS", "wOBA", "wRC+", "BABIP", "ISO", "OPS+", "BB_Rate", "K_Rate",
    ];

    /// Look up a metric by its conventional label. Unknown labels return
    /// `None` rather than erroring, so callers can probe freely.
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "AVG" => Some(self.avg),
            "OBP" => Some(self.obp),
            "SLG" => Some(self.slg),
            "OPS" => Some(self.ops),
            "wOBA" => Some(self.woba),
            "wRC+" => Some(self.wrc_plus),
            "BABIP" => Some(self.babip),
            "ISO" => Some(self.iso),
            "OPS+" => Some(self.ops_plus),
            "BB_Rate" => Some(self.bb_rate),
            "K_Rate" => Some(self.k_rate),
            _ => None,
        }
    }

    /// All metrics as an ordered name → value map.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        Self::NAMES
            .iter()
            .map(|name| (*name, self.get(name).unwrap_or(0.0)))
            .collect()
    }
}

impl SabermetricsEngine {
    /// AVG, OBP, SLG and OPS from one counting line.
    ///
    /// Zero at-bats (or zero plate appearances) yield 0.0 across the
    /// board — the zero-data sentinel, not a claim the batter is hitless.
    pub fn basic_stats(&self, line: &BattingLine) -> BasicStats {
        let ab = line.ab as f64;
        let pa = line.plate_appearances() as f64;

        let avg = ratio(line.h as f64, ab);
        let obp = ratio((line.h + line.bb + line.hbp) as f64, pa);
        let slg = ratio(line.total_bases() as f64, ab);

        BasicStats { avg, obp, slg, ops: obp + slg }
    }

    /// Weighted On-Base Average: linear-weighted blend of on-base events
    /// over plate appearances.
    ///
    /// Unintentional walks are `BB - IBB` evaluated in floating point; an
    /// inconsistent feed with `IBB > BB` drives the term negative and is
    /// deliberately not clamped.
    pub fn woba(&self, line: &BattingLine) -> f64 {
        let w = self.weights();
        let ubb = line.bb as f64 - line.ibb as f64;

        let numerator = w.ubb * ubb
            + w.hbp * line.hbp as f64
            + w.single * line.singles() as f64
            + w.double * line.doubles as f64
            + w.triple * line.triples as f64
            + w.home_run * line.hr as f64;

        ratio(numerator, line.plate_appearances() as f64)
    }

    /// Weighted Runs Created Plus, park-adjusted.
    ///
    /// `park_factor` is caller configuration, not data: zero or negative
    /// values fail with a misconfiguration error instead of the sentinel.
    /// A line with no plate appearances resolves to the sentinel — without
    /// the guard the formula would assign a baseline index to an empty
    /// record.
    pub fn wrc_plus(&self, line: &BattingLine, park_factor: f64) -> Result<f64> {
        require_positive("park_factor", park_factor)?;
        Ok(self.wrc_plus_unchecked(line, park_factor))
    }

    pub(crate) fn wrc_plus_unchecked(&self, line: &BattingLine, park_factor: f64) -> f64 {
        if line.plate_appearances() == 0 {
            return 0.0;
        }
        let c = self.constants();
        ((self.woba(line) - c.woba_league_avg) / c.woba_scale + c.runs_per_game) * 100.0
            / park_factor
    }

    pub(crate) fn wrc_plus_neutral(&self, line: &BattingLine) -> f64 {
        self.wrc_plus_unchecked(line, self.constants().neutral_park_factor)
    }

    /// Batting Average on Balls In Play.
    pub fn babip(&self, line: &BattingLine) -> f64 {
        let balls_in_play =
            line.ab as f64 - line.k as f64 - line.hr as f64 + line.sf as f64;
        let hits_in_play = line.h as f64 - line.hr as f64;
        ratio(hits_in_play, balls_in_play)
    }

    /// Isolated Power. Always exactly `SLG - AVG` for any line.
    pub fn iso(&self, line: &BattingLine) -> f64 {
        let basic = self.basic_stats(line);
        basic.slg - basic.avg
    }

    /// Park- and league-adjusted OPS+.
    ///
    /// Every member of `baseline` is a divisor and must be strictly
    /// positive; see [`LeagueBaseline`]. A line with no plate appearances
    /// resolves to the zero-data sentinel, not to the -100 the raw formula
    /// would produce.
    pub fn ops_plus(&self, line: &BattingLine, baseline: &LeagueBaseline) -> Result<f64> {
        baseline.validate()?;
        Ok(self.ops_plus_unchecked(line, baseline))
    }

    fn ops_plus_unchecked(&self, line: &BattingLine, baseline: &LeagueBaseline) -> f64 {
        if line.plate_appearances() == 0 {
            return 0.0;
        }
        let basic = self.basic_stats(line);
        100.0 * (basic.obp / baseline.obp + basic.slg / baseline.slg - 1.0)
            / baseline.park_factor
    }

    /// Canonical one-call entry point: the complete derived metric set for
    /// a batter at the given park factor. OPS+ uses the default league
    /// baselines with the same park factor.
    pub fn player_metrics(
        &self,
        line: &BattingLine,
        park_factor: f64,
    ) -> Result<BattingMetrics> {
        require_positive("park_factor", park_factor)?;
        Ok(self.player_metrics_unchecked(line, park_factor))
    }

    pub(crate) fn player_metrics_neutral(&self, line: &BattingLine) -> BattingMetrics {
        self.player_metrics_unchecked(line, self.constants().neutral_park_factor)
    }

    fn player_metrics_unchecked(&self, line: &BattingLine, park_factor: f64) -> BattingMetrics {
        let basic = self.basic_stats(line);
        let baseline = LeagueBaseline { park_factor, ..Default::default() };

        // Walk and strikeout rates share the AB + BB denominator
        let ab_bb = (line.ab + line.bb) as f64;

        BattingMetrics {
            avg: basic.avg,
            obp: basic.obp,
            slg: basic.slg,
            ops: basic.ops,
            woba: self.woba(line),
            wrc_plus: self.wrc_plus_unchecked(line, park_factor),
            babip: self.babip(line),
            iso: basic.slg - basic.avg,
            ops_plus: self.ops_plus_unchecked(line, &baseline),
            bb_rate: ratio(line.bb as f64, ab_bb),
            k_rate: ratio(line.k as f64, ab_bb),
        }
    }
}
