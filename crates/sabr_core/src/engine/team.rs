//! Team-level aggregation
//!
//! Rolls per-player derived metrics up to team summaries: rate indices
//! are averaged over the team's batters, counting stats are totaled from
//! the raw lines.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::SabermetricsEngine;
use crate::models::BattingLine;

/// Aggregated batting production for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamBattingSummary {
    pub team: String,
    pub player_count: usize,
    /// Mean wRC+ across the team's batters, neutral park
    pub avg_wrc_plus: f64,
    /// Mean OPS across the team's batters
    pub avg_ops: f64,
    pub total_hr: u32,
    pub total_rbi: u32,
}

impl SabermetricsEngine {
    /// Summarize batters grouped by team code.
    ///
    /// Accepts `(team_code, line)` pairs from any source; output is sorted
    /// by team code for stable rendering. Teams with no batters simply do
    /// not appear — there is no empty-group division.
    pub fn team_summary<'a, I>(&self, batters: I) -> Vec<TeamBattingSummary>
    where
        I: IntoIterator<Item = (&'a str, &'a BattingLine)>,
    {
        let mut groups: BTreeMap<&str, Vec<&BattingLine>> = BTreeMap::new();
        for (team, line) in batters {
            groups.entry(team).or_default().push(line);
        }

        groups
            .into_iter()
            .map(|(team, lines)| {
                let count = lines.len() as f64;
                let mut wrc_sum = 0.0;
                let mut ops_sum = 0.0;
                let mut total_hr = 0;
                let mut total_rbi = 0;

                for line in &lines {
                    let metrics = self.player_metrics_neutral(line);
                    wrc_sum += metrics.wrc_plus;
                    ops_sum += metrics.ops;
                    total_hr += line.hr;
                    total_rbi += line.rbi;
                }

                TeamBattingSummary {
                    team: team.to_string(),
                    player_count: lines.len(),
                    avg_wrc_plus: wrc_sum / count,
                    avg_ops: ops_sum / count,
                    total_hr,
                    total_rbi,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(h: u32, hr: u32, rbi: u32) -> BattingLine {
        BattingLine { ab: 500, h, hr, rbi, ..Default::default() }
    }

    #[test]
    fn test_groups_by_team_sorted() {
        let engine = SabermetricsEngine::new();
        let lad_a = line(150, 30, 100);
        let lad_b = line(140, 20, 80);
        let atl = line(160, 40, 110);

        let batters = vec![("LAD", &lad_a), ("ATL", &atl), ("LAD", &lad_b)];
        let summary = engine.team_summary(batters);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].team, "ATL");
        assert_eq!(summary[1].team, "LAD");
        assert_eq!(summary[1].player_count, 2);
    }

    #[test]
    fn test_totals_and_averages() {
        let engine = SabermetricsEngine::new();
        let a = line(150, 30, 100);
        let b = line(140, 20, 80);

        let summary = engine.team_summary(vec![("LAD", &a), ("LAD", &b)]);
        let team = &summary[0];

        assert_eq!(team.total_hr, 50);
        assert_eq!(team.total_rbi, 180);

        let ops_a = engine.player_metrics_neutral(&a).ops;
        let ops_b = engine.player_metrics_neutral(&b).ops;
        assert!((team.avg_ops - (ops_a + ops_b) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input() {
        let engine = SabermetricsEngine::new();
        let summary = engine.team_summary(std::iter::empty());
        assert!(summary.is_empty());
    }
}
