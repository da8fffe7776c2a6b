//! Head-to-head player comparison

use serde::{Deserialize, Serialize};

use crate::engine::SabermetricsEngine;
use crate::models::BattingLine;

/// Metric set used when the caller does not name one.
pub const DEFAULT_COMPARISON_METRICS: [&str; 8] =
    ["AVG", "OBP", "SLG", "OPS", "wOBA", "wRC+", "BABIP", "ISO"];

/// One metric row in a head-to-head comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    pub metric: String,
    pub value_a: f64,
    pub value_b: f64,
    /// `value_a - value_b`. Comparing B against A yields the exact
    /// negative of this value.
    pub difference: f64,
    /// Strictly greater only. On an exact tie this is `false` in both
    /// directions; detect ties via `difference == 0.0`, not this flag.
    pub a_is_better: bool,
}

/// Comparison table for two batters over a requested metric set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerComparison {
    pub rows: Vec<MetricComparison>,
}

impl PlayerComparison {
    /// Row for a metric label, if it was part of the request.
    pub fn row(&self, metric: &str) -> Option<&MetricComparison> {
        self.rows.iter().find(|row| row.metric == metric)
    }

    /// Number of requested metrics where A strictly beats B.
    pub fn wins_for_a(&self) -> usize {
        self.rows.iter().filter(|row| row.a_is_better).count()
    }

    /// Number of requested metrics where B strictly beats A.
    pub fn wins_for_b(&self) -> usize {
        self.rows.iter().filter(|row| row.difference < 0.0).count()
    }
}

impl SabermetricsEngine {
    /// Compare two batters across the named metrics.
    ///
    /// Both metric sets are computed at the neutral park factor. Metric
    /// names that do not resolve in both sets are skipped silently, so a
    /// caller-supplied list may mix known and unknown labels.
    pub fn compare_players(
        &self,
        line_a: &BattingLine,
        line_b: &BattingLine,
        metrics: &[&str],
    ) -> PlayerComparison {
        let metrics_a = self.player_metrics_neutral(line_a);
        let metrics_b = self.player_metrics_neutral(line_b);

        let rows = metrics
            .iter()
            .filter_map(|name| {
                let value_a = metrics_a.get(name)?;
                let value_b = metrics_b.get(name)?;
                Some(MetricComparison {
                    metric: (*name).to_string(),
                    value_a,
                    value_b,
                    difference: value_a - value_b,
                    a_is_better: value_a > value_b,
                })
            })
            .collect();

        PlayerComparison { rows }
    }

    /// [`compare_players`] over the default metric set.
    ///
    /// [`compare_players`]: SabermetricsEngine::compare_players
    pub fn compare_players_default(
        &self,
        line_a: &BattingLine,
        line_b: &BattingLine,
    ) -> PlayerComparison {
        self.compare_players(line_a, line_b, &DEFAULT_COMPARISON_METRICS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_line() -> BattingLine {
        BattingLine {
            ab: 556,
            h: 217,
            bb: 78,
            hbp: 17,
            sf: 6,
            singles: Some(124),
            doubles: 52,
            triples: 8,
            hr: 41,
            k: 105,
            ibb: 6,
            ..Default::default()
        }
    }

    fn weaker_line() -> BattingLine {
        BattingLine {
            ab: 625,
            h: 189,
            bb: 45,
            hbp: 7,
            sf: 4,
            singles: Some(134),
            doubles: 36,
            triples: 3,
            hr: 17,
            k: 91,
            ibb: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_metric_set() {
        let engine = SabermetricsEngine::new();
        let comparison = engine.compare_players_default(&strong_line(), &weaker_line());

        assert_eq!(comparison.rows.len(), DEFAULT_COMPARISON_METRICS.len());
        for (row, expected) in comparison.rows.iter().zip(DEFAULT_COMPARISON_METRICS) {
            assert_eq!(row.metric, expected, "rows must preserve request order");
        }
    }

    #[test]
    fn test_difference_antisymmetry() {
        let engine = SabermetricsEngine::new();
        let forward = engine.compare_players_default(&strong_line(), &weaker_line());
        let reverse = engine.compare_players_default(&weaker_line(), &strong_line());

        for (f, r) in forward.rows.iter().zip(&reverse.rows) {
            assert_eq!(f.metric, r.metric);
            assert_eq!(
                f.difference, -r.difference,
                "{}: swapped comparison must negate the difference exactly",
                f.metric
            );
        }
    }

    #[test]
    fn test_tie_reports_false_both_directions() {
        let engine = SabermetricsEngine::new();
        let line = strong_line();

        let forward = engine.compare_players_default(&line, &line);
        let reverse = engine.compare_players_default(&line, &line);

        for (f, r) in forward.rows.iter().zip(&reverse.rows) {
            assert_eq!(f.difference, 0.0, "{}", f.metric);
            assert!(!f.a_is_better, "{}: tie must not flag A as better", f.metric);
            assert!(!r.a_is_better, "{}: tie must not flag B as better", r.metric);
        }
    }

    #[test]
    fn test_unknown_metrics_skipped() {
        let engine = SabermetricsEngine::new();
        let comparison =
            engine.compare_players(&strong_line(), &weaker_line(), &["AVG", "xwOBA", "ISO"]);

        assert_eq!(comparison.rows.len(), 2);
        assert!(comparison.row("AVG").is_some());
        assert!(comparison.row("xwOBA").is_none());
        assert!(comparison.row("ISO").is_some());
    }

    #[test]
    fn test_win_counts() {
        let engine = SabermetricsEngine::new();
        let comparison = engine.compare_players_default(&strong_line(), &weaker_line());

        // The stronger line should sweep the default set except BABIP-style
        // noise; at minimum it cannot lose overall
        assert!(comparison.wins_for_a() > comparison.wins_for_b());
        assert!(comparison.wins_for_a() + comparison.wins_for_b() <= comparison.rows.len());
    }
}
