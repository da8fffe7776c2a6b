//! Schema-versioned JSON request/response surface.
//!
//! Each entry point decodes a request, runs the corresponding engine
//! operation with default calibration, and encodes the response. Domain
//! semantics live entirely in [`crate::engine`]; this layer only
//! translates.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::{
    BattingMetrics, MetricComparison, PitchingMetrics, SabermetricsEngine,
    DEFAULT_COMPARISON_METRICS,
};
use crate::error::{MetricsError, Result};
use crate::models::{BattingLine, PitchingLine};

/// Wire schema version accepted by every entry point.
pub const SCHEMA_VERSION: u8 = 1;

fn check_schema(found: u8) -> Result<()> {
    if found == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(MetricsError::SchemaVersion { found, expected: SCHEMA_VERSION })
    }
}

fn default_park_factor() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct PlayerMetricsRequest {
    pub schema_version: u8,
    pub line: BattingLine,
    #[serde(default = "default_park_factor")]
    pub park_factor: f64,
}

#[derive(Debug, Serialize)]
pub struct PlayerMetricsResponse {
    pub schema_version: u8,
    pub metrics: BattingMetrics,
}

/// Full batter metric set from a JSON request.
pub fn player_metrics_json(request: &str) -> Result<String> {
    let request: PlayerMetricsRequest = serde_json::from_str(request)?;
    check_schema(request.schema_version)?;

    let engine = SabermetricsEngine::new();
    let metrics = engine.player_metrics(&request.line, request.park_factor)?;
    debug!(park_factor = request.park_factor, "computed batter metrics");

    Ok(serde_json::to_string(&PlayerMetricsResponse {
        schema_version: SCHEMA_VERSION,
        metrics,
    })?)
}

#[derive(Debug, Deserialize)]
pub struct PitcherMetricsRequest {
    pub schema_version: u8,
    pub line: PitchingLine,
}

#[derive(Debug, Serialize)]
pub struct PitcherMetricsResponse {
    pub schema_version: u8,
    pub metrics: PitchingMetrics,
}

/// Full pitcher metric set from a JSON request.
pub fn pitcher_metrics_json(request: &str) -> Result<String> {
    let request: PitcherMetricsRequest = serde_json::from_str(request)?;
    check_schema(request.schema_version)?;

    let engine = SabermetricsEngine::new();
    let metrics = engine.pitcher_metrics(&request.line);
    debug!(innings = request.line.innings(), "computed pitcher metrics");

    Ok(serde_json::to_string(&PitcherMetricsResponse {
        schema_version: SCHEMA_VERSION,
        metrics,
    })?)
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub schema_version: u8,
    pub line_a: BattingLine,
    pub line_b: BattingLine,
    /// Metric labels to compare; omit for the default set.
    #[serde(default)]
    pub metrics: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub schema_version: u8,
    pub rows: Vec<MetricComparison>,
}

/// Head-to-head comparison from a JSON request.
pub fn compare_players_json(request: &str) -> Result<String> {
    let request: CompareRequest = serde_json::from_str(request)?;
    check_schema(request.schema_version)?;

    let engine = SabermetricsEngine::new();
    let comparison = match &request.metrics {
        Some(names) => {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            engine.compare_players(&request.line_a, &request.line_b, &names)
        }
        None => engine.compare_players(
            &request.line_a,
            &request.line_b,
            &DEFAULT_COMPARISON_METRICS,
        ),
    };
    debug!(rows = comparison.rows.len(), "compared players");

    Ok(serde_json::to_string(&CompareResponse {
        schema_version: SCHEMA_VERSION,
        rows: comparison.rows,
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_player_metrics_round_trip() {
        let request = json!({
            "schema_version": 1,
            "line": {
                "AB": 473, "H": 134, "BB": 89, "HBP": 3, "SF": 4,
                "1B": 82, "2B": 21, "3B": 1, "HR": 30, "K": 124, "IBB": 18
            }
        });

        let response = player_metrics_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        let avg = parsed["metrics"]["AVG"].as_f64().unwrap();
        assert!((avg - 0.283).abs() < 0.001, "AVG {}", avg);
        assert!(parsed["metrics"]["wRC+"].is_number());
    }

    #[test]
    fn test_player_metrics_rejects_bad_park_factor() {
        let request = json!({
            "schema_version": 1,
            "line": {"AB": 100, "H": 30},
            "park_factor": 0.0
        });

        let err = player_metrics_json(&request.to_string()).unwrap_err();
        assert!(matches!(err, MetricsError::Misconfiguration { name: "park_factor", .. }));
    }

    #[test]
    fn test_schema_version_rejected() {
        let request = json!({
            "schema_version": 2,
            "line": {"AB": 100, "H": 30}
        });

        let err = player_metrics_json(&request.to_string()).unwrap_err();
        assert!(matches!(err, MetricsError::SchemaVersion { found: 2, expected: 1 }));
    }

    #[test]
    fn test_malformed_request_is_decode_error() {
        let err = player_metrics_json("{not json").unwrap_err();
        assert!(matches!(err, MetricsError::Json(_)));
    }

    #[test]
    fn test_pitcher_metrics_round_trip() {
        let request = json!({
            "schema_version": 1,
            "line": {
                "IP": 222.2, "ER": 65, "H": 180, "BB": 45, "K": 222, "HR": 28, "HBP": 7
            }
        });

        let response = pitcher_metrics_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        let era = parsed["metrics"]["ERA"].as_f64().unwrap();
        let whip = parsed["metrics"]["WHIP"].as_f64().unwrap();
        assert!((era - 2.63).abs() < 0.01, "ERA {}", era);
        assert!((whip - 1.01).abs() < 0.01, "WHIP {}", whip);
    }

    #[test]
    fn test_compare_default_metrics() {
        let request = json!({
            "schema_version": 1,
            "line_a": {"AB": 500, "H": 160, "HR": 30},
            "line_b": {"AB": 500, "H": 140, "HR": 10}
        });

        let response = compare_players_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        let rows = parsed["rows"].as_array().unwrap();
        assert_eq!(rows.len(), DEFAULT_COMPARISON_METRICS.len());
        assert_eq!(rows[0]["metric"], "AVG");
        assert_eq!(rows[0]["a_is_better"], true);
    }

    #[test]
    fn test_compare_explicit_metrics() {
        let request = json!({
            "schema_version": 1,
            "line_a": {"AB": 500, "H": 160},
            "line_b": {"AB": 500, "H": 140},
            "metrics": ["AVG", "ISO"]
        });

        let response = compare_players_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["rows"].as_array().unwrap().len(), 2);
    }
}
