//! # sabr_core - Sabermetrics Calculation Engine
//!
//! This library computes derived baseball performance statistics from raw
//! counting lines for batters and pitchers, and layers player comparison
//! and team aggregation on top of the formula set.
//!
//! ## Features
//! - Pure, stateless formula set (wOBA, wRC+, FIP, ISO, BABIP, OPS+, and
//!   a simplified WAR estimate)
//! - Strongly-typed raw records with stat-code JSON mapping
//! - Zero-data sentinel policy: sparse records compute, they never panic
//! - JSON API for easy integration with non-Rust hosts

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{compare_players_json, pitcher_metrics_json, player_metrics_json, SCHEMA_VERSION};

// Re-export the engine and its result types
pub use engine::{
    position_adjustment, BasicStats, BatterRating, BattingMetrics, FipVerdict, LeagueBaseline,
    LeagueConstants, LinearWeights, MetricComparison, PitcherRating, PitchingMetrics,
    PlayerComparison, SabermetricsEngine, TeamBattingSummary, DEFAULT_COMPARISON_METRICS,
};

pub use error::{MetricsError, Result};

// Re-export record types
pub use data::{get_sample_data, SampleBatter, SampleData, SamplePitcher};
pub use models::{BattingLine, PitchingLine, Position};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
