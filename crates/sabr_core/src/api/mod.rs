//! JSON API facade
//!
//! Stringly-typed, schema-versioned entry points for embedding hosts that
//! cannot link against the typed engine API directly.

pub mod json_api;

pub use json_api::{
    compare_players_json, pitcher_metrics_json, player_metrics_json, CompareRequest,
    CompareResponse, PitcherMetricsRequest, PitcherMetricsResponse, PlayerMetricsRequest,
    PlayerMetricsResponse, SCHEMA_VERSION,
};
