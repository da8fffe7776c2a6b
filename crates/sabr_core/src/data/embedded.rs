//! Embedded sample dataset
//!
//! `include_str!` embeds the JSON at compile time; the parse happens once
//! behind a `OnceLock`. The records are real reference-season lines, so
//! demos and tests exercise the engine with production-shaped data.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::models::{BattingLine, PitchingLine, Position};

/// Reference-season sample players JSON (~3KB)
pub const SAMPLE_PLAYERS_JSON: &str = include_str!("../../../../data/sample_players.json");

/// One sample batter with identity and raw counting line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleBatter {
    pub name: String,
    /// Team code (e.g. "LAD")
    pub team: String,
    pub position: Position,
    pub line: BattingLine,
}

/// One sample pitcher with identity and raw counting line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplePitcher {
    pub name: String,
    pub team: String,
    pub line: PitchingLine,
}

/// The full embedded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleData {
    pub season: u16,
    pub batters: Vec<SampleBatter>,
    pub pitchers: Vec<SamplePitcher>,
}

impl SampleData {
    /// Batter by exact name.
    pub fn batter(&self, name: &str) -> Option<&SampleBatter> {
        self.batters.iter().find(|b| b.name == name)
    }

    /// Pitcher by exact name.
    pub fn pitcher(&self, name: &str) -> Option<&SamplePitcher> {
        self.pitchers.iter().find(|p| p.name == name)
    }
}

static SAMPLE_DATA: OnceLock<SampleData> = OnceLock::new();

/// Parse-once accessor for the embedded sample dataset.
pub fn get_sample_data() -> &'static SampleData {
    SAMPLE_DATA.get_or_init(|| {
        serde_json::from_str(SAMPLE_PLAYERS_JSON).expect("Embedded sample players JSON is corrupted")
    })
}
