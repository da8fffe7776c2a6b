//! Raw batting records
//!
//! Counting stats as supplied by a data feed, keyed by the conventional
//! stat codes (`AB`, `H`, `2B`, ...). The engine never mutates a line;
//! every derived metric is recomputed from these counts.

use serde::{Deserialize, Serialize};

/// One batter's raw counting line for a single season.
///
/// Every field defaults to 0 when absent from the source, so a sparse or
/// empty feed deserializes to an all-zero line rather than an error.
/// Unknown keys are ignored. Callers are expected to supply internally
/// consistent data (`H >= 2B + 3B + HR`, `IBB <= BB`); the engine does not
/// enforce these invariants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingLine {
    /// At-bats
    #[serde(rename = "AB", default)]
    pub ab: u32,
    /// Hits
    #[serde(rename = "H", default)]
    pub h: u32,
    /// Walks (includes intentional)
    #[serde(rename = "BB", default)]
    pub bb: u32,
    /// Intentional walks
    #[serde(rename = "IBB", default)]
    pub ibb: u32,
    /// Hit by pitch
    #[serde(rename = "HBP", default)]
    pub hbp: u32,
    /// Sacrifice flies
    #[serde(rename = "SF", default)]
    pub sf: u32,
    /// Sacrifice bunts
    #[serde(rename = "SH", default)]
    pub sh: u32,
    /// Strikeouts
    #[serde(rename = "K", default)]
    pub k: u32,
    /// Singles. Most feeds omit this; see [`BattingLine::singles`].
    #[serde(rename = "1B", default, skip_serializing_if = "Option::is_none")]
    pub singles: Option<u32>,
    /// Doubles
    #[serde(rename = "2B", default)]
    pub doubles: u32,
    /// Triples
    #[serde(rename = "3B", default)]
    pub triples: u32,
    /// Home runs
    #[serde(rename = "HR", default)]
    pub hr: u32,
    /// Runs batted in
    #[serde(rename = "RBI", default)]
    pub rbi: u32,
    /// Runs scored
    #[serde(rename = "R", default)]
    pub r: u32,
    /// Stolen bases
    #[serde(rename = "SB", default)]
    pub sb: u32,
    /// Caught stealing
    #[serde(rename = "CS", default)]
    pub cs: u32,
}

impl BattingLine {
    /// Plate appearances as used by the rate denominators: AB + BB + SF + HBP.
    pub fn plate_appearances(&self) -> u32 {
        self.ab + self.bb + self.sf + self.hbp
    }

    /// Singles, taken from the feed when present, otherwise derived as
    /// `H - 2B - 3B - HR`. A derivation that would go negative means the
    /// input is inconsistent; it saturates to 0 rather than underflowing.
    pub fn singles(&self) -> u32 {
        self.singles
            .unwrap_or_else(|| self.h.saturating_sub(self.doubles + self.triples + self.hr))
    }

    /// Total bases: 1B + 2*2B + 3*3B + 4*HR.
    pub fn total_bases(&self) -> u32 {
        self.singles() + 2 * self.doubles + 3 * self.triples + 4 * self.hr
    }
}
