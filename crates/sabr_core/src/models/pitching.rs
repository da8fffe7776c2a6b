//! Raw pitching records

use serde::{Deserialize, Serialize};

/// One pitcher's raw counting line for a single season.
///
/// `ip` uses baseball notation: the tenths digit counts outs, so `222.2`
/// means 222⅔ innings. Use [`PitchingLine::innings`] for arithmetic; the
/// raw field is only the wire representation. All other fields default to
/// 0 when absent and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchingLine {
    /// Wins
    #[serde(rename = "W", default)]
    pub w: u32,
    /// Losses
    #[serde(rename = "L", default)]
    pub l: u32,
    /// Games
    #[serde(rename = "G", default)]
    pub g: u32,
    /// Games started
    #[serde(rename = "GS", default)]
    pub gs: u32,
    /// Complete games
    #[serde(rename = "CG", default)]
    pub cg: u32,
    /// Shutouts
    #[serde(rename = "SHO", default)]
    pub sho: u32,
    /// Saves
    #[serde(rename = "SV", default)]
    pub sv: u32,
    /// Innings pitched, baseball notation (tenths digit = outs, 0..=2)
    #[serde(rename = "IP", default)]
    pub ip: f64,
    /// Hits allowed
    #[serde(rename = "H", default)]
    pub h: u32,
    /// Earned runs
    #[serde(rename = "ER", default)]
    pub er: u32,
    /// Home runs allowed
    #[serde(rename = "HR", default)]
    pub hr: u32,
    /// Walks issued (includes intentional)
    #[serde(rename = "BB", default)]
    pub bb: u32,
    /// Intentional walks issued
    #[serde(rename = "IBB", default)]
    pub ibb: u32,
    /// Strikeouts
    #[serde(rename = "K", default)]
    pub k: u32,
    /// Hit batsmen
    #[serde(rename = "HBP", default)]
    pub hbp: u32,
}

impl PitchingLine {
    /// True fractional innings: `222.2` → 222 + 2/3 ≈ 222.667.
    ///
    /// The tenths digit is read as a count of outs, so only .0, .1 and .2
    /// are meaningful. A line with no innings recorded returns 0.0 and
    /// every per-inning rate falls back to the zero-data sentinel.
    pub fn innings(&self) -> f64 {
        let whole = self.ip.trunc();
        let outs = ((self.ip - whole) * 10.0).round();
        whole + outs / 3.0
    }
}
