//! Defensive position codes

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Defensive position, carried on a player record for the positional
/// component of the value-above-replacement estimate.
///
/// Serialized with the conventional scorecard codes (`C`, `1B`, `SS`, ...).
/// Generic codes (`OF`, `P`, `UTIL`) are accepted and carry no positional
/// adjustment.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Position {
    #[serde(rename = "C")]
    Catcher,
    #[serde(rename = "1B")]
    FirstBase,
    #[serde(rename = "2B")]
    SecondBase,
    #[serde(rename = "3B")]
    ThirdBase,
    #[serde(rename = "SS")]
    Shortstop,
    #[serde(rename = "LF")]
    LeftField,
    #[serde(rename = "CF")]
    CenterField,
    #[serde(rename = "RF")]
    RightField,
    #[serde(rename = "DH")]
    DesignatedHitter,
    /// Generic outfield, used when a feed does not break out the spot
    #[default]
    #[serde(rename = "OF")]
    Outfield,
    #[serde(rename = "P")]
    Pitcher,
    #[serde(rename = "UTIL", alias = "UT")]
    Utility,
}

impl Position {
    /// Scorecard code for display and serialization.
    pub fn code(&self) -> &'static str {
        match self {
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::Shortstop => "SS",
            Position::LeftField => "LF",
            Position::CenterField => "CF",
            Position::RightField => "RF",
            Position::DesignatedHitter => "DH",
            Position::Outfield => "OF",
            Position::Pitcher => "P",
            Position::Utility => "UTIL",
        }
    }

    /// True for positions without a specific defensive assignment.
    pub fn is_generic(&self) -> bool {
        matches!(self, Position::Outfield | Position::Pitcher | Position::Utility)
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "C" => Ok(Position::Catcher),
            "1B" => Ok(Position::FirstBase),
            "2B" => Ok(Position::SecondBase),
            "3B" => Ok(Position::ThirdBase),
            "SS" => Ok(Position::Shortstop),
            "LF" => Ok(Position::LeftField),
            "CF" => Ok(Position::CenterField),
            "RF" => Ok(Position::RightField),
            "DH" => Ok(Position::DesignatedHitter),
            "OF" => Ok(Position::Outfield),
            "P" => Ok(Position::Pitcher),
            "UTIL" | "UT" => Ok(Position::Utility),
            _ => Err(format!("Invalid position: {}", s)),
        }
    }
}
