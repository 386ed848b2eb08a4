// Observation days and risk tiers, the keys of the advisory table

use serde::{Deserialize, Serialize};
use std::fmt;

/// Observation day a risk model applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Day {
    One,
    Three,
}

impl Day {
    pub const ALL: [Day; 2] = [Day::One, Day::Three];

    pub fn number(self) -> u8 {
        match self {
            Day::One => 1,
            Day::Three => 3,
        }
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> u8 {
        day.number()
    }
}

impl TryFrom<u8> for Day {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Day::One),
            3 => Ok(Day::Three),
            other => Err(format!("no risk model for day {other}")),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Binary risk classification, or `Unknown` when no score could be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Low,
    High,
    Unknown,
}

impl Tier {
    /// `Low` when the score does not exceed the threshold, otherwise `High`.
    pub fn classify(score: f64, threshold: f64) -> Tier {
        if score <= threshold {
            Tier::Low
        } else {
            Tier::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Low => "LOW",
            Tier::High => "HIGH",
            Tier::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
