use encephal_config::{Day, Tier};
use serde::Serialize;

/// Outcome of one day's risk model for the current inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskResult {
    pub day: Day,
    /// Percentage rounded half-up to two decimals
    pub score: Option<f64>,
    /// Unrounded percentage; tiering compares this against the threshold
    pub raw_score: Option<f64>,
    pub tier: Tier,
    pub advisory: Option<String>,
}

impl RiskResult {
    /// Result for a day whose required inputs are incomplete.
    pub fn unknown(day: Day) -> Self {
        Self {
            day,
            score: None,
            raw_score: None,
            tier: Tier::Unknown,
            advisory: None,
        }
    }

    pub fn is_known(&self) -> bool {
        self.tier != Tier::Unknown
    }

    /// `"4.06%"`, or `unknown_label` when no score was computed.
    pub fn format_score(&self, unknown_label: &str) -> String {
        match self.score {
            Some(score) => format!("{score:.2}%"),
            None => unknown_label.to_string(),
        }
    }
}

/// Both days' results from a single recomputation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub day1: RiskResult,
    pub day3: RiskResult,
}

impl Assessment {
    pub fn day(&self, day: Day) -> &RiskResult {
        match day {
            Day::One => &self.day1,
            Day::Three => &self.day3,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RiskResult> {
        [&self.day1, &self.day3].into_iter()
    }
}
