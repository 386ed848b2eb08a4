//! Calculator configuration: per-day regression models, thresholds and
//! advisory texts.

use crate::day::{Day, Tier};
use crate::defaults::*;
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Logistic-regression coefficients. A term missing from a config file is 0,
/// i.e. the input does not contribute to that day's linear predictor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Coefficients {
    pub intercept: f64,
    pub alcohol: f64,
    pub bilirubin: f64,
    pub creatinine: f64,
    pub sofa: f64,
    pub urea: f64,
}

impl Coefficients {
    fn terms(&self) -> [(&'static str, f64); 6] {
        [
            ("intercept", self.intercept),
            ("alcohol", self.alcohol),
            ("bilirubin", self.bilirubin),
            ("creatinine", self.creatinine),
            ("sofa", self.sofa),
            ("urea", self.urea),
        ]
    }
}

/// Pre-authored guidance for each tier of one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Advisories {
    pub low: String,
    pub high: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DayModel {
    pub coefficients: Coefficients,
    pub threshold: f64,
    pub advisories: Advisories,
}

impl DayModel {
    /// The built-in model for `day`.
    pub fn builtin(day: Day) -> Self {
        match day {
            Day::One => DayModel {
                coefficients: Coefficients {
                    intercept: DAY1_INTERCEPT,
                    alcohol: DAY1_ALCOHOL,
                    bilirubin: DAY1_BILIRUBIN,
                    creatinine: DAY1_CREATININE,
                    sofa: DAY1_SOFA,
                    urea: 0.0,
                },
                threshold: DAY1_THRESHOLD,
                advisories: Advisories {
                    low: ADVISORY_DAY1_LOW.to_string(),
                    high: ADVISORY_DAY1_HIGH.to_string(),
                },
            },
            Day::Three => DayModel {
                coefficients: Coefficients {
                    intercept: DAY3_INTERCEPT,
                    alcohol: DAY3_ALCOHOL,
                    bilirubin: 0.0,
                    creatinine: DAY3_CREATININE,
                    sofa: DAY3_SOFA,
                    urea: DAY3_UREA,
                },
                threshold: DAY3_THRESHOLD,
                advisories: Advisories {
                    low: ADVISORY_DAY3_LOW.to_string(),
                    high: ADVISORY_DAY3_HIGH.to_string(),
                },
            },
        }
    }

    /// Advisory text for `tier`. `Unknown` has no advisory.
    pub fn advisory(&self, tier: Tier) -> Option<&str> {
        match tier {
            Tier::Low => Some(&self.advisories.low),
            Tier::High => Some(&self.advisories.high),
            Tier::Unknown => None,
        }
    }
}

/// Immutable configuration handed to the risk engine.
///
/// Fields absent from a JSON document keep their built-in values, so an
/// override file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    pub day1: DayModel,
    pub day3: DayModel,
    /// Label shown in place of a score that could not be computed
    pub unknown_label: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            day1: DayModel::builtin(Day::One),
            day3: DayModel::builtin(Day::Three),
            unknown_label: UNKNOWN_LABEL.to_string(),
        }
    }
}

impl CalculatorConfig {
    pub fn model(&self, day: Day) -> &DayModel {
        match day {
            Day::One => &self.day1,
            Day::Three => &self.day3,
        }
    }

    pub fn threshold(&self, day: Day) -> f64 {
        self.model(day).threshold
    }

    /// Look up the advisory for a `(day, tier)` combination.
    pub fn advisory(&self, day: Day, tier: Tier) -> Option<&str> {
        self.model(day).advisory(tier)
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject constants that would make every score meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unknown_label.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "unknown_label must not be empty".to_string(),
            ));
        }
        for day in Day::ALL {
            let model = self.model(day);
            if !model.threshold.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "day {day} threshold must be finite, got {}",
                    model.threshold
                )));
            }
            for (term, value) in model.coefficients.terms() {
                if !value.is_finite() {
                    return Err(ConfigError::Invalid(format!(
                        "day {day} coefficient '{term}' must be finite, got {value}"
                    )));
                }
            }
        }
        Ok(())
    }
}
