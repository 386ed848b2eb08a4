// Typed parsing of user-entered values. The scoring core trusts its inputs,
// so malformed text is rejected here before it reaches the calculator.

use encephal_core::{Field, Update};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown input '{0}' (expected alcohol, bilirubin, creatinine, sofa or urea)")]
    UnknownField(String),
    #[error("missing value for {0}")]
    MissingValue(Field),
    #[error("alcohol expects yes/no, got '{0}'")]
    InvalidFlag(String),
    #[error("{field} expects a number, got '{value}'")]
    InvalidNumber { field: Field, value: String },
    #[error("{field} expects a whole number, got '{value}'")]
    InvalidInteger { field: Field, value: String },
}

/// Parse `raw` as a new value for `field`.
///
/// Decimal commas are accepted. Non-finite numbers are rejected.
pub fn parse_update(field: Field, raw: &str) -> Result<Update, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::MissingValue(field));
    }
    match field {
        Field::Alcohol => parse_flag(raw).map(Update::Alcohol),
        Field::Bilirubin => parse_number(field, raw).map(Update::Bilirubin),
        Field::Creatinine => parse_number(field, raw).map(Update::Creatinine),
        Field::Urea => parse_number(field, raw).map(Update::Urea),
        Field::Sofa => raw
            .parse::<i32>()
            .map(Update::Sofa)
            .map_err(|_| InputError::InvalidInteger {
                field,
                value: raw.to_string(),
            }),
    }
}

/// Parse a `<field> <value>` pair.
pub fn parse_assignment(name: &str, raw: &str) -> Result<Update, InputError> {
    let field = Field::from_name(name).ok_or_else(|| InputError::UnknownField(name.to_string()))?;
    parse_update(field, raw)
}

fn parse_flag(raw: &str) -> Result<bool, InputError> {
    match raw.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" | "on" => Ok(true),
        "no" | "n" | "false" | "0" | "off" => Ok(false),
        _ => Err(InputError::InvalidFlag(raw.to_string())),
    }
}

/// A finite number, decimal comma allowed. Also used as a clap value parser.
pub fn parse_finite(raw: &str) -> Result<f64, String> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("expected a finite number, got '{raw}'"))
}

fn parse_number(field: Field, raw: &str) -> Result<f64, InputError> {
    parse_finite(raw).map_err(|_| InputError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}
