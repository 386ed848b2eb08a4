//! Day-1 and day-3 logistic-regression risk models.
//!
//! The engine is a pure function of an [`InputState`]: it keeps no memory
//! between evaluations.

use crate::input::{Field, InputState};
use crate::result::{Assessment, RiskResult};
use encephal_config::{CalculatorConfig, Coefficients, Day, Tier};

/// Inputs that must all be entered before `day`'s score is computed.
/// Alcohol is never required: `false` is a legitimate answer.
pub fn required_fields(day: Day) -> &'static [Field] {
    match day {
        Day::One => &[Field::Bilirubin, Field::Creatinine, Field::Sofa],
        Day::Three => &[Field::Creatinine, Field::Sofa, Field::Urea],
    }
}

/// `intercept + Σ coefficient * term` over the inputs the model uses.
/// Terms with a zero coefficient are left out, so an input outside the
/// model (e.g. an infinite bilirubin on day 3) cannot poison the sum.
pub fn linear_predictor(coefficients: &Coefficients, input: &InputState) -> f64 {
    [
        (coefficients.alcohol, Field::Alcohol),
        (coefficients.bilirubin, Field::Bilirubin),
        (coefficients.creatinine, Field::Creatinine),
        (coefficients.sofa, Field::Sofa),
        (coefficients.urea, Field::Urea),
    ]
    .into_iter()
    .filter(|(c, _)| *c != 0.0)
    .fold(coefficients.intercept, |z, (c, field)| z + c * input.term(field))
}

/// Logistic transform scaled to a percentage: `100 / (1 + e^-z)`.
pub fn logistic_percent(z: f64) -> f64 {
    100.0 / (1.0 + (-z).exp())
}

/// Round half away from zero to `decimals` places (half-up for the
/// non-negative percentages produced here).
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: CalculatorConfig,
}

impl RiskEngine {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Evaluate one day's model. Incomplete inputs give an `Unknown` result.
    pub fn evaluate(&self, day: Day, input: &InputState) -> RiskResult {
        if !required_fields(day).iter().all(|f| input.is_present(*f)) {
            return RiskResult::unknown(day);
        }

        let model = self.config.model(day);
        let z = linear_predictor(&model.coefficients, input);
        let raw = logistic_percent(z);
        let tier = Tier::classify(raw, model.threshold);
        log::debug!("risk on day {day}: {raw} (z = {z}, tier {tier})");

        RiskResult {
            day,
            score: Some(round_half_up(raw, 2)),
            raw_score: Some(raw),
            tier,
            advisory: model.advisory(tier).map(str::to_string),
        }
    }

    /// Evaluate both days.
    pub fn assess(&self, input: &InputState) -> Assessment {
        Assessment {
            day1: self.evaluate(Day::One, input),
            day3: self.evaluate(Day::Three, input),
        }
    }
}
