//! Text and JSON rendering of calculator state.
//!
//! The day-1 and day-3 panels both show alcohol, creatinine and SOFA; those
//! shared inputs are mirrored from the single input state on every render.

use encephal_core::{Assessment, Day, Field, InputState, ResultSink};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Inputs displayed on each day's panel
pub fn panel_fields(day: Day) -> &'static [Field] {
    match day {
        Day::One => &[Field::Alcohol, Field::Bilirubin, Field::Creatinine, Field::Sofa],
        Day::Three => &[Field::Alcohol, Field::Creatinine, Field::Sofa, Field::Urea],
    }
}

fn field_value(input: &InputState, field: Field) -> String {
    match field {
        Field::Alcohol => {
            let answer = if input.alcohol() { "yes" } else { "no" };
            answer.to_string()
        }
        Field::Bilirubin => input.bilirubin().to_string(),
        Field::Creatinine => input.creatinine().to_string(),
        Field::Sofa => input.sofa().to_string(),
        Field::Urea => input.urea().to_string(),
    }
}

pub fn render_inputs(input: &InputState) -> Vec<String> {
    Day::ALL
        .iter()
        .map(|&day| {
            let values: Vec<String> = panel_fields(day)
                .iter()
                .map(|&f| format!("{f}={}", field_value(input, f)))
                .collect();
            format!("Day {day} inputs: {}", values.join(" "))
        })
        .collect()
}

/// One headline per day, followed by the advisory indented by two spaces.
pub fn render_assessment(assessment: &Assessment, unknown_label: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for result in assessment.iter() {
        let score = result.format_score(unknown_label);
        if result.is_known() {
            lines.push(format!("Day {} risk: {score} [{}]", result.day, result.tier));
        } else {
            lines.push(format!("Day {} risk: {score}", result.day));
        }
        if let Some(advisory) = &result.advisory {
            lines.extend(advisory.lines().map(|l| format!("  {l}")));
        }
    }
    lines
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a InputState,
    #[serde(flatten)]
    assessment: &'a Assessment,
}

/// `{ "input": {...}, "day1": {...}, "day3": {...} }`
pub fn render_json(input: &InputState, assessment: &Assessment) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report { input, assessment })
}

/// Result sink that renders every published assessment into a shared
/// line buffer.
#[derive(Debug, Clone)]
pub struct TextSink {
    unknown_label: String,
    lines: Rc<RefCell<Vec<String>>>,
}

impl TextSink {
    pub fn new(unknown_label: impl Into<String>) -> Self {
        Self {
            unknown_label: unknown_label.into(),
            lines: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Take everything rendered since the last drain.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }
}

impl ResultSink for TextSink {
    fn publish(&mut self, assessment: &Assessment) {
        self.lines
            .borrow_mut()
            .extend(render_assessment(assessment, &self.unknown_label));
    }
}
