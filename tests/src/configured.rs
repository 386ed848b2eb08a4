use encephal_config::CalculatorConfig;
use encephal_core::{Calculator, Day, Tier};
use pretty_assertions::assert_eq;

const LOWER_DAY1_THRESHOLD: &str = r#"{
    "day1": {
        "coefficients": {
            "intercept": -7.001,
            "alcohol": 1.96,
            "bilirubin": -0.024,
            "creatinine": 0.009,
            "sofa": 0.406
        },
        "threshold": 4.0,
        "advisories": { "low": "routine", "high": "escalate" }
    },
    "unknown_label": "—"
}"#;

#[test]
fn override_file_changes_tier_and_advisory() {
    let config = CalculatorConfig::from_json_str(LOWER_DAY1_THRESHOLD).unwrap();
    let mut calc = Calculator::with_config(config);
    calc.set_alcohol(true);
    calc.set_bilirubin(2.5);
    calc.set_creatinine(80.0);
    let assessment = calc.set_sofa(3).unwrap();

    assert_eq!(assessment.day1.score, Some(4.06));
    assert_eq!(assessment.day1.tier, Tier::High);
    assert_eq!(assessment.day1.advisory.as_deref(), Some("escalate"));
    assert_eq!(
        assessment.day3.format_score(&calc.config().unknown_label),
        "—"
    );
}

#[test]
fn untouched_day_keeps_builtin_model() {
    let config = CalculatorConfig::from_json_str(LOWER_DAY1_THRESHOLD).unwrap();
    assert_eq!(config.day3, CalculatorConfig::default().day3);
    assert_eq!(config.threshold(Day::Three), 20.5);
}

#[test]
fn effective_config_is_printable() {
    let json = CalculatorConfig::default().to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["day1"]["threshold"], 15.5);
    assert_eq!(value["day3"]["coefficients"]["urea"], 0.165);
    assert_eq!(value["unknown_label"], "N/A");
}
