use crate::common::{init_test_logger, Recorder};
use approx::assert_abs_diff_eq;
use encephal_core::{Calculator, Day, RiskResult, Tier};
use pretty_assertions::assert_eq;

fn scenario_a(calc: &mut Calculator) {
    calc.set_alcohol(true);
    calc.set_bilirubin(2.5);
    calc.set_creatinine(80.0);
    calc.set_sofa(3);
}

#[test]
fn scenario_a_day1_low_day3_unknown() {
    init_test_logger();
    let (mut calc, recorder) = Recorder::attach(Calculator::default());
    scenario_a(&mut calc);

    let latest = recorder.last().unwrap();
    assert_eq!(latest.day1.score, Some(4.06));
    assert_abs_diff_eq!(latest.day1.raw_score.unwrap(), 4.0582, epsilon = 1e-4);
    assert_eq!(latest.day1.tier, Tier::Low);
    assert_eq!(
        latest.day1.advisory.as_deref(),
        calc.config().advisory(Day::One, Tier::Low)
    );
    assert_eq!(latest.day3, RiskResult::unknown(Day::Three));
}

#[test]
fn scenario_b_adds_day3_and_reemits_day1() {
    let (mut calc, recorder) = Recorder::attach(Calculator::default());
    scenario_a(&mut calc);
    let before = recorder.last().unwrap();
    let emitted = recorder.count();

    let after = calc.set_urea(10.0).unwrap();
    assert_eq!(recorder.count(), emitted + 1);
    assert_eq!(after.day1, before.day1);
    assert_eq!(after.day3.score, Some(3.81));
    assert_abs_diff_eq!(after.day3.raw_score.unwrap(), 3.8052, epsilon = 1e-4);
    assert_eq!(after.day3.tier, Tier::Low);
    assert_eq!(after.day3.advisory.as_deref(), Some("Стандартная терапия"));
    assert_eq!(after.day3.format_score("N/A"), "3.81%");
}

#[test]
fn scenario_c_reset_clears_both_days() {
    let (mut calc, recorder) = Recorder::attach(Calculator::default());
    scenario_a(&mut calc);
    calc.set_urea(10.0);
    let emitted = recorder.count();

    calc.reset();
    assert_eq!(recorder.count(), emitted + 1);
    let latest = recorder.last().unwrap();
    for result in latest.iter() {
        assert_eq!(result.tier, Tier::Unknown);
        assert_eq!(result.score, None);
        assert_eq!(result.advisory, None);
    }
}

#[test]
fn high_risk_on_both_days() {
    let mut calc = Calculator::default();
    calc.set_alcohol(true);
    calc.set_bilirubin(1.0);
    calc.set_creatinine(200.0);
    calc.set_sofa(12);
    let assessment = calc.set_urea(30.0).unwrap();
    assert_eq!(assessment.day1.tier, Tier::High);
    assert_eq!(assessment.day3.tier, Tier::High);
    assert!(assessment
        .day3
        .advisory
        .as_deref()
        .unwrap()
        .contains("Консультация невролога"));
}

#[test]
fn zero_creatinine_blocks_both_days() {
    let mut calc = Calculator::default();
    scenario_a(&mut calc);
    calc.set_urea(10.0);
    let assessment = calc.set_creatinine(0.0).unwrap();
    assert!(!assessment.day1.is_known());
    assert!(!assessment.day3.is_known());
}

#[test]
fn infinite_bilirubin_leaves_day3_intact() {
    let mut calc = Calculator::default();
    scenario_a(&mut calc);
    calc.set_urea(10.0);
    let assessment = calc.set_bilirubin(f64::INFINITY).unwrap();
    assert_eq!(assessment.day3.score, Some(3.81));
    assert_eq!(assessment.day3.tier, Tier::Low);
    assert_eq!(assessment.day3.advisory.as_deref(), Some("Стандартная терапия"));
}
