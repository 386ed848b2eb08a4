use crate::common::Recorder;
use encephal_core::{Calculator, Field, Tier, Update};

#[test]
fn setting_held_value_emits_nothing() {
    let (mut calc, recorder) = Recorder::attach(Calculator::default());
    assert!(calc.set_alcohol(false).is_none());
    assert!(calc.set_bilirubin(0.0).is_none());
    assert!(calc.set_creatinine(0.0).is_none());
    assert!(calc.set_sofa(0).is_none());
    assert!(calc.set_urea(0.0).is_none());
    assert_eq!(recorder.count(), 0);

    calc.set_bilirubin(2.5);
    calc.set_bilirubin(2.5);
    assert_eq!(recorder.count(), 1);
}

#[test]
fn each_effective_change_emits_exactly_once() {
    let (mut calc, recorder) = Recorder::attach(Calculator::default());
    let updates = [
        Update::Alcohol(true),
        Update::Bilirubin(2.5),
        Update::Creatinine(80.0),
        Update::Sofa(3),
        Update::Urea(10.0),
    ];
    for (i, update) in updates.into_iter().enumerate() {
        assert!(calc.apply(update).is_some(), "{} should change", update.field());
        assert_eq!(recorder.count(), i + 1);
    }
}

#[test]
fn day3_only_field_retriggers_day1() {
    let (mut calc, recorder) = Recorder::attach(Calculator::default());
    calc.set_bilirubin(2.5);
    calc.set_creatinine(80.0);
    calc.set_sofa(3);
    let day1_before = recorder.last().unwrap().day1;

    calc.set_urea(10.0);
    let latest = recorder.last().unwrap();
    assert_eq!(latest.day1, day1_before);
    assert_eq!(latest.day1.tier, Tier::Low);
}

#[test]
fn day1_only_field_retriggers_day3() {
    let (mut calc, recorder) = Recorder::attach(Calculator::default());
    calc.set_creatinine(80.0);
    calc.set_sofa(3);
    calc.set_urea(10.0);
    let emitted = recorder.count();
    let day3_before = recorder.last().unwrap().day3;

    calc.set_bilirubin(4.0);
    assert_eq!(recorder.count(), emitted + 1);
    assert_eq!(recorder.last().unwrap().day3, day3_before);
}

#[test]
fn published_results_match_state_after_mutation() {
    let (mut calc, recorder) = Recorder::attach(Calculator::default());
    calc.set_creatinine(80.0);
    calc.set_sofa(3);
    for urea in [5.0, 10.0, 20.0] {
        calc.set_urea(urea);
        assert_eq!(calc.input().urea(), urea);
        assert_eq!(recorder.last().unwrap(), calc.assess());
    }
}

#[test]
fn nan_is_never_equal_so_always_recomputes() {
    let (mut calc, recorder) = Recorder::attach(Calculator::default());
    calc.set_urea(f64::NAN);
    calc.set_urea(f64::NAN);
    assert_eq!(recorder.count(), 2);
    assert!(calc.input().is_present(Field::Urea));
}
