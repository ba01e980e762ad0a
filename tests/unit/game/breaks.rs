use super::*;

#[test]
fn duration_is_end_minus_start() {
    let b = BreakPeriod::new(1000.0, 3200.0);
    assert_eq!(b.duration(), 2200.0);
}

#[test]
fn breaks_below_the_minimum_have_no_effect() {
    assert!(!BreakPeriod::new(0.0, 500.0).has_effect());
    assert!(!BreakPeriod::new(0.0, 649.9).has_effect());
    assert!(BreakPeriod::new(0.0, 650.0).has_effect());
    assert!(BreakPeriod::new(0.0, 2200.0).has_effect());
}

#[test]
fn contains_is_half_open() {
    let b = BreakPeriod::new(1000.0, 2000.0);
    assert!(!b.contains(999.9));
    assert!(b.contains(1000.0));
    assert!(b.contains(1999.9));
    assert!(!b.contains(2000.0));
}

#[test]
#[should_panic(expected = "must not end before it starts")]
fn end_before_start_is_rejected() {
    let _ = BreakPeriod::new(2000.0, 1000.0);
}
