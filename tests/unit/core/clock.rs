use super::*;

#[test]
fn manual_clock_is_settable() {
    let clock = ManualClock::new(1000.0);
    assert_eq!(clock.current_time(), 1000.0);

    clock.set(2500.0);
    assert_eq!(clock.current_time(), 2500.0);

    clock.advance(500.0);
    assert_eq!(clock.current_time(), 3000.0);
}

#[test]
fn wall_clock_does_not_go_backwards() {
    let clock = WallClock::new();
    let a = clock.current_time();
    let b = clock.current_time();
    assert!(a >= 0.0);
    assert!(b >= a);
}
