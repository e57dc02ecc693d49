use debuglog::{Logger, Rank};

#[test]
fn zero_delta_succeeds_without_change() {
    let mut lg = Logger::builder().enabled(true).build();
    assert!(lg.change_level(0));
    assert_eq!(lg.level(), 0);
}

#[test]
fn only_the_sign_of_the_delta_matters() {
    let mut lg = Logger::builder().enabled(true).build();
    assert!(lg.change_level(5));
    assert_eq!(lg.level(), 1);

    assert!(lg.change_level(100));
    assert_eq!(lg.level(), 2);

    assert!(lg.change_level(-42));
    assert_eq!(lg.level(), 1);
}

#[test]
fn decrement_below_zero_is_rejected() {
    let mut lg = Logger::builder().enabled(true).build();
    assert!(!lg.change_level(-1));
    assert_eq!(lg.level(), 0);
    // the rejection itself is a Warning line
    assert_eq!(lg.count(Rank::Warning), 1);
}

#[test]
fn level_changes_are_not_gated_by_enabled() {
    let mut lg = Logger::new();
    assert!(!lg.is_enabled());

    assert!(lg.change_level(1));
    assert_eq!(lg.level(), 1);

    assert!(lg.change_level(-1));
    assert_eq!(lg.level(), 0);

    // rejection still fails, but its warning is suppressed by the gate
    assert!(!lg.change_level(-1));
    assert_eq!(lg.count(Rank::Warning), 0);
}
