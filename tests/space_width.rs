use debuglog::{Logger, Rank};

#[test]
fn default_width_is_fifteen() {
    let lg = Logger::new();
    assert_eq!(lg.space_width(), 15);
}

#[test]
fn negative_width_is_rejected() {
    let mut lg = Logger::builder().enabled(true).build();
    assert!(!lg.set_space_width(-1));
    assert_eq!(lg.space_width(), 15);
    assert_eq!(lg.count(Rank::Warning), 1);
}

#[test]
fn valid_width_is_stored() {
    let mut lg = Logger::builder().enabled(true).build();
    assert!(lg.set_space_width(20));
    assert_eq!(lg.space_width(), 20);

    assert!(lg.set_space_width(0));
    assert_eq!(lg.space_width(), 0);
}

#[test]
fn width_changes_are_not_gated() {
    let mut lg = Logger::new();
    assert!(lg.set_space_width(30));
    assert_eq!(lg.space_width(), 30);

    // rejection while disabled: fails, but no warning is emitted/counted
    assert!(!lg.set_space_width(-5));
    assert_eq!(lg.space_width(), 30);
    assert_eq!(lg.count(Rank::Warning), 0);
}
