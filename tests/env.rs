use debuglog::Logger;

// Single test: the process environment is shared across test threads.
#[test]
fn env_vars_initialize_the_logger() {
    std::env::set_var("DEBUGLOG_ENABLED", "TrUe");
    std::env::set_var("DEBUGLOG_TIMESTAMP", "0");
    std::env::set_var("DEBUGLOG_SPACE_WIDTH", "22");

    let mut lg = Logger::new();
    lg.init_from_env();

    assert!(lg.is_enabled());
    assert!(!lg.with_timestamp());
    assert_eq!(lg.space_width(), 22);

    // a negative width travels through the ordinary setter and is rejected
    std::env::set_var("DEBUGLOG_SPACE_WIDTH", "-3");
    lg.init_from_env();
    assert_eq!(lg.space_width(), 22);

    // unparsable widths are ignored
    std::env::set_var("DEBUGLOG_SPACE_WIDTH", "wide");
    lg.init_from_env();
    assert_eq!(lg.space_width(), 22);

    std::env::remove_var("DEBUGLOG_ENABLED");
    std::env::remove_var("DEBUGLOG_TIMESTAMP");
    std::env::remove_var("DEBUGLOG_SPACE_WIDTH");
}
