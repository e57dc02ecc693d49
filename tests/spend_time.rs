use std::time::Duration;

use debuglog::{spend_time, Logger, Rank};

#[test]
fn timed_work_runs_and_logs_one_info_line() {
    let mut lg = Logger::builder().enabled(true).build();
    let mut ran = false;

    lg.log_spend_time(
        || {
            std::thread::sleep(Duration::from_millis(2));
            ran = true;
        },
        "simulated task",
    );

    assert!(ran);
    assert_eq!(lg.count(Rank::Info), 1);
    assert_eq!(lg.total_count(), 1);
}

#[test]
fn disabled_logger_skips_the_work_entirely() {
    let mut lg = Logger::new();
    let mut ran = false;

    lg.log_spend_time(|| ran = true, "never runs");

    assert!(!ran);
    assert_eq!(lg.count(Rank::Info), 0);
}

#[test]
#[should_panic(expected = "boom")]
fn panics_from_the_work_propagate_unmodified() {
    let mut lg = Logger::builder().enabled(true).build();
    lg.log_spend_time(|| panic!("boom"), "doomed");
}

#[test]
fn spend_time_macro_wraps_a_block() {
    let mut lg = Logger::builder().enabled(true).build();
    let mut hits = 0;

    spend_time!(lg, "counting", {
        hits += 1;
    });

    assert_eq!(hits, 1);
    assert_eq!(lg.count(Rank::Info), 1);
}
