use debuglog::{info, spend_time, Color, Logger, Rank};

fn main() {
    // Or: let mut debug = Logger::new(); debug.init_from_env();
    //   DEBUGLOG_ENABLED=1 DEBUGLOG_TIMESTAMP=1 DEBUGLOG_SPACE_WIDTH=20
    let mut debug = Logger::builder().enabled(true).timestamp(true).build();

    debug.log(Rank::Info, "This is an info message.");
    debug.log(Rank::Warning, "This is a warning message.");
    debug.log(Rank::Error, "This is an error message.");
    debug.log_tagged(Rank::Success, "init", "This is a success message.");
    debug.log_tagged(Rank::Info, "init", "This is another info message with a tag.");
    info!(debug, "\"init\" was tagged {} times.", debug.tag_count("init"));

    debug.line(Color::Cyan, "timed work");
    spend_time!(debug, "simulated task", {
        std::thread::sleep(std::time::Duration::from_millis(500));
    });
    debug.log(Rank::Success, "Task completed successfully.");

    debug.change_level(1);
    debug.log(Rank::Info, "This is an info message at level 1.");
    debug.change_level(-1);

    debug.line(Color::White, "");
    info!(debug, "{} messages total.", debug.total_count());
}
