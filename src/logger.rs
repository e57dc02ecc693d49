use std::collections::HashMap;
use std::io::{self, Write};
use std::time::Instant;

use crate::{time_block, Color, Rank};

/// Total width of a decorative separator line.
const LINE_WIDTH: usize = 80;

/// An owned diagnostic logger.
///
/// Every operation runs synchronously on the caller's thread; state is
/// plain mutable data with no locks. Hosts that need cross-thread use
/// must synchronize externally.
pub struct Logger {
    enabled: bool,
    with_timestamp: bool,
    level: i32,
    space_width: i32,

    // Success and Debug (status notices) keep fixed colors; only
    // Info/Warning/Error are customizable through `set_color`.
    success_color: Color,
    info_color: Color,
    warning_color: Color,
    error_color: Color,
    status_color: Color,

    success_count: u32,
    info_count: u32,
    warning_count: u32,
    error_count: u32,

    tag_counts: HashMap<String, u32>,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            enabled: false,
            with_timestamp: false,
            level: 0,
            space_width: 15,
            success_color: Color::Green,
            info_color: Color::White,
            warning_color: Color::Yellow,
            error_color: Color::Red,
            status_color: Color::Cyan,
            success_count: 0,
            info_count: 0,
            warning_count: 0,
            error_count: 0,
            tag_counts: HashMap::new(),
        }
    }
}

impl Logger {
    /// Create a disabled logger with default settings.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`LoggerBuilder`].
    #[inline]
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    // ===== Mode control =====

    /// Whether logging is enabled.
    #[inline]
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable logging; returns the new state.
    ///
    /// Emits a status notice through the ordinary log path, so turning
    /// the logger off announces nothing.
    pub fn set_enabled(&mut self, on: bool) -> bool {
        self.enabled = on;
        self.status_notice("Debugging", on);
        self.enabled
    }

    /// Whether lines carry a timestamp block.
    #[inline]
    #[must_use]
    pub const fn with_timestamp(&self) -> bool {
        self.with_timestamp
    }

    /// Enable or disable timestamps; returns the new state.
    ///
    /// The flag changes regardless of the enabled gate; only the notice
    /// is suppressed while disabled.
    pub fn set_timestamp(&mut self, on: bool) -> bool {
        self.with_timestamp = on;
        self.status_notice("Timestamp", on);
        self.with_timestamp
    }

    /// Apply `DEBUGLOG_ENABLED`, `DEBUGLOG_TIMESTAMP` and
    /// `DEBUGLOG_SPACE_WIDTH` from the environment, through the
    /// ordinary setters.
    pub fn init_from_env(&mut self) {
        if let Ok(s) = std::env::var("DEBUGLOG_ENABLED") {
            self.set_enabled(env_bool(&s));
        }
        if let Ok(s) = std::env::var("DEBUGLOG_TIMESTAMP") {
            self.set_timestamp(env_bool(&s));
        }
        if let Ok(s) = std::env::var("DEBUGLOG_SPACE_WIDTH") {
            if let Ok(w) = s.parse::<i32>() {
                self.set_space_width(w);
            }
        }
    }

    // ===== Indent level =====

    /// Current nesting depth.
    #[inline]
    #[must_use]
    pub const fn level(&self) -> i32 {
        self.level
    }

    /// Step the nesting depth by the sign of `delta`.
    ///
    /// Only the sign matters: any positive delta is +1, any negative is
    /// -1, zero succeeds without change. Stepping below zero fails and
    /// leaves the level untouched.
    pub fn change_level(&mut self, delta: i32) -> bool {
        if delta == 0 {
            return true;
        }
        let step = if delta > 0 { 1 } else { -1 };
        if self.level + step < 0 {
            self.log(Rank::Warning, "Current level cannot be less than 0.");
            return false;
        }
        self.level += step;
        true
    }

    // ===== Formatting configuration =====

    /// Column width the indent-plus-label prefix is padded to.
    #[inline]
    #[must_use]
    pub const fn space_width(&self) -> i32 {
        self.space_width
    }

    /// Set the prefix padding width; negative widths are rejected.
    pub fn set_space_width(&mut self, width: i32) -> bool {
        if width < 0 {
            self.log(Rank::Warning, "Length of space cannot be negative.");
            return false;
        }
        self.space_width = width;
        true
    }

    /// Customize the color of Info, Warning or Error lines.
    ///
    /// Success and Debug keep their fixed colors. Color changes are a
    /// logged, gated action: they fail while the logger is disabled.
    pub fn set_color(&mut self, rank: Rank, color: Color) -> bool {
        if !self.enabled {
            self.log(
                Rank::Warning,
                "Debugging is disabled so that color changing failed.",
            );
            return false;
        }
        match rank {
            Rank::Info => self.info_color = color,
            Rank::Warning => self.warning_color = color,
            Rank::Error => self.error_color = color,
            Rank::Success | Rank::Debug => return false,
        }
        true
    }

    // ===== Core logging =====

    /// Emit one ranked line to stdout.
    ///
    /// Returns `false` without any side effect while disabled. On
    /// emission the matching rank counter is incremented (Debug lines
    /// are never counted).
    pub fn log(&mut self, rank: Rank, message: &str) -> bool {
        self.log_tagged(rank, "", message)
    }

    /// Emit one ranked line carrying a `(tag)` block.
    ///
    /// The tag's occurrence counter is incremented independently of the
    /// rank counter; an empty tag behaves exactly like [`Logger::log`].
    pub fn log_tagged(&mut self, rank: Rank, tag: &str, message: &str) -> bool {
        if !self.enabled {
            return false;
        }

        let line = self.render(rank, tag, message);
        self.bump_rank(rank);
        self.bump_tag(tag);
        emit_stdout(&line);
        true
    }

    // Compose color + indent + label + padding + stamp + (tag) + message
    // + reset. Kept apart from I/O so the shape is testable.
    fn render(&self, rank: Rank, tag: &str, message: &str) -> String {
        let color = self.rank_color(rank).code();
        let indent = indent_prefix(self.level);
        let label = rank.label();
        let pad = self.alignment_spaces(indent.len() + label.len());
        let stamp = if self.with_timestamp {
            time_block()
        } else {
            String::new()
        };
        let tag_block = if tag.is_empty() {
            String::new()
        } else {
            format!("({tag})")
        };
        let reset = Color::White.code();
        format!("{color}{indent}{label}{pad}{stamp}{tag_block}{message}{reset}")
    }

    const fn rank_color(&self, rank: Rank) -> Color {
        match rank {
            Rank::Success => self.success_color,
            Rank::Info => self.info_color,
            Rank::Warning => self.warning_color,
            Rank::Error => self.error_color,
            Rank::Debug => self.status_color,
        }
    }

    fn alignment_spaces(&self, prefix_len: usize) -> String {
        let width = usize::try_from(self.space_width).unwrap_or(0);
        " ".repeat(width.saturating_sub(prefix_len))
    }

    fn bump_rank(&mut self, rank: Rank) {
        match rank {
            Rank::Success => self.success_count += 1,
            Rank::Info => self.info_count += 1,
            Rank::Warning => self.warning_count += 1,
            Rank::Error => self.error_count += 1,
            Rank::Debug => {}
        }
    }

    fn bump_tag(&mut self, tag: &str) {
        if tag.is_empty() {
            return;
        }
        *self.tag_counts.entry(tag.to_owned()).or_insert(0) += 1;
    }

    fn status_notice(&mut self, what: &str, on: bool) {
        let state = if on { "enabled." } else { "disabled." };
        self.log(Rank::Debug, &format!("{what} has been {state}"));
    }

    // ===== Decorative separator =====

    /// Draw a centered separator line in the given color.
    pub fn line(&self, color: Color, message: &str) {
        if !self.enabled {
            return;
        }
        let rule = render_rule(message);
        emit_stdout(&format!("{}{rule}{}", color.code(), Color::White.code()));
    }

    // ===== Timed execution =====

    /// Run `work` synchronously and log how long it took.
    ///
    /// Emits one Info line `"<task> took <ms> ms."` (counted like any
    /// Info message). While disabled nothing happens and `work` is not
    /// invoked. Panics raised by `work` propagate unmodified.
    pub fn log_spend_time<F: FnOnce()>(&mut self, work: F, task_name: &str) {
        if !self.enabled {
            return;
        }
        let start = Instant::now();
        work();
        let elapsed_ms = start.elapsed().as_secs_f64() * 1_000.0;
        self.log(Rank::Info, &format!("{task_name} took {elapsed_ms:.6} ms."));
    }

    // ===== Counters & tags =====

    /// Stored message count for a countable rank; 0 for Debug.
    #[must_use]
    pub const fn count(&self, rank: Rank) -> u32 {
        match rank {
            Rank::Success => self.success_count,
            Rank::Info => self.info_count,
            Rank::Warning => self.warning_count,
            Rank::Error => self.error_count,
            Rank::Debug => 0,
        }
    }

    /// Sum of the four rank counters, recomputed on every call so it is
    /// always consistent with the component counters at this moment.
    #[must_use]
    pub const fn total_count(&self) -> u32 {
        self.success_count + self.info_count + self.warning_count + self.error_count
    }

    /// Zero exactly one rank's counter.
    pub fn reset_count(&mut self, rank: Rank) {
        match rank {
            Rank::Success => self.success_count = 0,
            Rank::Info => self.info_count = 0,
            Rank::Warning => self.warning_count = 0,
            Rank::Error => self.error_count = 0,
            Rank::Debug => {}
        }
    }

    /// Zero all four rank counters at once.
    pub fn reset_total_count(&mut self) {
        self.success_count = 0;
        self.info_count = 0;
        self.warning_count = 0;
        self.error_count = 0;
    }

    /// Occurrence count for a tag; 0 for an empty or unseen tag.
    #[must_use]
    pub fn tag_count(&self, tag: &str) -> u32 {
        if tag.is_empty() {
            return 0;
        }
        self.tag_counts.get(tag).copied().unwrap_or(0)
    }

    /// Forget one tag entirely; no-op for an empty tag.
    pub fn reset_tag_count(&mut self, tag: &str) {
        if tag.is_empty() {
            return;
        }
        self.tag_counts.remove(tag);
    }

    /// Forget every tag.
    pub fn reset_all_tag_counts(&mut self) {
        self.tag_counts.clear();
    }
}

// " |" per level, one trailing space when nested at all.
fn indent_prefix(level: i32) -> String {
    let depth = usize::try_from(level).unwrap_or(0);
    if depth == 0 {
        return String::new();
    }
    let mut s = " |".repeat(depth);
    s.push(' ');
    s
}

fn render_rule(message: &str) -> String {
    let dashes = "-".repeat(LINE_WIDTH.saturating_sub(message.len()) / 2);
    let mut rule = format!("{dashes} {message} {dashes}");
    if rule.len() < LINE_WIDTH {
        rule.push('-');
    }
    rule
}

fn emit_stdout(text: &str) {
    let mut out = io::stdout().lock();
    let _ = out.write_all(text.as_bytes());
    let _ = out.write_all(b"\n");
}

fn env_bool(s: &str) -> bool {
    s == "1" || s.eq_ignore_ascii_case("true")
}

/// Builder for [`Logger`].
///
/// Flags left unset stay at their defaults and announce nothing;
/// explicitly supplied flags are announced with a Debug status notice
/// at `build` time (enabled status first, then timestamp status),
/// through the same gated log path as everything else.
#[derive(Default)]
pub struct LoggerBuilder {
    enabled: Option<bool>,
    timestamp: Option<bool>,
}

impl LoggerBuilder {
    /// Set the enabled flag.
    #[inline]
    #[must_use]
    pub const fn enabled(mut self, on: bool) -> Self {
        self.enabled = Some(on);
        self
    }

    /// Set the timestamp flag.
    #[inline]
    #[must_use]
    pub const fn timestamp(mut self, on: bool) -> Self {
        self.timestamp = Some(on);
        self
    }

    /// Build the logger and announce the explicitly chosen flags.
    #[must_use]
    pub fn build(self) -> Logger {
        let mut lg = Logger {
            enabled: self.enabled.unwrap_or(false),
            with_timestamp: self.timestamp.unwrap_or(false),
            ..Logger::default()
        };
        if let Some(on) = self.enabled {
            lg.status_notice("Debugging", on);
        }
        if let Some(on) = self.timestamp {
            lg.status_notice("Timestamp", on);
        }
        lg
    }
}

// ===== Macros (require a logger argument) ====================================
// Formatting sugar over `log`/`log_tagged`, one macro per rank plus a
// `_tag` variant, in the caller-supplied-logger style. Import as
// `use debuglog::{info, info_tag};` then `info!(lg, "x = {}", x);`.

#[macro_export]
/// Emit a ranked, formatted line
macro_rules! __debuglog_log {
    ($lg:expr, $rank:expr, $tag:expr, $($t:tt)+) => {
        $lg.log_tagged($rank, $tag, &format!($($t)+))
    }
}

#[macro_export]
/// Emit a Debug status line
macro_rules! debug { ($lg:expr, $($t:tt)+) => { $crate::__debuglog_log!($lg, $crate::Rank::Debug, "", $($t)+) } }
#[macro_export]
/// Emit a Success line
macro_rules! success { ($lg:expr, $($t:tt)+) => { $crate::__debuglog_log!($lg, $crate::Rank::Success, "", $($t)+) } }
#[macro_export]
/// Emit an Info line
macro_rules! info { ($lg:expr, $($t:tt)+) => { $crate::__debuglog_log!($lg, $crate::Rank::Info, "", $($t)+) } }
#[macro_export]
/// Emit a Warning line
macro_rules! warning { ($lg:expr, $($t:tt)+) => { $crate::__debuglog_log!($lg, $crate::Rank::Warning, "", $($t)+) } }
#[macro_export]
/// Emit an Error line
macro_rules! error { ($lg:expr, $($t:tt)+) => { $crate::__debuglog_log!($lg, $crate::Rank::Error, "", $($t)+) } }

#[macro_export]
/// Emit a tagged Success line
macro_rules! success_tag { ($lg:expr, $tag:expr, $($t:tt)+) => { $crate::__debuglog_log!($lg, $crate::Rank::Success, $tag, $($t)+) } }
#[macro_export]
/// Emit a tagged Info line
macro_rules! info_tag { ($lg:expr, $tag:expr, $($t:tt)+) => { $crate::__debuglog_log!($lg, $crate::Rank::Info, $tag, $($t)+) } }
#[macro_export]
/// Emit a tagged Warning line
macro_rules! warning_tag { ($lg:expr, $tag:expr, $($t:tt)+) => { $crate::__debuglog_log!($lg, $crate::Rank::Warning, $tag, $($t)+) } }
#[macro_export]
/// Emit a tagged Error line
macro_rules! error_tag { ($lg:expr, $tag:expr, $($t:tt)+) => { $crate::__debuglog_log!($lg, $crate::Rank::Error, $tag, $($t)+) } }

#[macro_export]
/// Time a block through `log_spend_time`
macro_rules! spend_time {
    ($lg:expr, $label:expr, $body:block) => {
        $lg.log_spend_time(|| $body, $label)
    };
}
