#![warn(missing_docs, unsafe_code)]
//! A small, embeddable diagnostic logger.
//!
//! One owned [`Logger`] instance per host, no global state. Lines are
//! ranked, colorized with plain ANSI escapes, optionally timestamped,
//! and always go to stdout. The logger also keeps per-rank and per-tag
//! message counters and can time a unit of work:
//!
//! ```no_run
//! use debuglog::{Color, Logger, Rank};
//!
//! let mut lg = Logger::builder().enabled(true).build();
//! lg.log(Rank::Info, "starting up");
//! lg.log_tagged(Rank::Success, "init", "cache warmed");
//! lg.line(Color::Cyan, "phase two");
//! lg.log_spend_time(|| heavy_work(), "heavy work");
//! assert_eq!(lg.tag_count("init"), 1);
//! # fn heavy_work() {}
//! ```

mod logger;

pub use logger::{Logger, LoggerBuilder};

// ===== Ranks =====
/// Severity/category of a log line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Rank {
    /// Internal status-change notices; never counted.
    Debug = 0,
    /// Success
    Success,
    /// Info
    Info,
    /// Warning
    Warning,
    /// Error
    Error,
}

impl Rank {
    /// Bracketed label rendered at the head of each line.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "[DEBUG]",
            Self::Success => "[SUCCESS]",
            Self::Info => "[INFO]",
            Self::Warning => "[WARNING]",
            Self::Error => "[ERROR]",
        }
    }
}

// ===== Colors =====
/// Terminal colors available for lines and separators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Color {
    /// Black
    Black = 0,
    /// Red
    Red,
    /// Green
    Green,
    /// Yellow
    Yellow,
    /// Blue
    Blue,
    /// Magenta
    Magenta,
    /// Cyan
    Cyan,
    /// White; also the terminal reset sequence.
    White,
}

impl Color {
    /// ANSI escape sequence for this color.
    #[inline]
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[0m",
        }
    }
}

// ===== Timestamps =====
// The stamp is the conventional 24-char `ctime` layout,
// `Www Mmm dd HH:MM:SS YYYY`, truncated defensively and wrapped as
// `<...>` plus five trailing spaces.

/// Correct Gregorian Y-M-D from days since 1970-01-01 (no deps).
#[inline]
#[allow(dead_code)]
const fn civil_from_days_utc(days_since_unix_epoch: i64) -> (i32, u32, u32) {
    // Howard Hinnant’s algorithm
    let z = days_since_unix_epoch + 719_468; // days since 0000-03-01
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0,399]
    let yd = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * yd + 2) / 153; // [0, 11]
    let d = yd - (153 * mp + 2) / 5 + 1; // [1, 31]
    let m = mp + 3 - 12 * (mp / 10); // [1, 12]
    let y = 100 * era + yoe + (m <= 2) as i64; // year
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    (y as i32, m as u32, d as u32)
}

#[cfg(not(feature = "localtime"))]
fn current_time_string() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    #[allow(clippy::cast_possible_wrap)]
    let secs = now.as_secs() as i64;

    let days = secs.div_euclid(86_400);
    let sod = secs.rem_euclid(86_400);
    let h = sod / 3_600;
    let m = sod % 3_600 / 60;
    let s = sod % 60;

    let (year, month, day) = civil_from_days_utc(days);
    // 1970-01-01 was a Thursday
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    let weekday = (days + 4).rem_euclid(7) as usize;

    format!(
        "{} {} {day:>2} {h:02}:{m:02}:{s:02} {year:04}",
        WEEKDAYS[weekday],
        MONTHS[(month - 1) as usize]
    )
}

#[cfg(feature = "localtime")]
fn current_time_string() -> String {
    // Local time via the `time` crate; UTC when the local offset cannot
    // be determined (multi-threaded processes).
    let now: time::OffsetDateTime = std::time::SystemTime::now().into();
    let now =
        now.to_offset(time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC));
    now.format(
        &time::format_description::parse(
            "[weekday repr:short] [month repr:short] [day padding:space] \
             [hour]:[minute]:[second] [year]",
        )
        .unwrap(),
    )
    .unwrap()
}

/// `<stamp>` block plus its five trailing spaces.
pub(crate) fn time_block() -> String {
    let mut stamp = current_time_string();
    stamp.truncate(24);
    format!("<{stamp}>     ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn civil_from_days_known_dates() {
        assert_eq!(civil_from_days_utc(0), (1970, 1, 1));
        assert_eq!(civil_from_days_utc(19_723), (2024, 1, 1)); // leap year start
        assert_eq!(civil_from_days_utc(19_782), (2024, 2, 29));
        assert_eq!(civil_from_days_utc(-1), (1969, 12, 31));
    }

    #[test]
    fn labels_are_bracketed() {
        assert_eq!(Rank::Debug.label(), "[DEBUG]");
        assert_eq!(Rank::Success.label(), "[SUCCESS]");
        assert_eq!(Rank::Info.label(), "[INFO]");
        assert_eq!(Rank::Warning.label(), "[WARNING]");
        assert_eq!(Rank::Error.label(), "[ERROR]");
    }

    #[test]
    fn white_is_the_reset_sequence() {
        assert_eq!(Color::White.code(), "\x1b[0m");
        assert_eq!(Color::Black.code(), "\x1b[30m");
        assert_eq!(Color::Cyan.code(), "\x1b[36m");
    }

    #[test]
    fn time_block_shape() {
        let block = time_block();
        // '<' + 24-char stamp + '>' + 5 spaces
        assert_eq!(block.len(), 31);
        assert!(block.starts_with('<'));
        assert_eq!(&block[25..26], ">");
        assert!(block.ends_with("     "));
    }
}
