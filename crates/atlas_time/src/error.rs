//! Error types for calendar and time-reference handling.

use thiserror::Error;

/// Errors from civil calendar validation or parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    #[error("month {0} is outside 1..=12")]
    InvalidMonth(u32),
    /// Day does not exist in the given month.
    #[error("day {day} does not exist in {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23.
    #[error("hour {0} is outside 0..=23")]
    InvalidHour(u32),
    /// Minute outside 0..=59.
    #[error("minute {0} is outside 0..=59")]
    InvalidMinute(u32),
    /// Second outside [0, 60) or not finite.
    #[error("second {0} is outside [0, 60)")]
    InvalidSecond(f64),
    /// UTC offset larger than eighteen hours.
    #[error("UTC offset of {0} minutes is out of range")]
    InvalidOffset(i32),
    /// Date or time text did not match `YYYY-MM-DD` / `HH:MM[:SS]`.
    #[error("parse error: {0}")]
    Parse(String),
}
