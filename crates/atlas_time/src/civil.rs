//! Validated civil date/time and the reference frame it is expressed in.
//!
//! `CivilTime` is the only way calendar fields enter the engine; its
//! constructor rejects anything the Julian Day formula would silently
//! roll over (month 13, Feb 30, hour 24, ...).

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, days_in_month};

/// Largest accepted offset from universal time, in minutes.
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Calendar date and time of day with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilTime {
    /// Build a validated civil time.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidMonth(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDay { year, month, day });
        }
        if hour > 23 {
            return Err(TimeError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(TimeError::InvalidMinute(minute));
        }
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidSecond(second));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Parse an ISO date (`YYYY-MM-DD`, optional leading `-` on the year)
    /// and a 24-hour time (`HH:MM` or `HH:MM:SS[.fff]`).
    pub fn from_iso(date: &str, time: &str) -> Result<Self, TimeError> {
        let (year, month, day) = parse_date(date.trim())?;
        let (hour, minute, second) = parse_time(time.trim())?;
        Self::new(year, month, day, hour, minute, second)
    }

    /// Day of month plus the elapsed fraction of the day.
    pub fn day_fraction(&self) -> f64 {
        self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0
    }

    /// Julian Date of this instant, taking the fields at face value.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day_fraction())
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second as u32
        )
    }
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), TimeError> {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let mut parts = body.splitn(3, '-');
    let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got '{s}'")));
    };
    let year: i32 = y
        .parse()
        .map_err(|_| TimeError::Parse(format!("bad year in '{s}'")))?;
    let month = m
        .parse()
        .map_err(|_| TimeError::Parse(format!("bad month in '{s}'")))?;
    let day = d
        .parse()
        .map_err(|_| TimeError::Parse(format!("bad day in '{s}'")))?;
    Ok((if negative { -year } else { year }, month, day))
}

fn parse_time(s: &str) -> Result<(u32, u32, f64), TimeError> {
    let parts: Vec<&str> = s.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(TimeError::Parse(format!("expected HH:MM[:SS], got '{s}'")));
    }
    let hour = parts[0]
        .parse()
        .map_err(|_| TimeError::Parse(format!("bad hour in '{s}'")))?;
    let minute = parts[1]
        .parse()
        .map_err(|_| TimeError::Parse(format!("bad minute in '{s}'")))?;
    let second = match parts.get(2) {
        Some(sec) => sec
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad second in '{s}'")))?,
        None => 0.0,
    };
    Ok((hour, minute, second))
}

/// The frame a civil time is expressed in.
///
/// The engine never consults a timezone database: callers state how far
/// the supplied wall-clock time is from universal time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeReference {
    /// The civil time already is universal time.
    #[default]
    Universal,
    /// Wall-clock time at a fixed offset east of Greenwich.
    FixedOffset { minutes_east: i32 },
}

impl TimeReference {
    /// Reject offsets no real zone uses.
    pub fn validate(self) -> Result<Self, TimeError> {
        match self {
            Self::FixedOffset { minutes_east } if minutes_east.abs() > MAX_OFFSET_MINUTES => {
                Err(TimeError::InvalidOffset(minutes_east))
            }
            other => Ok(other),
        }
    }

    /// Offset east of Greenwich in minutes.
    pub const fn offset_minutes(self) -> i32 {
        match self {
            Self::Universal => 0,
            Self::FixedOffset { minutes_east } => minutes_east,
        }
    }

    /// Convert a wall-clock Julian Date in this frame to universal time.
    pub fn to_universal_jd(self, local_jd: f64) -> f64 {
        local_jd - self.offset_minutes() as f64 / 1440.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_fields() {
        assert_eq!(
            CivilTime::new(2024, 13, 1, 0, 0, 0.0),
            Err(TimeError::InvalidMonth(13))
        );
        assert!(matches!(
            CivilTime::new(2023, 2, 29, 0, 0, 0.0),
            Err(TimeError::InvalidDay { .. })
        ));
        assert_eq!(
            CivilTime::new(2024, 1, 1, 24, 0, 0.0),
            Err(TimeError::InvalidHour(24))
        );
        assert_eq!(
            CivilTime::new(2024, 1, 1, 0, 60, 0.0),
            Err(TimeError::InvalidMinute(60))
        );
        assert!(CivilTime::new(2024, 1, 1, 0, 0, f64::NAN).is_err());
    }

    #[test]
    fn accepts_leap_day() {
        assert!(CivilTime::new(2024, 2, 29, 12, 0, 0.0).is_ok());
        assert!(CivilTime::new(2000, 2, 29, 12, 0, 0.0).is_ok());
    }

    #[test]
    fn parses_iso_fields() {
        let t = CivilTime::from_iso("1990-06-15", "14:30").unwrap();
        assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (1990, 6, 15, 14, 30));
        assert_eq!(t.second, 0.0);

        let t = CivilTime::from_iso("2024-03-20", "03:06:27.5").unwrap();
        assert!((t.second - 27.5).abs() < 1e-12);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            CivilTime::from_iso("1990/06/15", "14:30"),
            Err(TimeError::Parse(_))
        ));
        assert!(matches!(
            CivilTime::from_iso("1990-06-15", "1430"),
            Err(TimeError::Parse(_))
        ));
        assert!(matches!(
            CivilTime::from_iso("1990-06-31", "12:00"),
            Err(TimeError::InvalidDay { .. })
        ));
    }

    #[test]
    fn display_format() {
        let t = CivilTime::new(2024, 1, 15, 9, 5, 7.0).unwrap();
        assert_eq!(t.to_string(), "2024-01-15T09:05:07");
    }

    #[test]
    fn offset_shifts_to_universal() {
        let local = CivilTime::new(2000, 1, 1, 7, 0, 0.0).unwrap().to_jd();
        let ny = TimeReference::FixedOffset { minutes_east: -300 };
        assert!((ny.to_universal_jd(local) - 2_451_545.0).abs() < 1e-8);
        assert_eq!(TimeReference::Universal.to_universal_jd(local), local);
    }

    #[test]
    fn offset_bounds() {
        assert!(TimeReference::FixedOffset { minutes_east: 840 }.validate().is_ok());
        assert_eq!(
            TimeReference::FixedOffset { minutes_east: 2000 }.validate(),
            Err(TimeError::InvalidOffset(2000))
        );
    }
}
