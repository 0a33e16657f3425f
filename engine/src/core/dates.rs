//! Date and timestamp representation for generated rows
//!
//! The benchmark represents time as a day number plus a millisecond of day.
//! Rows carry values in this form; the external writer renders them as
//! `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS.mmm`, which the `Display`
//! implementations here produce. Day 0 is 1970-01-01; calendar conversion
//! is exact proleptic-Gregorian integer arithmetic, so the representation
//! is identical on every platform.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds in one day.
pub const MSECS_PER_DAY: u32 = 86_400_000;

/// Days from 1970-01-01 to the given civil date (may be negative).
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = if month > 2 { month - 3 } else { month + 9 } as i64;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Civil date for the given day number.
fn civil_from_days(day_number: i64) -> (i64, u32, u32) {
    let z = day_number + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

/// Calendar date stored as a day number (days since 1970-01-01)
///
/// # Example
/// ```
/// use market_datagen_core_rs::Date;
///
/// let d = Date::from_ymd(2000, 1, 3);
/// assert_eq!(d.to_string(), "2000-01-03");
/// assert!(!d.is_weekend()); // a Monday
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Date {
    day_number: i64,
}

impl Date {
    /// Create a date from a raw day number.
    pub fn from_day_number(day_number: i64) -> Self {
        Self { day_number }
    }

    /// Create a date from a civil year/month/day.
    ///
    /// # Panics
    /// Panics if month or day are outside the calendar.
    pub fn from_ymd(year: i64, month: u32, day: u32) -> Self {
        assert!((1..=12).contains(&month), "from_ymd: month {month} invalid");
        assert!((1..=31).contains(&day), "from_ymd: day {day} invalid");
        let date = Self::from_day_number(days_from_civil(year, month, day));
        let (y, m, d) = civil_from_days(date.day_number);
        assert!(
            (y, m, d) == (year, month, day),
            "from_ymd: {year}-{month:02}-{day:02} is not a calendar date"
        );
        date
    }

    /// The raw day number (days since 1970-01-01).
    pub fn day_number(&self) -> i64 {
        self.day_number
    }

    /// Civil (year, month, day) for this date.
    pub fn to_ymd(&self) -> (i64, u32, u32) {
        civil_from_days(self.day_number)
    }

    /// This date shifted by `days` (negative shifts go backwards).
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_day_number(self.day_number + days)
    }

    /// Day of week, 0 = Sunday .. 6 = Saturday.
    pub fn weekday(&self) -> u32 {
        // Day 0 (1970-01-01) was a Thursday.
        (self.day_number + 4).rem_euclid(7) as u32
    }

    /// True on Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        let wd = self.weekday();
        wd == 0 || wd == 6
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.to_ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

/// Date plus millisecond of day
///
/// # Example
/// ```
/// use market_datagen_core_rs::{Date, Timestamp};
///
/// let ts = Timestamp::new(Date::from_ymd(2005, 1, 3), 34_200_000); // 09:30:00
/// assert_eq!(ts.to_string(), "2005-01-03 09:30:00.000");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timestamp {
    date: Date,
    msec_of_day: u32,
}

impl Timestamp {
    /// Create a timestamp from a date and a millisecond of day.
    ///
    /// # Panics
    /// Panics if `msec_of_day` does not fit in one day.
    pub fn new(date: Date, msec_of_day: u32) -> Self {
        assert!(
            msec_of_day < MSECS_PER_DAY,
            "Timestamp: msec_of_day {msec_of_day} out of range"
        );
        Self { date, msec_of_day }
    }

    /// The calendar date part.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Millisecond of day part.
    pub fn msec_of_day(&self) -> u32 {
        self.msec_of_day
    }

    /// This timestamp shifted by `msecs` milliseconds, carrying across days.
    pub fn add_msecs(&self, msecs: i64) -> Self {
        let total = self.date.day_number() as i128 * MSECS_PER_DAY as i128
            + self.msec_of_day as i128
            + msecs as i128;
        let day = total.div_euclid(MSECS_PER_DAY as i128) as i64;
        let msec = total.rem_euclid(MSECS_PER_DAY as i128) as u32;
        Self::new(Date::from_day_number(day), msec)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.msec_of_day / 1000;
        write!(
            f,
            "{} {:02}:{:02}:{:02}.{:03}",
            self.date,
            secs / 3600,
            (secs / 60) % 60,
            secs % 60,
            self.msec_of_day % 1000
        )
    }
}
