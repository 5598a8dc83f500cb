//! Calendar date without time-of-day.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

const ISO_FORMAT: &str = "%Y-%m-%d";

/// A calendar day. Time-of-day never enters any comparison.
///
/// Serializes as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StayDate(NaiveDate);

impl StayDate {
    /// Creates a date from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the fields do not name a
    /// real Gregorian day (e.g. February 30).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Parses a canonical `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidIsoDate`] for anything else.
    pub fn parse_iso(input: &str) -> Result<Self, CalendarError> {
        NaiveDate::parse_from_str(input.trim(), ISO_FORMAT)
            .map(Self)
            .map_err(|_| CalendarError::InvalidIsoDate {
                input: input.to_string(),
            })
    }

    /// Strips the time-of-day from a zoned timestamp, keeping the local
    /// calendar day of that zone.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self(datetime.date_naive())
    }

    /// The current calendar day in the local time zone.
    pub fn today() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Returns the canonical `YYYY-MM-DD` form.
    pub fn to_iso(self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }

    /// Formats with a chrono `strftime` pattern, e.g. `%d/%m/%Y`.
    pub fn format(self, pattern: &str) -> String {
        self.0.format(pattern).to_string()
    }

    /// Moves `n` calendar days forward (or backward when negative).
    ///
    /// # Panics
    ///
    /// Panics if the result leaves chrono's supported range (about
    /// ±262,000 years), which no booking calendar reaches.
    pub fn add_days(self, n: i64) -> Self {
        let shifted = if n >= 0 {
            self.0.checked_add_days(Days::new(n.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(n.unsigned_abs()))
        };
        Self(shifted.expect("date arithmetic stays within chrono's supported range"))
    }

    /// Returns the following day.
    pub fn next(self) -> Self {
        self.add_days(1)
    }

    /// Number of nights from `self` to `other`, `other` exclusive.
    ///
    /// Negative when `other` is before `self`.
    pub fn days_until(self, other: StayDate) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the underlying chrono date.
    pub fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for StayDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for StayDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(s)
    }
}

impl fmt::Display for StayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}
