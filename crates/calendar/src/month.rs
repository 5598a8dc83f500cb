//! Displayed-month cursor and calendar grid geometry.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::date::StayDate;
use crate::error::CalendarError;
use crate::sequence::{Nights, nights};

/// Points at one calendar month, as shown by a month-at-a-time picker.
///
/// The cursor's month and the first day of the month after it always lie
/// inside chrono's date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

/// Months since year 0, January = 0.
fn month_index(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month) - 1
}

/// Smallest and largest valid cursor indices.
fn index_bounds() -> (i64, i64) {
    let (min, max) = (NaiveDate::MIN, NaiveDate::MAX);
    (
        month_index(min.year(), min.month()),
        month_index(max.year(), max.month()) - 1,
    )
}

impl MonthCursor {
    fn from_index(index: i64) -> Self {
        let (lo, hi) = index_bounds();
        let index = index.clamp(lo, hi);
        Self {
            // In range after the clamp: chrono years fit in 18 bits.
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    fn index(self) -> i64 {
        month_index(self.year, self.month)
    }

    /// Creates a cursor for `year`-`month`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12
    /// and [`CalendarError::MonthOutOfRange`] if the month or the one after
    /// it falls outside chrono's date range.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let (lo, hi) = index_bounds();
        if !(lo..=hi).contains(&month_index(year, month)) {
            return Err(CalendarError::MonthOutOfRange { year, month });
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`, clamped to the supported range.
    pub fn containing(date: StayDate) -> Self {
        Self::from_index(month_index(date.year(), date.month()))
    }

    /// Parses a `YYYY-MM` label.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonthLabel`] for malformed input and
    /// the errors of [`MonthCursor::new`] otherwise.
    pub fn parse(input: &str) -> Result<Self, CalendarError> {
        let label_err = || CalendarError::InvalidMonthLabel {
            input: input.to_string(),
        };
        let (year, month) = input.trim().split_once('-').ok_or_else(label_err)?;
        let year: i32 = year.parse().map_err(|_| label_err())?;
        let month: u32 = month.parse().map_err(|_| label_err())?;
        Self::new(year, month)
    }

    /// Moves `delta` months forward (or backward when negative).
    ///
    /// Saturates at the first and last supported months, so `next()` of the
    /// last cursor is itself.
    pub fn shift(self, delta: i32) -> Self {
        Self::from_index(self.index() + i64::from(delta))
    }

    /// The following month.
    pub fn next(self) -> Self {
        self.shift(1)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.month
    }

    /// First day of the month.
    pub fn first_day(self) -> StayDate {
        // Day 1 exists in every month of a cursor within bounds.
        StayDate::from_ymd(self.year, self.month, 1).expect("cursor within chrono's date range")
    }

    fn following_first_day(self) -> StayDate {
        let next = self.index() + 1;
        StayDate::from_ymd(next.div_euclid(12) as i32, next.rem_euclid(12) as u32 + 1, 1)
            .expect("month after a cursor within chrono's date range")
    }

    /// Number of days in the month, leap years included.
    pub fn days_in_month(self) -> u32 {
        self.first_day().days_until(self.following_first_day()) as u32
    }

    /// Empty cells before day 1 in a Monday-first week grid.
    pub fn leading_blanks(self) -> u32 {
        self.first_day().weekday().num_days_from_monday()
    }

    /// Iterates over every day of the month.
    pub fn days(self) -> Nights {
        nights(self.first_day(), self.following_first_day())
    }

    /// Whether `date` falls inside this month.
    pub fn contains(self, date: StayDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthCursor {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
