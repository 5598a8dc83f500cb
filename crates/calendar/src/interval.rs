//! Inclusive date interval.

use std::fmt;

use serde::Serialize;

use crate::date::StayDate;
use crate::error::CalendarError;

/// A closed range of calendar days, `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    start: StayDate,
    end: StayDate,
}

impl Interval {
    /// Creates an interval covering `start` through `end`, both included.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvertedInterval`] if `start > end`.
    pub fn new(start: StayDate, end: StayDate) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvertedInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// A single-day interval.
    pub fn single(date: StayDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the first day.
    pub fn start(&self) -> StayDate {
        self.start
    }

    /// Returns the last day.
    pub fn end(&self) -> StayDate {
        self.end
    }

    /// Whether `date` falls inside the interval.
    pub fn contains(&self, date: StayDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether the two intervals share at least one day.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Number of days covered (always at least 1).
    pub fn len_days(&self) -> i64 {
        self.start.days_until(self.end) + 1
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
