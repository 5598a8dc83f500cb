//! Error types for the stayquote-calendar crate.

use crate::date::StayDate;

/// Error type for all fallible operations in the stayquote-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a string is not a valid `YYYY-MM-DD` date.
    #[error("invalid ISO date: {input:?} (expected YYYY-MM-DD)")]
    InvalidIsoDate {
        /// The rejected input.
        input: String,
    },

    /// Returned when year, month and day do not name a real calendar day.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },

    /// Returned when an interval would end before it starts.
    #[error("inverted interval: start {start} is after end {end}")]
    InvertedInterval {
        /// Requested start date.
        start: StayDate,
        /// Requested end date.
        end: StayDate,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number.
        month: u32,
    },

    /// Returned when a month lies outside the supported calendar range.
    #[error("month out of supported range: {year}-{month:02}")]
    MonthOutOfRange {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
    },

    /// Returned when a string is not a valid `YYYY-MM` month.
    #[error("invalid month label: {input:?} (expected YYYY-MM)")]
    InvalidMonthLabel {
        /// The rejected input.
        input: String,
    },
}
