//! Night iteration and day counts.

use crate::date::StayDate;

/// Exact number of nights between `start` and `end`, `end` exclusive.
///
/// Counts calendar days, so a stay spanning a daylight-saving change is
/// never off by one. Negative when `end` is before `start`.
pub fn days_between(start: StayDate, end: StayDate) -> i64 {
    start.days_until(end)
}

/// Iterates over every night in `[start, end)`.
///
/// Yields nothing when `end <= start`.
///
/// # Example
///
/// ```
/// use stayquote_calendar::{StayDate, nights};
///
/// let start = StayDate::parse_iso("2026-12-30").unwrap();
/// let end = StayDate::parse_iso("2027-01-02").unwrap();
/// let isos: Vec<String> = nights(start, end).map(|d| d.to_iso()).collect();
/// assert_eq!(isos, ["2026-12-30", "2026-12-31", "2027-01-01"]);
/// ```
pub fn nights(start: StayDate, end: StayDate) -> Nights {
    Nights { next: start, end }
}

/// Iterator returned by [`nights`].
#[derive(Debug, Clone)]
pub struct Nights {
    next: StayDate,
    end: StayDate,
}

impl Iterator for Nights {
    type Item = StayDate;

    fn next(&mut self) -> Option<StayDate> {
        if self.next >= self.end {
            return None;
        }
        let current = self.next;
        self.next = current.next();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(days_between(self.next, self.end).max(0)).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Nights {}
