//! Check-in / check-out selection state machine.

use serde::Serialize;
use stayquote_calendar::StayDate;
use tracing::debug;

use crate::availability::Resolver;

/// The user's in-progress date pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum Selection {
    /// Nothing picked yet.
    #[default]
    Empty,
    /// Check-in picked, waiting for check-out.
    StartOnly {
        /// Check-in day.
        start: StayDate,
    },
    /// Both ends picked; always `start < end` and bookable when reached
    /// through [`Selection::advance`].
    Complete {
        /// Check-in day.
        start: StayDate,
        /// Check-out day (not a night of the stay).
        end: StayDate,
    },
}

impl Selection {
    /// Applies a click on `date`.
    ///
    /// - From `Empty` or `Complete`: `date` becomes a new check-in.
    /// - From `StartOnly`: a `date` on or before check-in, or one that would
    ///   make the range unbookable, silently becomes a new check-in instead;
    ///   otherwise the selection completes with `date` as check-out.
    ///
    /// Clicks on disabled days are expected to be filtered before they get
    /// here, but the range is re-validated regardless.
    pub fn advance(self, date: StayDate, resolver: &Resolver<'_>) -> Selection {
        let next = match self {
            Selection::Empty | Selection::Complete { .. } => Selection::StartOnly { start: date },
            Selection::StartOnly { start } if date <= start => {
                debug!(%start, %date, "pick on or before check-in, restarting");
                Selection::StartOnly { start: date }
            }
            Selection::StartOnly { start } => {
                if resolver.is_range_bookable(start, date) {
                    Selection::Complete { start, end: date }
                } else {
                    debug!(%start, %date, "range not bookable, restarting from pick");
                    Selection::StartOnly { start: date }
                }
            }
        };
        debug!(from = ?self, to = ?next, "selection advanced");
        next
    }

    /// Check-in day, if picked.
    pub fn start(&self) -> Option<StayDate> {
        match *self {
            Selection::Empty => None,
            Selection::StartOnly { start } | Selection::Complete { start, .. } => Some(start),
        }
    }

    /// Check-out day, if picked.
    pub fn end(&self) -> Option<StayDate> {
        match *self {
            Selection::Complete { end, .. } => Some(end),
            _ => None,
        }
    }

    /// `(check-in, check-out)` of a complete selection.
    pub fn range(&self) -> Option<(StayDate, StayDate)> {
        match *self {
            Selection::Complete { start, end } => Some((start, end)),
            _ => None,
        }
    }

    /// Whether both ends are picked.
    pub fn is_complete(&self) -> bool {
        matches!(self, Selection::Complete { .. })
    }

    /// Whether `date` is the check-in or check-out day.
    pub fn is_endpoint(&self, date: StayDate) -> bool {
        self.start() == Some(date) || self.end() == Some(date)
    }

    /// Whether `date` lies strictly between check-in and check-out.
    pub fn is_inside(&self, date: StayDate) -> bool {
        match *self {
            Selection::Complete { start, end } => start < date && date < end,
            _ => false,
        }
    }
}
