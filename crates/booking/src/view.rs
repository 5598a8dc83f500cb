//! Calendar grid model for the presentation layer.

use serde::Serialize;
use stayquote_calendar::{MonthCursor, StayDate};

use crate::availability::Resolver;
use crate::format::DisplayFormat;
use crate::selection::Selection;

/// One clickable day of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// The day.
    pub date: StayDate,
    /// Past or unavailable; the control must not accept clicks.
    pub disabled: bool,
    /// Check-in or check-out day.
    pub selected: bool,
    /// Strictly between check-in and check-out.
    pub in_range: bool,
}

/// One month of the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    /// The month shown.
    pub month: MonthCursor,
    /// Localized heading, e.g. `mars 2026`.
    pub label: String,
    /// Weekday column headers, Monday first.
    pub weekdays: [&'static str; 7],
    /// Empty cells before day 1.
    pub leading_blanks: u32,
    /// Every day of the month, in order.
    pub days: Vec<DayCell>,
}

/// Builds the grid for `month`.
pub fn month_view(
    month: MonthCursor,
    resolver: &Resolver<'_>,
    selection: &Selection,
    format: &DisplayFormat,
) -> MonthView {
    let days = month
        .days()
        .map(|date| DayCell {
            date,
            disabled: !resolver.is_date_available(date),
            selected: selection.is_endpoint(date),
            in_range: selection.is_inside(date),
        })
        .collect();

    MonthView {
        month,
        label: format.month_label(month),
        weekdays: format.locale().weekday_headers(),
        leading_blanks: month.leading_blanks(),
        days,
    }
}

impl MonthView {
    /// The cell for `date`, if it belongs to this month.
    pub fn cell(&self, date: StayDate) -> Option<&DayCell> {
        if !self.month.contains(date) {
            return None;
        }
        self.days.get((date.day() - 1) as usize)
    }
}
