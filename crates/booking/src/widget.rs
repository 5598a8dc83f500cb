//! Single-session booking widget state.

use stayquote_calendar::{MonthCursor, StayDate};
use stayquote_rules::RuleTable;
use tracing::debug;

use crate::availability::Resolver;
use crate::fees::FeeSchedule;
use crate::format::{DisplayFormat, SummaryFields, summarize};
use crate::quote::{Quote, quote};
use crate::selection::Selection;
use crate::view::{MonthView, month_view};

/// Everything one date picker owns: static deployment settings plus the
/// current selection and displayed month.
///
/// All mutation goes through `&mut self`, one interaction at a time.
/// Independent widgets share nothing.
///
/// # Example
///
/// ```
/// use stayquote_booking::{BookingWidget, DisplayFormat, FeeSchedule};
/// use stayquote_calendar::StayDate;
/// use stayquote_rules::RuleTable;
///
/// let table = RuleTable::simple(vec![], vec![], 520.0).unwrap();
/// let today = StayDate::parse_iso("2026-10-19").unwrap();
/// let mut widget = BookingWidget::new(table, FeeSchedule::default(), DisplayFormat::default(), today);
///
/// assert!(widget.activate(StayDate::parse_iso("2026-11-02").unwrap()));
/// assert!(widget.activate(StayDate::parse_iso("2026-11-04").unwrap()));
/// assert_eq!(widget.summary().total, "1272 €");
/// ```
#[derive(Debug, Clone)]
pub struct BookingWidget {
    table: RuleTable,
    fees: FeeSchedule,
    format: DisplayFormat,
    today: StayDate,
    selection: Selection,
    month: MonthCursor,
}

impl BookingWidget {
    /// Creates a widget with an empty selection showing the month of `today`.
    pub fn new(table: RuleTable, fees: FeeSchedule, format: DisplayFormat, today: StayDate) -> Self {
        Self {
            table,
            fees,
            format,
            today,
            selection: Selection::Empty,
            month: MonthCursor::containing(today),
        }
    }

    /// Availability answers for this widget's table and day.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.table, self.today)
    }

    /// Handles a click on the day control for `date`.
    ///
    /// Days the grid shows as disabled (past or unavailable) are ignored
    /// and `false` is returned; otherwise the selection advances.
    pub fn activate(&mut self, date: StayDate) -> bool {
        let resolver = Resolver::new(&self.table, self.today);
        if !resolver.is_date_available(date) {
            debug!(%date, "click on disabled day ignored");
            return false;
        }
        self.selection = self.selection.advance(date, &resolver);
        true
    }

    /// Moves the displayed month by `delta` (negative for earlier months).
    pub fn change_month(&mut self, delta: i32) {
        self.month = self.month.shift(delta);
    }

    /// Jumps to `month`.
    pub fn show_month(&mut self, month: MonthCursor) {
        self.month = month;
    }

    /// Clears the selection.
    pub fn reset(&mut self) {
        self.selection = Selection::Empty;
    }

    /// Returns the current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Returns the first displayed month.
    pub fn month(&self) -> MonthCursor {
        self.month
    }

    /// Returns the rule table.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Returns the fee schedule.
    pub fn fees(&self) -> &FeeSchedule {
        &self.fees
    }

    /// Returns the display settings.
    pub fn format(&self) -> &DisplayFormat {
        &self.format
    }

    /// Returns the day before which everything is past.
    pub fn today(&self) -> StayDate {
        self.today
    }

    /// Quote for the current selection, once complete.
    pub fn quote(&self) -> Option<Quote> {
        self.selection
            .range()
            .map(|(start, end)| quote(&self.table, &self.fees, start, end))
    }

    /// Output field values for the current selection.
    pub fn summary(&self) -> SummaryFields {
        summarize(&self.selection, self.quote().as_ref(), &self.format)
    }

    /// The displayed month and the one after it.
    pub fn month_views(&self) -> [MonthView; 2] {
        let resolver = self.resolver();
        [self.month, self.month.next()]
            .map(|m| month_view(m, &resolver, &self.selection, &self.format))
    }

    /// Heading spanning both displayed months, e.g. `mars 2026 — avril 2026`.
    pub fn header_label(&self) -> String {
        format!(
            "{} — {}",
            self.format.month_label(self.month),
            self.format.month_label(self.month.next())
        )
    }
}
