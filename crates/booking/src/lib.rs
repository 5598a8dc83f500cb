//! # stayquote-booking
//!
//! Availability, date selection and pricing over a [`RuleTable`].
//!
//! ## Flow
//!
//! ```mermaid
//! graph LR
//!     A["day click"] -->|"BookingWidget::activate()"| B["Selection::advance()"]
//!     B -->|"Resolver::is_range_bookable()"| C["RuleTable"]
//!     B -->|"Complete"| D["quote()"]
//!     D --> C
//!     D -->|"Quote"| E["summarize()"]
//!     E --> F["SummaryFields"]
//! ```
//!
//! Everything here is synchronous and allocation-light; a quote is a pure
//! function of the table, the fees and the two dates, recomputed in full on
//! every selection change.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `availability` | Single-day and range bookability |
//! | `selection` | Check-in / check-out state machine |
//! | `quote` | Nights, subtotal, fees and total |
//! | `fees` | Cleaning fee and service rate |
//! | `format` | Locale, amount formatting and summary fields |
//! | `view` | Calendar grid cells |
//! | `widget` | Owning controller tying the above together |
//! | `error` | Error types |
//!
//! [`RuleTable`]: stayquote_rules::RuleTable

mod availability;
mod error;
mod fees;
mod format;
mod quote;
mod selection;
mod view;
mod widget;

pub use availability::{RangeRejection, Resolver};
pub use error::BookingError;
pub use fees::FeeSchedule;
pub use format::{DisplayFormat, Locale, PLACEHOLDER, SummaryFields, summarize};
pub use quote::{Ineligibility, Quote, QuoteBreakdown, quote};
pub use selection::Selection;
pub use view::{DayCell, MonthView, month_view};
pub use widget::BookingWidget;
