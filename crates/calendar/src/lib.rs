//! # stayquote-calendar
//!
//! Pure date arithmetic for stay quoting.
//!
//! Every operation works on calendar fields (year, month, day) through
//! [`chrono::NaiveDate`], never on wall-clock time deltas, so night counts
//! stay exact across daylight-saving transitions.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["ISO string"] -->|"StayDate::parse_iso()"| B["StayDate"]
//!     B -->|".to_iso()"| A
//!     B -->|".add_days(n)"| B
//!     B -->|"nights(start, end)"| C["[start, end) iterator"]
//!     B -->|"Interval::new()"| D["Interval"]
//!     B -->|"MonthCursor::containing()"| E["MonthCursor"]
//!     E -->|".shift(delta)"| E
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use stayquote_calendar::{Interval, StayDate, days_between, nights};
//!
//! let check_in = StayDate::parse_iso("2026-03-05").unwrap();
//! let check_out = check_in.add_days(5);
//! assert_eq!(check_out.to_iso(), "2026-03-10");
//! assert_eq!(days_between(check_in, check_out), 5);
//! assert_eq!(nights(check_in, check_out).count(), 5);
//!
//! let march = Interval::new(
//!     StayDate::from_ymd(2026, 3, 1).unwrap(),
//!     StayDate::from_ymd(2026, 3, 31).unwrap(),
//! )
//! .unwrap();
//! assert!(march.contains(check_in));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Time-of-day free calendar date |
//! | `interval` | Inclusive date interval |
//! | `month` | Displayed-month cursor and grid geometry |
//! | `sequence` | Night iteration and day counts |
//! | `error` | Error types |

mod date;
mod error;
mod interval;
mod month;
mod sequence;

pub use date::StayDate;
pub use error::CalendarError;
pub use interval::Interval;
pub use month::MonthCursor;
pub use sequence::{Nights, days_between, nights};
