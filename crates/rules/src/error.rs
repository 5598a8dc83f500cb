//! Error types for the stayquote-rules crate.

use stayquote_calendar::Interval;

use crate::table::TableMode;

/// Error type for rule table construction.
///
/// Every variant describes a deployment defect in the configured table; a
/// table that constructs successfully upholds the non-overlap and shape
/// invariants the resolver relies on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RulesError {
    /// Two pricing rules cover at least one common day.
    #[error("pricing rules #{first} ({first_interval}) and #{second} ({second_interval}) overlap")]
    OverlappingRules {
        /// Index of the earlier-listed rule.
        first: usize,
        /// Interval of the earlier-listed rule.
        first_interval: Interval,
        /// Index of the later-listed rule.
        second: usize,
        /// Interval of the later-listed rule.
        second_interval: Interval,
    },

    /// A rule's pricing variant does not match the table shape.
    #[error("pricing rule #{index} does not fit a {mode} table")]
    PricingMismatch {
        /// Index of the offending rule.
        index: usize,
        /// Shape of the table being built.
        mode: TableMode,
    },

    /// A price is negative, NaN or infinite.
    #[error("invalid price for {field}: {value} (must be finite and >= 0)")]
    InvalidPrice {
        /// Which price was rejected, e.g. `default_rate` or `rule #2 total`.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// A package rule asks for a zero-night minimum stay.
    #[error("package rule #{index} has min_nights = 0 (must be >= 1)")]
    InvalidMinNights {
        /// Index of the offending rule.
        index: usize,
    },
}
