//! Error types for the stayquote-booking crate.

/// Error type for building a booking widget from deployment settings.
///
/// Quote and selection outcomes are never errors; see
/// [`Ineligibility`](crate::Ineligibility) and
/// [`RangeRejection`](crate::RangeRejection).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    /// A fixed fee is negative, NaN or infinite.
    #[error("invalid {field}: {value} (must be finite and >= 0)")]
    InvalidFee {
        /// Name of the rejected fee.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The service rate is not a fraction in `[0, 1]`.
    #[error("invalid service rate: {value} (must be within 0..=1)")]
    InvalidServiceRate {
        /// The rejected value.
        value: f64,
    },

    /// Display settings ask for more decimals than a currency can show.
    #[error("invalid fraction digits: {digits} (must be <= {max})")]
    InvalidFractionDigits {
        /// The rejected digit count.
        digits: u8,
        /// Largest accepted count.
        max: u8,
    },
}
