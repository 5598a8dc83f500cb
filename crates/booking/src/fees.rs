//! Cleaning fee and service surcharge.

use serde::Serialize;

use crate::error::BookingError;

/// Fixed and proportional fees added on top of the nightly subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeeSchedule {
    cleaning_fee: f64,
    service_rate: f64,
}

impl FeeSchedule {
    /// Creates a fee schedule.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidFee`] for a negative or non-finite
    /// cleaning fee and [`BookingError::InvalidServiceRate`] for a rate
    /// outside `[0, 1]`.
    pub fn new(cleaning_fee: f64, service_rate: f64) -> Result<Self, BookingError> {
        if !cleaning_fee.is_finite() || cleaning_fee < 0.0 {
            return Err(BookingError::InvalidFee {
                field: "cleaning fee",
                value: cleaning_fee,
            });
        }
        if !(0.0..=1.0).contains(&service_rate) {
            return Err(BookingError::InvalidServiceRate {
                value: service_rate,
            });
        }
        Ok(Self {
            cleaning_fee,
            service_rate,
        })
    }

    /// Flat fee charged once per stay.
    pub fn cleaning_fee(&self) -> f64 {
        self.cleaning_fee
    }

    /// Fraction of the subtotal charged as service fee.
    pub fn service_rate(&self) -> f64 {
        self.service_rate
    }

    /// Service fee for `subtotal`, rounded to the nearest currency unit.
    ///
    /// Halves round up; subtotals are never negative, so `f64::round`
    /// (half away from zero) gives the same result.
    pub fn service_fee(&self, subtotal: f64) -> f64 {
        (subtotal * self.service_rate).round()
    }
}

impl Default for FeeSchedule {
    /// 180 cleaning fee and a 5 % service rate.
    fn default() -> Self {
        Self {
            cleaning_fee: 180.0,
            service_rate: 0.05,
        }
    }
}
