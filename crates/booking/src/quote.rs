//! Price breakdown for a complete stay.

use std::fmt;

use serde::Serialize;
use stayquote_calendar::{StayDate, days_between, nights};
use stayquote_rules::{Pricing, RuleTable};

use crate::fees::FeeSchedule;

/// Why a stay cannot be priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum Ineligibility {
    /// The stay is shorter than its package's minimum.
    BelowMinimumStay {
        /// Minimum number of nights for the check-in package.
        min_nights: u32,
    },
    /// No pricing applies to the stay.
    Unavailable,
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ineligibility::BelowMinimumStay { min_nights } => {
                write!(f, "minimum stay is {min_nights} nights")
            }
            Ineligibility::Unavailable => f.write_str("dates unavailable"),
        }
    }
}

/// Nights, subtotal and fees of a priced stay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuoteBreakdown {
    nights: u32,
    subtotal: f64,
    nightly_average: f64,
    service_fee: f64,
    cleaning_fee: f64,
    total: f64,
}

impl QuoteBreakdown {
    fn new(nights: u32, subtotal: f64, fees: &FeeSchedule) -> Self {
        let service_fee = fees.service_fee(subtotal);
        let cleaning_fee = fees.cleaning_fee();
        Self {
            nights,
            subtotal,
            nightly_average: subtotal / f64::from(nights),
            service_fee,
            cleaning_fee,
            total: subtotal + cleaning_fee + service_fee,
        }
    }

    /// Number of nights.
    pub fn nights(&self) -> u32 {
        self.nights
    }

    /// Sum of the nightly prices.
    pub fn subtotal(&self) -> f64 {
        self.subtotal
    }

    /// `subtotal / nights`, unrounded.
    pub fn nightly_average(&self) -> f64 {
        self.nightly_average
    }

    /// Service surcharge, rounded to the currency unit.
    pub fn service_fee(&self) -> f64 {
        self.service_fee
    }

    /// Flat cleaning fee.
    pub fn cleaning_fee(&self) -> f64 {
        self.cleaning_fee
    }

    /// `subtotal + cleaning_fee + service_fee`.
    pub fn total(&self) -> f64 {
        self.total
    }
}

/// Outcome of pricing a stay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "detail")]
pub enum Quote {
    /// The stay has a price.
    Priced(QuoteBreakdown),
    /// The stay cannot be priced.
    Ineligible(Ineligibility),
}

impl Quote {
    /// The breakdown, when priced.
    pub fn breakdown(&self) -> Option<&QuoteBreakdown> {
        match self {
            Quote::Priced(b) => Some(b),
            Quote::Ineligible(_) => None,
        }
    }

    /// The reason, when ineligible.
    pub fn ineligibility(&self) -> Option<Ineligibility> {
        match self {
            Quote::Priced(_) => None,
            Quote::Ineligible(reason) => Some(*reason),
        }
    }
}

/// Prices the stay from check-in `start` to check-out `end`.
///
/// Expects a complete selection (`start < end`); anything else is
/// [`Ineligibility::Unavailable`]. Pure: the same table, fees and dates
/// always give the same quote.
///
/// - Simple tables price each night at its own seasonal or default rate.
/// - Package tables price every night at the check-in package's
///   `total / min_nights`, so a stay of exactly `min_nights` costs exactly
///   `total`. Shorter stays are [`Ineligibility::BelowMinimumStay`].
///
/// The service fee is rounded to the currency unit before it is added; the
/// nightly average is not rounded.
#[tracing::instrument(level = "debug", skip(table, fees), fields(mode = %table.mode()))]
pub fn quote(table: &RuleTable, fees: &FeeSchedule, start: StayDate, end: StayDate) -> Quote {
    let n = days_between(start, end);
    let Ok(n_nights) = u32::try_from(n) else {
        return Quote::Ineligible(Ineligibility::Unavailable);
    };
    if n_nights == 0 {
        return Quote::Ineligible(Ineligibility::Unavailable);
    }

    let subtotal = match table {
        RuleTable::Simple(_) => {
            let mut subtotal = 0.0;
            for night in nights(start, end) {
                match table.nightly_rate(night) {
                    Some(rate) => subtotal += rate,
                    None => return Quote::Ineligible(Ineligibility::Unavailable),
                }
            }
            subtotal
        }
        RuleTable::Package(_) => {
            let Some(rule) = table.find_rule(start) else {
                return Quote::Ineligible(Ineligibility::Unavailable);
            };
            let Pricing::Package { min_nights, total } = rule.pricing() else {
                return Quote::Ineligible(Ineligibility::Unavailable);
            };
            if n_nights < min_nights {
                return Quote::Ineligible(Ineligibility::BelowMinimumStay { min_nights });
            }
            // Multiply before dividing: exact for whole-unit totals, and
            // `n_nights == min_nights` yields `total` itself.
            total * f64::from(n_nights) / f64::from(min_nights)
        }
    };

    Quote::Priced(QuoteBreakdown::new(n_nights, subtotal, fees))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stayquote_calendar::Interval;
    use stayquote_rules::{Blackout, PricingRule};

    fn d(s: &str) -> StayDate {
        StayDate::parse_iso(s).unwrap()
    }

    fn iv(a: &str, b: &str) -> Interval {
        Interval::new(d(a), d(b)).unwrap()
    }

    fn package() -> RuleTable {
        RuleTable::package(
            vec![],
            vec![PricingRule::package(iv("2026-03-01", "2026-03-31"), 4, 3830.0)],
        )
        .unwrap()
    }

    fn simple() -> RuleTable {
        RuleTable::simple(
            vec![Blackout::new(iv("2026-07-12", "2026-07-20"))],
            vec![
                PricingRule::nightly(iv("2026-06-15", "2026-08-31"), 680.0),
                PricingRule::nightly(iv("2026-09-01", "2026-10-15"), 520.0),
            ],
            420.0,
        )
        .unwrap()
    }

    #[test]
    fn package_five_nights() {
        let q = quote(&package(), &FeeSchedule::default(), d("2026-03-05"), d("2026-03-10"));
        let b = q.breakdown().unwrap();
        assert_eq!(b.nights(), 5);
        assert_eq!(b.subtotal(), 4787.5);
        assert_eq!(b.service_fee(), 239.0);
        assert_eq!(b.cleaning_fee(), 180.0);
        assert_eq!(b.total(), 5206.5);
        assert_eq!(b.nightly_average(), 957.5);
    }

    #[test]
    fn package_below_minimum() {
        let q = quote(&package(), &FeeSchedule::default(), d("2026-03-05"), d("2026-03-08"));
        assert_eq!(
            q,
            Quote::Ineligible(Ineligibility::BelowMinimumStay { min_nights: 4 })
        );
        assert!(q.breakdown().is_none());
    }

    #[test]
    fn package_exact_minimum_is_total() {
        let q = quote(&package(), &FeeSchedule::default(), d("2026-03-05"), d("2026-03-09"));
        assert_eq!(q.breakdown().unwrap().subtotal(), 3830.0);
    }

    #[test]
    fn package_uncovered_start() {
        let q = quote(&package(), &FeeSchedule::default(), d("2026-04-05"), d("2026-04-10"));
        assert_eq!(q, Quote::Ineligible(Ineligibility::Unavailable));
        assert_eq!(q.ineligibility(), Some(Ineligibility::Unavailable));
    }

    #[test]
    fn simple_sums_each_nights_rate() {
        // Two nights at 520 (Oct 14, 15), one at the 420 default (Oct 16).
        let q = quote(&simple(), &FeeSchedule::default(), d("2026-10-14"), d("2026-10-17"));
        let b = q.breakdown().unwrap();
        assert_eq!(b.nights(), 3);
        assert_eq!(b.subtotal(), 1460.0);
        assert_eq!(b.service_fee(), 73.0);
        assert_eq!(b.total(), 1460.0 + 180.0 + 73.0);
        assert!((b.nightly_average() - 1460.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_range_is_unavailable() {
        let q = quote(&simple(), &FeeSchedule::default(), d("2026-10-14"), d("2026-10-14"));
        assert_eq!(q, Quote::Ineligible(Ineligibility::Unavailable));
        let q = quote(&simple(), &FeeSchedule::default(), d("2026-10-14"), d("2026-10-10"));
        assert_eq!(q, Quote::Ineligible(Ineligibility::Unavailable));
    }

    #[test]
    fn ineligibility_messages() {
        assert_eq!(
            Ineligibility::BelowMinimumStay { min_nights: 4 }.to_string(),
            "minimum stay is 4 nights"
        );
        assert_eq!(Ineligibility::Unavailable.to_string(), "dates unavailable");
    }
}
