//! Blackout intervals and priced intervals.

use serde::Serialize;
use stayquote_calendar::{Interval, StayDate};

/// How a priced interval charges for a night.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Pricing {
    /// A flat rate per night.
    Nightly {
        /// Price of one night.
        rate: f64,
    },
    /// A fixed total for a minimum stay; longer stays scale linearly.
    Package {
        /// Shortest bookable stay, in nights.
        min_nights: u32,
        /// Price of a stay of exactly `min_nights` nights.
        total: f64,
    },
}

impl Pricing {
    /// Effective price of one night.
    ///
    /// For a package this is `total / min_nights`.
    pub fn nightly_rate(&self) -> f64 {
        match *self {
            Pricing::Nightly { rate } => rate,
            Pricing::Package { min_nights, total } => total / f64::from(min_nights),
        }
    }
}

/// An interval of days sharing one [`Pricing`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingRule {
    interval: Interval,
    pricing: Pricing,
}

impl PricingRule {
    /// Creates a rule pricing every day of `interval` with `pricing`.
    pub fn new(interval: Interval, pricing: Pricing) -> Self {
        Self { interval, pricing }
    }

    /// Shorthand for a [`Pricing::Nightly`] rule.
    pub fn nightly(interval: Interval, rate: f64) -> Self {
        Self::new(interval, Pricing::Nightly { rate })
    }

    /// Shorthand for a [`Pricing::Package`] rule.
    pub fn package(interval: Interval, min_nights: u32, total: f64) -> Self {
        Self::new(interval, Pricing::Package { min_nights, total })
    }

    /// Returns the covered days.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Returns the pricing.
    pub fn pricing(&self) -> Pricing {
        self.pricing
    }

    /// Whether the rule covers `date`.
    pub fn contains(&self, date: StayDate) -> bool {
        self.interval.contains(date)
    }

    /// Effective price of one night under this rule.
    pub fn nightly_rate(&self) -> f64 {
        self.pricing.nightly_rate()
    }

    /// Minimum stay, for package rules.
    pub fn min_nights(&self) -> Option<u32> {
        match self.pricing {
            Pricing::Package { min_nights, .. } => Some(min_nights),
            Pricing::Nightly { .. } => None,
        }
    }

    /// Fixed total, for package rules.
    pub fn package_total(&self) -> Option<f64> {
        match self.pricing {
            Pricing::Package { total, .. } => Some(total),
            Pricing::Nightly { .. } => None,
        }
    }
}

/// An interval in which every day is unbookable, whatever its price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Blackout(Interval);

impl Blackout {
    /// Blocks every day of `interval`.
    pub fn new(interval: Interval) -> Self {
        Self(interval)
    }

    /// Returns the blocked days.
    pub fn interval(&self) -> Interval {
        self.0
    }

    /// Whether `date` is blocked.
    pub fn contains(&self, date: StayDate) -> bool {
        self.0.contains(date)
    }
}

impl From<Interval> for Blackout {
    fn from(interval: Interval) -> Self {
        Self(interval)
    }
}
