//! # stayquote-rules
//!
//! Blackout and pricing tables for stay quoting.
//!
//! A [`RuleTable`] comes in two shapes, chosen once per deployment:
//!
//! - **Simple**: blackouts, seasonal nightly rates and a default rate. Any
//!   day outside a blackout is bookable.
//! - **Package**: blackouts and package rules (minimum stay at a fixed
//!   total). Only days covered by a package are bookable.
//!
//! Pricing rules never overlap; the constructors reject tables that do.
//!
//! ```
//! use stayquote_calendar::{Interval, StayDate};
//! use stayquote_rules::{PricingRule, RuleTable};
//!
//! let march = Interval::new(
//!     StayDate::parse_iso("2026-03-01").unwrap(),
//!     StayDate::parse_iso("2026-03-31").unwrap(),
//! )
//! .unwrap();
//! let table = RuleTable::package(vec![], vec![PricingRule::package(march, 4, 3830.0)]).unwrap();
//!
//! let night = StayDate::parse_iso("2026-03-05").unwrap();
//! assert_eq!(table.nightly_rate(night), Some(957.5));
//! ```

mod error;
mod rule;
mod table;

pub use error::RulesError;
pub use rule::{Blackout, Pricing, PricingRule};
pub use table::{PackageRules, RuleTable, SimpleRules, TableMode};
