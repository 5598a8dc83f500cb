//! Rule tables: simple seasonal pricing or closed-world packages.

use std::fmt;

use serde::Serialize;
use stayquote_calendar::StayDate;
use tracing::debug;

use crate::error::RulesError;
use crate::rule::{Blackout, Pricing, PricingRule};

/// Shape of a [`RuleTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableMode {
    /// Seasonal nightly rates over an always-priced calendar.
    Simple,
    /// Only days covered by a package rule are bookable.
    Package,
}

impl fmt::Display for TableMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableMode::Simple => f.write_str("simple"),
            TableMode::Package => f.write_str("package"),
        }
    }
}

/// Blackouts plus seasonal nightly rates, with a fallback rate for days no
/// season covers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleRules {
    blackouts: Vec<Blackout>,
    seasonal: Vec<PricingRule>,
    default_rate: f64,
}

impl SimpleRules {
    /// Seasonal rate rules, in configuration order.
    pub fn seasonal(&self) -> &[PricingRule] {
        &self.seasonal
    }

    /// Rate for nights outside every season.
    pub fn default_rate(&self) -> f64 {
        self.default_rate
    }
}

/// Blackouts plus package rules; uncovered days are closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageRules {
    blackouts: Vec<Blackout>,
    rules: Vec<PricingRule>,
}

impl PackageRules {
    /// Package rules, in configuration order.
    pub fn rules(&self) -> &[PricingRule] {
        &self.rules
    }
}

/// The deployment's blackout and pricing table.
///
/// Constructed once from configuration and read-only afterwards. The
/// constructors reject overlapping pricing rules, so a date matches at most
/// one rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum RuleTable {
    /// See [`SimpleRules`].
    Simple(SimpleRules),
    /// See [`PackageRules`].
    Package(PackageRules),
}

impl RuleTable {
    /// Builds a simple table.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if seasons overlap, a season is not
    /// [`Pricing::Nightly`], or a rate is negative or non-finite.
    pub fn simple(
        blackouts: Vec<Blackout>,
        seasonal: Vec<PricingRule>,
        default_rate: f64,
    ) -> Result<Self, RulesError> {
        check_price("default_rate", default_rate)?;
        let table = RuleTable::Simple(SimpleRules {
            blackouts,
            seasonal,
            default_rate,
        });
        table.validate()?;
        Ok(table)
    }

    /// Builds a package table.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if packages overlap, a rule is not
    /// [`Pricing::Package`], a total is negative or non-finite, or a minimum
    /// stay is zero.
    pub fn package(blackouts: Vec<Blackout>, rules: Vec<PricingRule>) -> Result<Self, RulesError> {
        let table = RuleTable::Package(PackageRules { blackouts, rules });
        table.validate()?;
        Ok(table)
    }

    /// Returns the table shape.
    pub fn mode(&self) -> TableMode {
        match self {
            RuleTable::Simple(_) => TableMode::Simple,
            RuleTable::Package(_) => TableMode::Package,
        }
    }

    /// Returns the blackout intervals.
    pub fn blackouts(&self) -> &[Blackout] {
        match self {
            RuleTable::Simple(t) => &t.blackouts,
            RuleTable::Package(t) => &t.blackouts,
        }
    }

    /// Returns the pricing rules: seasons or packages depending on the mode.
    pub fn pricing_rules(&self) -> &[PricingRule] {
        match self {
            RuleTable::Simple(t) => &t.seasonal,
            RuleTable::Package(t) => &t.rules,
        }
    }

    /// Whether `date` lies in any blackout interval.
    pub fn is_blackout(&self, date: StayDate) -> bool {
        self.blackouts().iter().any(|b| b.contains(date))
    }

    /// Position of the rule covering `date`, usable as rule identity.
    pub fn find_rule_index(&self, date: StayDate) -> Option<usize> {
        self.pricing_rules().iter().position(|r| r.contains(date))
    }

    /// The rule covering `date`, if any.
    pub fn find_rule(&self, date: StayDate) -> Option<&PricingRule> {
        self.find_rule_index(date).map(|i| &self.pricing_rules()[i])
    }

    /// Price of the night starting on `date`.
    ///
    /// Simple tables always answer, falling back to the default rate.
    /// Package tables answer `None` for uncovered days.
    pub fn nightly_rate(&self, date: StayDate) -> Option<f64> {
        match self {
            RuleTable::Simple(t) => Some(
                self.find_rule(date)
                    .map_or(t.default_rate, PricingRule::nightly_rate),
            ),
            RuleTable::Package(_) => self.find_rule(date).map(PricingRule::nightly_rate),
        }
    }

    /// Checks the table invariants.
    ///
    /// Called by the constructors.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in rule order.
    pub fn validate(&self) -> Result<(), RulesError> {
        let mode = self.mode();
        let rules = self.pricing_rules();

        for (index, rule) in rules.iter().enumerate() {
            match (mode, rule.pricing()) {
                (TableMode::Simple, Pricing::Nightly { rate }) => {
                    check_price(&format!("rule #{index} rate"), rate)?;
                }
                (TableMode::Package, Pricing::Package { min_nights, total }) => {
                    if min_nights == 0 {
                        return Err(RulesError::InvalidMinNights { index });
                    }
                    check_price(&format!("rule #{index} total"), total)?;
                }
                _ => return Err(RulesError::PricingMismatch { index, mode }),
            }
        }

        // Sort by start so each rule only needs comparing with its successor.
        let mut order: Vec<usize> = (0..rules.len()).collect();
        order.sort_by_key(|&i| rules[i].interval().start());
        for pair in order.windows(2) {
            let (a, b) = (pair[0].min(pair[1]), pair[0].max(pair[1]));
            if rules[a].interval().overlaps(&rules[b].interval()) {
                return Err(RulesError::OverlappingRules {
                    first: a,
                    first_interval: rules[a].interval(),
                    second: b,
                    second_interval: rules[b].interval(),
                });
            }
        }

        debug!(
            %mode,
            n_rules = rules.len(),
            n_blackouts = self.blackouts().len(),
            "rule table validated"
        );
        Ok(())
    }
}

fn check_price(field: &str, value: f64) -> Result<(), RulesError> {
    if !value.is_finite() || value < 0.0 {
        return Err(RulesError::InvalidPrice {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stayquote_calendar::Interval;

    fn d(s: &str) -> StayDate {
        StayDate::parse_iso(s).unwrap()
    }

    fn iv(a: &str, b: &str) -> Interval {
        Interval::new(d(a), d(b)).unwrap()
    }

    fn simple() -> RuleTable {
        RuleTable::simple(
            vec![Blackout::new(iv("2024-07-12", "2024-07-20"))],
            vec![
                PricingRule::nightly(iv("2024-06-15", "2024-08-31"), 680.0),
                PricingRule::nightly(iv("2024-09-01", "2024-10-15"), 520.0),
            ],
            520.0,
        )
        .unwrap()
    }

    fn package() -> RuleTable {
        RuleTable::package(
            vec![Blackout::new(iv("2026-03-20", "2026-03-22"))],
            vec![
                PricingRule::package(iv("2026-03-01", "2026-03-31"), 4, 3830.0),
                PricingRule::package(iv("2026-04-01", "2026-04-30"), 3, 2400.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn mode_reported() {
        assert_eq!(simple().mode(), TableMode::Simple);
        assert_eq!(package().mode(), TableMode::Package);
        assert_eq!(TableMode::Package.to_string(), "package");
    }

    #[test]
    fn is_blackout_inclusive() {
        let t = simple();
        assert!(t.is_blackout(d("2024-07-12")));
        assert!(t.is_blackout(d("2024-07-20")));
        assert!(!t.is_blackout(d("2024-07-11")));
        assert!(!t.is_blackout(d("2024-07-21")));
    }

    #[test]
    fn find_rule_first_match() {
        let t = package();
        assert_eq!(t.find_rule_index(d("2026-03-31")), Some(0));
        assert_eq!(t.find_rule_index(d("2026-04-01")), Some(1));
        assert_eq!(t.find_rule_index(d("2026-05-01")), None);
        assert_eq!(t.find_rule(d("2026-04-10")).unwrap().min_nights(), Some(3));
    }

    #[test]
    fn simple_rate_falls_back_to_default() {
        let t = simple();
        assert_eq!(t.nightly_rate(d("2024-07-01")), Some(680.0));
        assert_eq!(t.nightly_rate(d("2024-09-01")), Some(520.0));
        assert_eq!(t.nightly_rate(d("2023-01-01")), Some(520.0));
    }

    #[test]
    fn package_rate_absent_outside_rules() {
        let t = package();
        assert_eq!(t.nightly_rate(d("2026-03-05")), Some(957.5));
        assert_eq!(t.nightly_rate(d("2026-04-05")), Some(800.0));
        assert_eq!(t.nightly_rate(d("2026-02-28")), None);
    }

    #[test]
    fn rejects_overlapping_rules() {
        let err = RuleTable::package(
            vec![],
            vec![
                PricingRule::package(iv("2026-04-01", "2026-04-30"), 3, 2400.0),
                PricingRule::package(iv("2026-05-01", "2026-05-31"), 3, 2400.0),
                PricingRule::package(iv("2026-03-01", "2026-04-01"), 4, 3830.0),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            RulesError::OverlappingRules {
                first: 0,
                first_interval: iv("2026-04-01", "2026-04-30"),
                second: 2,
                second_interval: iv("2026-03-01", "2026-04-01"),
            }
        );
    }

    #[test]
    fn rejects_mixed_pricing() {
        let err = RuleTable::package(
            vec![],
            vec![PricingRule::nightly(iv("2026-03-01", "2026-03-31"), 500.0)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            RulesError::PricingMismatch {
                index: 0,
                mode: TableMode::Package,
            }
        );

        let err = RuleTable::simple(
            vec![],
            vec![PricingRule::package(iv("2026-03-01", "2026-03-31"), 4, 3830.0)],
            520.0,
        )
        .unwrap_err();
        assert!(matches!(err, RulesError::PricingMismatch { index: 0, .. }));
    }

    #[test]
    fn rejects_zero_min_nights() {
        let err = RuleTable::package(
            vec![],
            vec![PricingRule::package(iv("2026-03-01", "2026-03-31"), 0, 3830.0)],
        )
        .unwrap_err();
        assert_eq!(err, RulesError::InvalidMinNights { index: 0 });
    }

    #[test]
    fn rejects_bad_prices() {
        assert!(matches!(
            RuleTable::simple(vec![], vec![], f64::NAN),
            Err(RulesError::InvalidPrice { .. })
        ));
        assert!(matches!(
            RuleTable::simple(
                vec![],
                vec![PricingRule::nightly(iv("2026-03-01", "2026-03-31"), -5.0)],
                520.0
            ),
            Err(RulesError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn blackouts_may_overlap() {
        let t = RuleTable::simple(
            vec![
                Blackout::new(iv("2026-03-01", "2026-03-10")),
                Blackout::new(iv("2026-03-05", "2026-03-15")),
            ],
            vec![],
            520.0,
        );
        assert!(t.is_ok());
    }
}
