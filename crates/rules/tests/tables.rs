use stayquote_calendar::{Interval, StayDate, nights};
use stayquote_rules::{Blackout, PricingRule, RuleTable, RulesError, TableMode};

fn d(s: &str) -> StayDate {
    StayDate::parse_iso(s).unwrap()
}

fn iv(a: &str, b: &str) -> Interval {
    Interval::new(d(a), d(b)).unwrap()
}

/// A holiday rental with summer blackouts and four seasons.
fn holiday_rental() -> RuleTable {
    RuleTable::simple(
        vec![
            Blackout::new(iv("2024-07-12", "2024-07-20")),
            Blackout::new(iv("2024-08-03", "2024-08-12")),
            Blackout::new(iv("2024-09-06", "2024-09-14")),
        ],
        vec![
            PricingRule::nightly(iv("2024-06-15", "2024-08-31"), 680.0),
            PricingRule::nightly(iv("2024-09-01", "2024-10-15"), 520.0),
            PricingRule::nightly(iv("2024-10-16", "2025-03-31"), 420.0),
            PricingRule::nightly(iv("2025-04-01", "2025-06-14"), 520.0),
        ],
        520.0,
    )
    .unwrap()
}

fn monthly_packages() -> RuleTable {
    RuleTable::package(
        vec![],
        vec![
            PricingRule::package(iv("2026-03-01", "2026-03-31"), 4, 3830.0),
            PricingRule::package(iv("2026-04-01", "2026-04-30"), 3, 2400.0),
            PricingRule::package(iv("2026-07-01", "2026-08-31"), 7, 6300.0),
        ],
    )
    .unwrap()
}

#[test]
fn seasonal_rates_cover_a_year_without_gaps() {
    let table = holiday_rental();
    for night in nights(d("2024-06-15"), d("2025-06-15")) {
        assert!(
            table.find_rule(night).is_some(),
            "{night} has no season"
        );
    }
    assert!(table.find_rule(d("2025-06-15")).is_none());
    assert_eq!(table.nightly_rate(d("2025-06-15")), Some(520.0));
}

#[test]
fn seasonal_rate_changes_at_boundary() {
    let table = holiday_rental();
    assert_eq!(table.nightly_rate(d("2024-10-15")), Some(520.0));
    assert_eq!(table.nightly_rate(d("2024-10-16")), Some(420.0));
    assert_eq!(table.nightly_rate(d("2025-03-31")), Some(420.0));
    assert_eq!(table.nightly_rate(d("2025-04-01")), Some(520.0));
}

#[test]
fn blackout_does_not_remove_price() {
    let table = holiday_rental();
    assert!(table.is_blackout(d("2024-08-05")));
    assert_eq!(table.nightly_rate(d("2024-08-05")), Some(680.0));
}

#[test]
fn package_table_is_closed_world() {
    let table = monthly_packages();
    assert_eq!(table.mode(), TableMode::Package);
    assert!(table.find_rule(d("2026-05-15")).is_none());
    assert!(table.nightly_rate(d("2026-06-30")).is_none());
    assert_eq!(table.nightly_rate(d("2026-08-31")), Some(900.0));
}

#[test]
fn every_date_matches_at_most_one_rule() {
    let table = monthly_packages();
    for night in nights(d("2026-01-01"), d("2027-01-01")) {
        let matches = table
            .pricing_rules()
            .iter()
            .filter(|r| r.contains(night))
            .count();
        assert!(matches <= 1);
        assert_eq!(table.find_rule_index(night).is_some(), matches == 1);
    }
}

#[test]
fn overlap_detected_regardless_of_order() {
    let wide = PricingRule::package(iv("2026-03-01", "2026-06-30"), 4, 3830.0);
    let inner_a = PricingRule::package(iv("2026-04-01", "2026-04-05"), 2, 900.0);
    let inner_b = PricingRule::package(iv("2026-05-01", "2026-05-05"), 2, 900.0);

    for rules in [
        vec![wide, inner_a, inner_b],
        vec![inner_b, inner_a, wide],
        vec![inner_a, wide, inner_b],
    ] {
        let err = RuleTable::package(vec![], rules).unwrap_err();
        assert!(matches!(err, RulesError::OverlappingRules { .. }));
    }
}
