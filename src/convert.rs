//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use stayquote_booking::{BookingWidget, DisplayFormat, FeeSchedule, Locale};
use stayquote_calendar::{Interval, StayDate};
use stayquote_rules::{Blackout, PricingRule, RuleTable, TableMode};

/// Nightly rate of a simple table that sets no `default_rate`.
const DEFAULT_NIGHTLY_RATE: f64 = 520.0;

/// Parses a locale tag into the corresponding enum variant.
pub fn parse_locale(s: &str) -> Result<Locale> {
    match s.to_lowercase().replace('_', "-").as_str() {
        "fr" | "fr-fr" => Ok(Locale::FrFr),
        "en" | "en-gb" => Ok(Locale::EnGb),
        other => bail!("unknown locale: {other:?}"),
    }
}

/// Parses a rule table mode name into the corresponding enum variant.
pub fn parse_mode(s: &str) -> Result<TableMode> {
    match s.to_lowercase().as_str() {
        "simple" => Ok(TableMode::Simple),
        "package" => Ok(TableMode::Package),
        other => bail!("unknown rules mode: {other:?}"),
    }
}

/// Parses both ends of an inclusive date range.
pub fn parse_interval(start: &str, end: &str) -> Result<Interval> {
    let start = StayDate::parse_iso(start)?;
    let end = StayDate::parse_iso(end)?;
    Ok(Interval::new(start, end)?)
}

/// Builds a validated [`RuleTable`] from the TOML rules section.
///
/// Lists that do not belong to the selected mode must be empty.
pub fn build_rule_table(rules: &RulesToml) -> Result<RuleTable> {
    let mode = parse_mode(&rules.mode)?;

    let blackouts = rules
        .blackout
        .iter()
        .enumerate()
        .map(|(i, b)| {
            parse_interval(&b.start, &b.end)
                .map(Blackout::new)
                .with_context(|| format!("rules.blackout #{i}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let table = match mode {
        TableMode::Simple => {
            if !rules.package.is_empty() {
                bail!("rules.package is only allowed with mode = \"package\"");
            }
            let seasonal = rules
                .seasonal
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    parse_interval(&s.start, &s.end)
                        .map(|iv| PricingRule::nightly(iv, s.rate))
                        .with_context(|| format!("rules.seasonal #{i}"))
                })
                .collect::<Result<Vec<_>>>()?;
            let default_rate = rules.default_rate.unwrap_or(DEFAULT_NIGHTLY_RATE);
            RuleTable::simple(blackouts, seasonal, default_rate)?
        }
        TableMode::Package => {
            if !rules.seasonal.is_empty() {
                bail!("rules.seasonal is only allowed with mode = \"simple\"");
            }
            if rules.default_rate.is_some() {
                bail!("rules.default_rate is only allowed with mode = \"simple\"");
            }
            let packages = rules
                .package
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    parse_interval(&p.start, &p.end)
                        .map(|iv| PricingRule::package(iv, p.min_nights, p.total))
                        .with_context(|| format!("rules.package #{i}"))
                })
                .collect::<Result<Vec<_>>>()?;
            RuleTable::package(blackouts, packages)?
        }
    };
    Ok(table)
}

/// Builds a [`FeeSchedule`] from the TOML fees section.
pub fn build_fees(fees: &FeesToml) -> Result<FeeSchedule> {
    Ok(FeeSchedule::new(fees.cleaning_fee, fees.service_rate)?)
}

/// Builds a [`DisplayFormat`] from the TOML display section.
pub fn build_display(display: &DisplayToml) -> Result<DisplayFormat> {
    let locale = parse_locale(&display.locale)?;
    Ok(DisplayFormat::new(
        locale,
        display.currency.as_str(),
        display.fraction_digits,
    )?)
}

/// Builds a fresh [`BookingWidget`] for `today` from the whole configuration.
pub fn build_widget(config: &StayquoteConfig, today: StayDate) -> Result<BookingWidget> {
    let table = build_rule_table(&config.rules).context("invalid [rules] section")?;
    let fees = build_fees(&config.fees).context("invalid [fees] section")?;
    let format = build_display(&config.display).context("invalid [display] section")?;
    Ok(BookingWidget::new(table, fees, format, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> StayDate {
        StayDate::parse_iso(s).unwrap()
    }

    fn rules(toml_str: &str) -> RulesToml {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn locale_names() {
        assert_eq!(parse_locale("fr-FR").unwrap(), Locale::FrFr);
        assert_eq!(parse_locale("en_gb").unwrap(), Locale::EnGb);
        assert_eq!(parse_locale("EN").unwrap(), Locale::EnGb);
        assert!(parse_locale("de-DE").is_err());
    }

    #[test]
    fn mode_names() {
        assert_eq!(parse_mode("Package").unwrap(), TableMode::Package);
        assert_eq!(parse_mode("simple").unwrap(), TableMode::Simple);
        assert!(parse_mode("tiered").is_err());
    }

    #[test]
    fn simple_table_defaults_rate() {
        let table = build_rule_table(&rules("mode = \"simple\"")).unwrap();
        assert_eq!(table.nightly_rate(d("2030-01-01")), Some(520.0));
    }

    #[test]
    fn package_table_from_toml() {
        let table = build_rule_table(&rules(
            r#"
mode = "package"
[[blackout]]
start = "2026-03-20"
end = "2026-03-22"
[[package]]
start = "2026-03-01"
end = "2026-03-31"
min_nights = 4
total = 3830.0
"#,
        ))
        .unwrap();
        assert_eq!(table.mode(), TableMode::Package);
        assert!(table.is_blackout(d("2026-03-21")));
        assert_eq!(table.nightly_rate(d("2026-03-05")), Some(957.5));
    }

    #[test]
    fn rejects_lists_of_the_other_mode() {
        let err = build_rule_table(&rules(
            r#"
mode = "simple"
[[package]]
start = "2026-03-01"
end = "2026-03-31"
min_nights = 4
total = 3830.0
"#,
        ))
        .unwrap_err();
        assert!(err.to_string().contains("rules.package"), "{err}");

        let err = build_rule_table(&rules("mode = \"package\"\ndefault_rate = 400.0"))
            .unwrap_err();
        assert!(err.to_string().contains("default_rate"), "{err}");
    }

    #[test]
    fn reports_bad_dates_with_position() {
        let err = build_rule_table(&rules(
            r#"
mode = "simple"
[[seasonal]]
start = "2026-06-15"
end = "2026-08-31"
rate = 680.0
[[seasonal]]
start = "2026-09-31"
end = "2026-10-15"
rate = 520.0
"#,
        ))
        .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("rules.seasonal #1"), "{msg}");
        assert!(msg.contains("2026-09-31"), "{msg}");
    }

    #[test]
    fn rejects_inverted_and_overlapping_rules() {
        let inverted = rules(
            r#"
mode = "simple"
[[blackout]]
start = "2026-03-22"
end = "2026-03-20"
"#,
        );
        assert!(build_rule_table(&inverted).is_err());

        let overlapping = rules(
            r#"
mode = "package"
[[package]]
start = "2026-03-01"
end = "2026-03-31"
min_nights = 4
total = 3830.0
[[package]]
start = "2026-03-31"
end = "2026-04-30"
min_nights = 3
total = 2400.0
"#,
        );
        assert!(build_rule_table(&overlapping).is_err());
    }

    #[test]
    fn fees_and_display() {
        let fees = build_fees(&FeesToml::default()).unwrap();
        assert_eq!(fees, FeeSchedule::default());
        assert!(
            build_fees(&FeesToml {
                cleaning_fee: -1.0,
                service_rate: 0.05,
            })
            .is_err()
        );

        let display = build_display(&DisplayToml::default()).unwrap();
        assert_eq!(display, DisplayFormat::default());
        assert!(
            build_display(&DisplayToml {
                fraction_digits: 9,
                ..DisplayToml::default()
            })
            .is_err()
        );
    }

    #[test]
    fn sample_configs_build() {
        for src in [
            include_str!("../stayquote.toml"),
            include_str!("../stayquote-packages.toml"),
        ] {
            let config: StayquoteConfig = toml::from_str(src).unwrap();
            build_widget(&config, d("2024-06-01")).unwrap();
        }
    }
}
