use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Stayquote configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StayquoteConfig {
    /// Cleaning fee and service rate.
    #[serde(default)]
    pub fees: FeesToml,

    /// Locale and amount formatting.
    #[serde(default)]
    pub display: DisplayToml,

    /// Blackouts and pricing rules.
    pub rules: RulesToml,
}

impl StayquoteConfig {
    /// Reads and parses the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeesToml {
    #[serde(default = "default_cleaning_fee")]
    pub cleaning_fee: f64,
    #[serde(default = "default_service_rate")]
    pub service_rate: f64,
}

impl Default for FeesToml {
    fn default() -> Self {
        Self {
            cleaning_fee: default_cleaning_fee(),
            service_rate: default_service_rate(),
        }
    }
}

fn default_cleaning_fee() -> f64 {
    180.0
}
fn default_service_rate() -> f64 {
    0.05
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_fraction_digits")]
    pub fraction_digits: u8,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            currency: default_currency(),
            fraction_digits: default_fraction_digits(),
        }
    }
}

fn default_locale() -> String {
    "fr-FR".to_string()
}
fn default_currency() -> String {
    "€".to_string()
}
fn default_fraction_digits() -> u8 {
    2
}

/// Rule table: `mode` picks which of the lists apply.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesToml {
    pub mode: String,
    /// Nightly rate outside every season (simple mode only).
    #[serde(default)]
    pub default_rate: Option<f64>,
    #[serde(default)]
    pub blackout: Vec<IntervalToml>,
    /// Simple mode only.
    #[serde(default)]
    pub seasonal: Vec<SeasonToml>,
    /// Package mode only.
    #[serde(default)]
    pub package: Vec<PackageToml>,
}

/// Inclusive `YYYY-MM-DD` date range.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntervalToml {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonToml {
    pub start: String,
    pub end: String,
    pub rate: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageToml {
    pub start: String,
    pub end: String,
    pub min_nights: u32,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACKAGE_TOML: &str = r#"
[fees]
cleaning_fee = 150.0

[display]
locale = "en-GB"

[rules]
mode = "package"

[[rules.blackout]]
start = "2026-03-20"
end = "2026-03-22"

[[rules.package]]
start = "2026-03-01"
end = "2026-03-31"
min_nights = 4
total = 3830.0
"#;

    #[test]
    fn parses_package_config() {
        let cfg: StayquoteConfig = toml::from_str(PACKAGE_TOML).unwrap();
        assert_eq!(cfg.fees.cleaning_fee, 150.0);
        assert_eq!(cfg.fees.service_rate, 0.05);
        assert_eq!(cfg.display.locale, "en-GB");
        assert_eq!(cfg.display.currency, "€");
        assert_eq!(cfg.display.fraction_digits, 2);
        assert_eq!(cfg.rules.mode, "package");
        assert_eq!(cfg.rules.blackout.len(), 1);
        assert_eq!(cfg.rules.package[0].min_nights, 4);
        assert!(cfg.rules.seasonal.is_empty());
        assert_eq!(cfg.rules.default_rate, None);
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg: StayquoteConfig = toml::from_str("[rules]\nmode = \"simple\"\n").unwrap();
        assert_eq!(cfg.fees.cleaning_fee, 180.0);
        assert_eq!(cfg.display.locale, "fr-FR");
        assert!(cfg.rules.blackout.is_empty());
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = toml::from_str::<StayquoteConfig>(
            "[rules]\nmode = \"simple\"\n[fees]\ncleaning = 10.0\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("cleaning"), "{err}");
    }

    #[test]
    fn rules_section_is_required() {
        assert!(toml::from_str::<StayquoteConfig>("[fees]\ncleaning_fee = 1.0\n").is_err());
    }

    #[test]
    fn sample_config_parses() {
        let cfg: StayquoteConfig =
            toml::from_str(include_str!("../stayquote.toml")).unwrap();
        assert_eq!(cfg.rules.mode, "simple");
        assert_eq!(cfg.rules.seasonal.len(), 4);
    }
}
