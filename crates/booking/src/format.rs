//! Locale-aware formatting of dates, amounts and the summary fields.

use serde::Serialize;
use stayquote_calendar::{MonthCursor, StayDate};

use crate::error::BookingError;
use crate::quote::{Ineligibility, Quote};
use crate::selection::Selection;

/// Shown in amount fields while there is nothing to price.
pub const PLACEHOLDER: &str = "—";

const MAX_FRACTION_DIGITS: u8 = 4;

/// Display language and conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Locale {
    /// French (France): `mars 2026`, `05/03/2026`, `5206,5 €`.
    #[default]
    #[serde(rename = "fr-FR")]
    FrFr,
    /// English (United Kingdom): `March 2026`, `05/03/2026`, `5206.5 €`.
    #[serde(rename = "en-GB")]
    EnGb,
}

#[rustfmt::skip]
const FR_MONTHS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin",
    "juillet", "août", "septembre", "octobre", "novembre", "décembre",
];

#[rustfmt::skip]
const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

impl Locale {
    /// BCP 47 tag, e.g. `fr-FR`.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::FrFr => "fr-FR",
            Locale::EnGb => "en-GB",
        }
    }

    /// Month name for `month` (1..=12).
    pub fn month_name(self, month: u32) -> &'static str {
        let names = match self {
            Locale::FrFr => &FR_MONTHS,
            Locale::EnGb => &EN_MONTHS,
        };
        names[(month.clamp(1, 12) - 1) as usize]
    }

    /// Abbreviated weekday headers, Monday first.
    pub fn weekday_headers(self) -> [&'static str; 7] {
        match self {
            Locale::FrFr => ["Lun", "Mar", "Mer", "Jeu", "Ven", "Sam", "Dim"],
            Locale::EnGb => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }

    /// `strftime` pattern for short dates.
    pub fn date_pattern(self) -> &'static str {
        "%d/%m/%Y"
    }

    /// Decimal separator for amounts.
    pub fn decimal_separator(self) -> char {
        match self {
            Locale::FrFr => ',',
            Locale::EnGb => '.',
        }
    }

    /// User-facing explanation of an ineligible quote.
    pub fn ineligibility_message(self, reason: Ineligibility) -> String {
        match (self, reason) {
            (Locale::FrFr, Ineligibility::BelowMinimumStay { min_nights }) => {
                format!("Séjour minimum : {min_nights} nuits")
            }
            (Locale::FrFr, Ineligibility::Unavailable) => "Dates indisponibles".to_string(),
            (Locale::EnGb, Ineligibility::BelowMinimumStay { min_nights }) => {
                format!("Minimum stay: {min_nights} nights")
            }
            (Locale::EnGb, Ineligibility::Unavailable) => {
                "These dates are unavailable".to_string()
            }
        }
    }
}

/// How amounts and dates are rendered for the output fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayFormat {
    locale: Locale,
    currency_symbol: String,
    fraction_digits: u8,
}

impl DisplayFormat {
    /// Creates a display format.
    ///
    /// `fraction_digits` is the most decimals an amount shows; trailing
    /// zeros are dropped, so whole amounts print without decimals.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidFractionDigits`] above 4 digits.
    pub fn new(
        locale: Locale,
        currency_symbol: impl Into<String>,
        fraction_digits: u8,
    ) -> Result<Self, BookingError> {
        if fraction_digits > MAX_FRACTION_DIGITS {
            return Err(BookingError::InvalidFractionDigits {
                digits: fraction_digits,
                max: MAX_FRACTION_DIGITS,
            });
        }
        Ok(Self {
            locale,
            currency_symbol: currency_symbol.into(),
            fraction_digits,
        })
    }

    /// Returns the locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns the currency symbol.
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Formats an amount, e.g. `5206,5 €`.
    pub fn amount(&self, value: f64) -> String {
        let fixed = format!("{:.*}", usize::from(self.fraction_digits), value);
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };
        let localized = trimmed.replace('.', &self.locale.decimal_separator().to_string());
        if self.currency_symbol.is_empty() {
            localized
        } else {
            format!("{localized} {}", self.currency_symbol)
        }
    }

    /// Formats a date for the check-in / check-out fields.
    pub fn date(&self, date: StayDate) -> String {
        date.format(self.locale.date_pattern())
    }

    /// Month heading, e.g. `mars 2026`.
    pub fn month_label(&self, month: MonthCursor) -> String {
        format!("{} {}", self.locale.month_name(month.month()), month.year())
    }
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            locale: Locale::FrFr,
            currency_symbol: "€".to_string(),
            fraction_digits: 2,
        }
    }
}

/// Values pushed to the booking form's output fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryFields {
    /// Check-in date, empty until picked.
    pub check_in: String,
    /// Check-out date, empty until picked.
    pub check_out: String,
    /// Night count, `0` until the selection is complete.
    pub nights: String,
    /// Nightly average.
    pub rate: String,
    /// Service fee.
    pub service_fee: String,
    /// Grand total.
    pub total: String,
    /// Why the selected stay cannot be priced, if it cannot.
    pub message: Option<String>,
}

/// Builds the output fields for `selection` and its quote.
///
/// `quote` is ignored unless `selection` is complete.
pub fn summarize(selection: &Selection, quote: Option<&Quote>, format: &DisplayFormat) -> SummaryFields {
    let mut fields = SummaryFields {
        check_in: selection.start().map(|d| format.date(d)).unwrap_or_default(),
        check_out: selection.end().map(|d| format.date(d)).unwrap_or_default(),
        nights: "0".to_string(),
        rate: PLACEHOLDER.to_string(),
        service_fee: PLACEHOLDER.to_string(),
        total: PLACEHOLDER.to_string(),
        message: None,
    };

    let Some((start, end)) = selection.range() else {
        return fields;
    };
    fields.nights = start.days_until(end).to_string();

    match quote {
        Some(Quote::Priced(b)) => {
            fields.rate = format.amount(b.nightly_average());
            fields.service_fee = format.amount(b.service_fee());
            fields.total = format.amount(b.total());
        }
        Some(Quote::Ineligible(reason)) => {
            fields.message = Some(format.locale().ineligibility_message(*reason));
        }
        None => {}
    }
    fields
}
