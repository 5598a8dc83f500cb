//! Quote command: price one stay from the command line.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use stayquote_booking::{BookingWidget, Quote, Selection, SummaryFields, summarize};
use stayquote_calendar::StayDate;

use crate::cli::QuoteArgs;
use crate::config::StayquoteConfig;
use crate::convert;

/// Run the quote command.
pub fn run(args: QuoteArgs) -> Result<()> {
    let _cmd = info_span!("quote").entered();
    let config = StayquoteConfig::load(&args.shared.config)?;
    let widget = convert::build_widget(&config, args.shared.today())?;

    let (start, end) = (args.check_in, args.check_out);
    let quote = price_stay(&widget, start, end)?;

    if args.json {
        let json = serde_json::to_string_pretty(&quote).context("failed to serialize quote")?;
        println!("{json}");
        return Ok(());
    }

    for line in report_lines(&widget, start, end, &quote) {
        println!("{line}");
    }
    Ok(())
}

/// Checks that `[start, end)` can be booked, then prices it.
///
/// An unbookable range is an error; a bookable one that cannot be priced
/// (e.g. below the minimum stay) is an ineligible quote.
pub fn price_stay(widget: &BookingWidget, start: StayDate, end: StayDate) -> Result<Quote> {
    if let Err(reason) = widget.resolver().check_range(start, end) {
        bail!("cannot book {start} to {end}: {reason}");
    }
    let quote = stayquote_booking::quote(widget.table(), widget.fees(), start, end);
    info!(%start, %end, ?quote, "quote computed");
    Ok(quote)
}

/// Summary lines for a quoted stay, plus the cleaning fee when priced.
pub fn report_lines(
    widget: &BookingWidget,
    start: StayDate,
    end: StayDate,
    quote: &Quote,
) -> Vec<String> {
    let selection = Selection::Complete { start, end };
    let mut lines = summary_lines(&summarize(&selection, Some(quote), widget.format()));
    if let Quote::Priced(b) = quote {
        lines.push(format!(
            "{:<13}{}",
            "Cleaning fee",
            widget.format().amount(b.cleaning_fee())
        ));
    }
    lines
}

/// Summary fields as aligned `label value` lines, then the message if any.
pub fn summary_lines(fields: &SummaryFields) -> Vec<String> {
    let rows = [
        ("Check-in", &fields.check_in),
        ("Check-out", &fields.check_out),
        ("Nights", &fields.nights),
        ("Nightly rate", &fields.rate),
        ("Service fee", &fields.service_fee),
        ("Total", &fields.total),
    ];
    let mut lines: Vec<String> = rows
        .iter()
        .map(|(label, value)| format!("{label:<13}{value}"))
        .collect();
    lines.extend(fields.message.clone());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> StayDate {
        StayDate::parse_iso(s).unwrap()
    }

    fn chalet(today: &str) -> BookingWidget {
        let config: StayquoteConfig =
            toml::from_str(include_str!("../stayquote-packages.toml")).unwrap();
        convert::build_widget(&config, d(today)).unwrap()
    }

    #[test]
    fn prices_a_package_stay() {
        let widget = chalet("2026-03-01");
        let quote = price_stay(&widget, d("2026-03-05"), d("2026-03-10")).unwrap();
        assert_eq!(quote.breakdown().unwrap().total(), 5206.5);

        let lines = report_lines(&widget, d("2026-03-05"), d("2026-03-10"), &quote);
        assert_eq!(
            lines,
            [
                "Check-in     05/03/2026",
                "Check-out    10/03/2026",
                "Nights       5",
                "Nightly rate 957,5 €",
                "Service fee  239 €",
                "Total        5206,5 €",
                "Cleaning fee 180 €",
            ]
        );
    }

    #[test]
    fn short_stay_is_reported_not_rejected() {
        let widget = chalet("2026-03-01");
        let quote = price_stay(&widget, d("2026-03-05"), d("2026-03-08")).unwrap();
        let lines = report_lines(&widget, d("2026-03-05"), d("2026-03-08"), &quote);
        assert_eq!(lines[5], "Total        —");
        assert_eq!(lines.last().unwrap(), "Séjour minimum : 4 nuits");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn unbookable_ranges_are_errors() {
        let widget = chalet("2026-03-01");
        let err = price_stay(&widget, d("2026-03-28"), d("2026-04-03")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot book 2026-03-28 to 2026-04-03: night of 2026-04-01 belongs to another pricing period"
        );

        let err = price_stay(&widget, d("2026-03-18"), d("2026-03-24")).unwrap_err();
        assert!(err.to_string().contains("2026-03-20 is unavailable"), "{err}");

        // Past days are unavailable.
        let widget = chalet("2026-03-10");
        assert!(price_stay(&widget, d("2026-03-05"), d("2026-03-12")).is_err());

        assert!(price_stay(&widget, d("2026-03-12"), d("2026-03-12")).is_err());
    }
}
