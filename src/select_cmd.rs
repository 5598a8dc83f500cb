//! Select command: replay day clicks through the date picker.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use stayquote_booking::BookingWidget;
use stayquote_calendar::StayDate;

use crate::cli::SelectArgs;
use crate::config::StayquoteConfig;
use crate::convert;
use crate::quote_cmd::summary_lines;

/// Run the select command.
pub fn run(args: SelectArgs) -> Result<()> {
    let _cmd = info_span!("select").entered();
    let config = StayquoteConfig::load(&args.shared.config)?;
    let mut widget = convert::build_widget(&config, args.shared.today())?;

    replay(&mut widget, &args.clicks);

    let summary = widget.summary();
    if args.json {
        let json =
            serde_json::to_string_pretty(&summary).context("failed to serialize summary")?;
        println!("{json}");
    } else {
        for line in summary_lines(&summary) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Feeds `clicks` to the widget in order and returns how many were accepted.
pub fn replay(widget: &mut BookingWidget, clicks: &[StayDate]) -> usize {
    let mut accepted = 0;
    for (i, &date) in clicks.iter().enumerate() {
        if widget.activate(date) {
            accepted += 1;
            info!(click = i, %date, selection = ?widget.selection(), "click accepted");
        } else {
            warn!(click = i, %date, "day is disabled, click ignored");
        }
    }
    accepted
}
