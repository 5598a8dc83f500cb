//! Calendar command: print the two-month availability grid.

use anyhow::Result;
use tracing::{info_span, warn};

use stayquote_booking::{DayCell, MonthView};
use stayquote_calendar::MonthCursor;

use crate::cli::CalendarArgs;
use crate::config::StayquoteConfig;
use crate::convert;

const LEGEND: &str = "[dd] check-in/out   (dd) in stay   -- unavailable";

/// Run the calendar command.
pub fn run(args: CalendarArgs) -> Result<()> {
    let _cmd = info_span!("calendar").entered();
    let config = StayquoteConfig::load(&args.shared.config)?;
    let mut widget = convert::build_widget(&config, args.shared.today())?;

    for date in [args.start, args.end].into_iter().flatten() {
        if !widget.activate(date) {
            warn!(%date, "day is disabled, not highlighted");
        }
    }

    let first = args
        .month
        .or_else(|| args.start.map(MonthCursor::containing))
        .unwrap_or_else(|| widget.month());
    widget.show_month(first);

    println!("{}", widget.header_label());
    for view in widget.month_views() {
        println!();
        for line in render_month(&view) {
            println!("{line}");
        }
    }
    println!();
    println!("{LEGEND}");
    Ok(())
}

/// Renders one day as a four-character cell.
fn render_cell(cell: &DayCell) -> String {
    let day = cell.date.day();
    if cell.selected {
        format!("[{day:02}]")
    } else if cell.in_range {
        format!("({day:02})")
    } else if cell.disabled {
        " -- ".to_string()
    } else {
        format!(" {day:02} ")
    }
}

/// Renders a month as a title line, a weekday header and one line per week.
fn render_month(view: &MonthView) -> Vec<String> {
    let mut lines = vec![
        view.label.clone(),
        view.weekdays.iter().map(|w| format!("{w:^4}")).collect(),
    ];

    let blanks = (0..view.leading_blanks).map(|_| "    ".to_string());
    let cells: Vec<String> = blanks.chain(view.days.iter().map(render_cell)).collect();
    for week in cells.chunks(7) {
        lines.push(week.concat().trim_end().to_string());
    }
    lines
}
