use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stayquote_calendar::{MonthCursor, StayDate};

/// Stayquote booking quote engine.
#[derive(Parser)]
#[command(
    name = "stayquote",
    version,
    about = "Seasonal and package pricing quotes for short-stay bookings"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Price a stay between two dates.
    Quote(QuoteArgs),
    /// Replay day clicks through the date picker and print the result.
    Select(SelectArgs),
    /// Print the two-month availability grid.
    Calendar(CalendarArgs),
}

/// Options shared by every subcommand.
#[derive(clap::Args)]
pub struct SharedArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "stayquote.toml")]
    pub config: PathBuf,

    /// Treat this day (YYYY-MM-DD) as today instead of the local date.
    #[arg(long)]
    pub today: Option<StayDate>,
}

impl SharedArgs {
    /// The `--today` override, or the local date.
    pub fn today(&self) -> StayDate {
        self.today.unwrap_or_else(StayDate::today)
    }
}

/// Arguments for the `quote` subcommand.
#[derive(clap::Args)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub shared: SharedArgs,

    /// Arrival day (YYYY-MM-DD).
    #[arg(long = "check-in")]
    pub check_in: StayDate,

    /// Departure day (YYYY-MM-DD); not a night of the stay.
    #[arg(long = "check-out")]
    pub check_out: StayDate,

    /// Print the quote as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `select` subcommand.
#[derive(clap::Args)]
pub struct SelectArgs {
    #[command(flatten)]
    pub shared: SharedArgs,

    /// Day clicked (YYYY-MM-DD); repeat for a sequence of clicks.
    #[arg(long = "click", required = true)]
    pub clicks: Vec<StayDate>,

    /// Print the summary fields as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    #[command(flatten)]
    pub shared: SharedArgs,

    /// First month shown (YYYY-MM). Defaults to the check-in month, then today's.
    #[arg(short, long)]
    pub month: Option<MonthCursor>,

    /// Check-in day to highlight.
    #[arg(long)]
    pub start: Option<StayDate>,

    /// Check-out day to highlight; needs `--start`.
    #[arg(long, requires = "start")]
    pub end: Option<StayDate>,
}
