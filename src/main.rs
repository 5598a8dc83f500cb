mod calendar_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod quote_cmd;
mod select_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Quote(args) => quote_cmd::run(args),
        Command::Select(args) => select_cmd::run(args),
        Command::Calendar(args) => calendar_cmd::run(args),
    }
}
