//! Outdoorsy - customer and vehicle records
//!
//! Imports comma- or pipe-delimited customer files into SQLite and shows
//! them as a table sorted by full name or vehicle type.

mod cli;
mod commands;
mod interactive;
mod output;
mod ui;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;
use ui::{MessageType, Style};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so table and JSON output stay clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let style = Style::new(cli.color);
    if let Err(e) = commands::execute(cli, &style) {
        eprintln!("{}", style.message(MessageType::Err, &e.to_string()));
        std::process::exit(1);
    }
}
