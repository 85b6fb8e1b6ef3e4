//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Computer club day simulator.
///
/// Replays one day of client events against a club with hourly-billed
/// tables, then prints the event log and each table's revenue and
/// occupied time.
#[derive(Debug, Parser)]
#[command(name = "club", version, about, long_about = None)]
pub struct Cli {
    /// Input file: table count, opening hours, hourly cost, then events.
    pub input: PathBuf,

    /// Print the log and report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
