//! Simulate command: replays one input file through the club.
//!
//! Output is either plain text (opening time, log lines, closing time,
//! per-table report) or a single JSON document carrying the same data with
//! typed log entries.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use club_core::{Club, ClockTime, LogEntry, TableReport};
use club_input::Scenario;
use serde::Serialize;

use crate::config::OutputFormat;

/// JSON shape of a simulated day.
#[derive(Debug, Serialize)]
struct DayJson<'a> {
    open: ClockTime,
    close: ClockTime,
    log: &'a [LogEntry],
    report: Vec<TableReport>,
}

/// Runs every event of the scenario and closes the day.
pub fn simulate(scenario: &Scenario) -> Club {
    let mut club = Club::new(scenario.config);
    for event in &scenario.events {
        club.process_event(event);
    }
    club.end_of_day();

    tracing::debug!(
        events = scenario.events.len(),
        entries = club.log().len(),
        "day simulated"
    );
    club
}

/// Formats a finished day as text lines.
pub fn format_text(club: &Club) -> String {
    let config = club.config();
    let mut lines = Vec::new();

    lines.push(config.open().to_string());
    lines.extend(club.output());
    lines.push(config.close().to_string());
    lines.extend(club.report().iter().map(ToString::to_string));

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Formats a finished day as pretty-printed JSON.
pub fn format_json(club: &Club) -> Result<String> {
    let day = DayJson {
        open: club.config().open(),
        close: club.config().close(),
        log: club.log(),
        report: club.report(),
    };
    Ok(serde_json::to_string_pretty(&day)?)
}

/// Loads `input`, simulates the day, and writes the result.
///
/// Returns `Ok(false)` when the input was rejected. In that case the
/// offending line (or the header message) is the only thing written.
/// Failing to read the file at all is an error.
pub fn run<W: Write>(writer: &mut W, input: &Path, format: OutputFormat) -> Result<bool> {
    let scenario = match club_input::load_file(input) {
        Ok(scenario) => scenario,
        Err(err) => {
            let Some(line) = err.offending_line().map(str::to_owned) else {
                return Err(err).context("failed to load input");
            };
            tracing::debug!(error = %err, "input rejected");
            writeln!(writer, "{line}")?;
            return Ok(false);
        }
    };

    let club = simulate(&scenario);
    match format {
        OutputFormat::Text => write!(writer, "{}", format_text(&club))?,
        OutputFormat::Json => writeln!(writer, "{}", format_json(&club)?)?,
    }

    Ok(true)
}
