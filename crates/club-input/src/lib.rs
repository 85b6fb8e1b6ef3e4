//! Input loader for the computer club simulator.
//!
//! Reads the line-oriented day description and turns it into a validated
//! [`ClubConfig`] plus the ordered list of client [`Event`]s.
//!
//! # Format
//!
//! ```text
//! 3                  <- number of tables
//! 09:00 19:00        <- opening and closing time
//! 10                 <- hourly cost
//! 08:48 1 client1    <- events: time, event id, client [, table]
//! 09:54 2 client1 1
//! ```
//!
//! Only syntax is checked here. Business rules (opening hours, table
//! ranges, membership) are the club's concern and never fail loading.

use std::io;
use std::path::{Path, PathBuf};

use club_core::{ClientId, ClockTime, ClubConfig, Event, EventKind, ValidationError};
use thiserror::Error;

/// Message reported when the three header lines are not all present.
pub const MISSING_HEADER_MESSAGE: &str = "Not enough configuration lines provided.\nMust be:\n<Number of Tables>\n<Opening Hours> <Closing Hours>\n<Hourly Cost>.";

/// Number of header lines before the first event.
const HEADER_LINES: usize = 3;

/// Errors that stop a day description from loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Fewer than three lines were given.
    #[error("{}", MISSING_HEADER_MESSAGE)]
    MissingHeader,

    /// A line was malformed. Only the first such line is reported.
    #[error("line {number}: {reason}: {line:?}")]
    InvalidLine {
        /// 1-based line number.
        number: usize,
        /// The line exactly as read.
        line: String,
        #[source]
        reason: LineError,
    },
}

impl LoadError {
    /// The text to show the user in place of the simulation output.
    ///
    /// Returns `None` for I/O failures, which have no input line to point at.
    pub fn offending_line(&self) -> Option<&str> {
        match self {
            Self::Io { .. } => None,
            Self::MissingHeader => Some(MISSING_HEADER_MESSAGE),
            Self::InvalidLine { line, .. } => Some(line),
        }
    }
}

/// Why a single line was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    /// Wrong number of whitespace-separated tokens.
    #[error("expected {expected} tokens, found {found}")]
    TokenCount { expected: usize, found: usize },

    /// A token that should be an integer was not one.
    #[error("invalid integer {token:?}")]
    Integer { token: String },

    /// The event id was outside 1..=4.
    #[error("unknown event id {0}")]
    UnknownEventId(i64),

    /// A value failed domain validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A loaded day: club parameters and the events to replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub config: ClubConfig,
    pub events: Vec<Event>,
}

/// Reads and parses a day description from a file.
pub fn load_file(path: &Path) -> Result<Scenario, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario = parse(&content)?;
    tracing::debug!(
        path = %path.display(),
        events = scenario.events.len(),
        "loaded scenario"
    );
    Ok(scenario)
}

/// Parses a day description.
///
/// Empty event lines are skipped; the first malformed line aborts parsing.
pub fn parse(input: &str) -> Result<Scenario, LoadError> {
    let lines: Vec<&str> = input.lines().collect();
    if lines.len() < HEADER_LINES {
        return Err(LoadError::MissingHeader);
    }

    let invalid = |index: usize, reason: LineError| LoadError::InvalidLine {
        number: index + 1,
        line: lines[index].to_string(),
        reason,
    };

    let tables = parse_table_count(lines[0]).map_err(|e| invalid(0, e))?;
    let (open, close) = parse_hours(lines[1]).map_err(|e| invalid(1, e))?;
    let hourly_cost = parse_hourly_cost(lines[2]).map_err(|e| invalid(2, e))?;
    let config = ClubConfig::new(tables, open, close, hourly_cost)
        .map_err(|e| invalid(1, LineError::Validation(e)))?;

    let mut events = Vec::new();
    for (index, line) in lines.iter().enumerate().skip(HEADER_LINES) {
        if line.is_empty() {
            continue;
        }
        events.push(parse_event(line).map_err(|e| invalid(index, e))?);
    }

    Ok(Scenario { config, events })
}

fn tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parses a base-10 integer with nothing else around it.
fn parse_int(token: &str) -> Result<i64, LineError> {
    token.parse().map_err(|_| LineError::Integer {
        token: token.to_string(),
    })
}

/// Parses a line holding exactly one integer in `1..=max`.
fn parse_bounded(line: &str, field: &'static str, max: u64) -> Result<u64, LineError> {
    let tokens = tokens(line);
    let &[token] = tokens.as_slice() else {
        return Err(LineError::TokenCount {
            expected: 1,
            found: tokens.len(),
        });
    };
    let value = parse_int(token)?;
    let value = u64::try_from(value)
        .ok()
        .filter(|&value| value > 0)
        .ok_or(ValidationError::NotPositive { field })?;
    if value > max {
        return Err(ValidationError::TooLarge { field, max }.into());
    }
    Ok(value)
}

fn parse_table_count(line: &str) -> Result<u32, LineError> {
    let max = ClubConfig::MAX_TABLES;
    let value = parse_bounded(line, "table count", u64::from(max))?;
    u32::try_from(value).map_err(|_| {
        ValidationError::TooLarge {
            field: "table count",
            max: u64::from(max),
        }
        .into()
    })
}

fn parse_hourly_cost(line: &str) -> Result<u64, LineError> {
    parse_bounded(line, "hourly cost", ClubConfig::MAX_HOURLY_COST)
}

fn parse_hours(line: &str) -> Result<(ClockTime, ClockTime), LineError> {
    let tokens = tokens(line);
    let &[open, close] = tokens.as_slice() else {
        return Err(LineError::TokenCount {
            expected: 2,
            found: tokens.len(),
        });
    };
    let open: ClockTime = open.parse()?;
    let close: ClockTime = close.parse()?;
    if open >= close {
        return Err(ValidationError::ClosesBeforeOpening {
            open: open.to_string(),
            close: close.to_string(),
        }
        .into());
    }
    Ok((open, close))
}

fn parse_event(line: &str) -> Result<Event, LineError> {
    let tokens = tokens(line);
    let [time, code, params @ ..] = tokens.as_slice() else {
        return Err(LineError::TokenCount {
            expected: 2,
            found: tokens.len(),
        });
    };

    let time: ClockTime = time.parse()?;
    let code = parse_int(code)?;
    let kind = match (code, params) {
        (1, [client]) => EventKind::Arrival {
            client: ClientId::new(*client)?,
        },
        (2, [client, table]) => EventKind::Sit {
            client: ClientId::new(*client)?,
            table: parse_int(table)?,
        },
        (3, [client]) => EventKind::Wait {
            client: ClientId::new(*client)?,
        },
        (4, [client]) => EventKind::Leave {
            client: ClientId::new(*client)?,
        },
        (1..=4, _) => {
            let expected = if code == 2 { 4 } else { 3 };
            return Err(LineError::TokenCount {
                expected,
                found: tokens.len(),
            });
        }
        _ => return Err(LineError::UnknownEventId(code)),
    };

    Ok(Event::with_line(time, kind, line))
}
