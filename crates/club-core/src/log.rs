//! Entries of the club's output log.

use std::fmt;

use serde::Serialize;

use crate::error::ClubError;
use crate::time::ClockTime;
use crate::types::ClientId;

/// One line of the output log.
///
/// Decisions are recorded as typed entries; the numeric codes only appear
/// when an entry is rendered with `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogEntry {
    /// An input event, echoed verbatim.
    Input { line: String },
    /// The club sent a client away (code 11).
    ForcedDeparture { time: ClockTime, client: ClientId },
    /// A waiting client took a freed table (code 12).
    AutoSeated {
        time: ClockTime,
        client: ClientId,
        table: u32,
    },
    /// The preceding input event was rejected (code 13).
    Error { time: ClockTime, error: ClubError },
}

impl LogEntry {
    pub const FORCED_DEPARTURE_CODE: u8 = 11;
    pub const AUTO_SEATED_CODE: u8 = 12;
    pub const ERROR_CODE: u8 = 13;
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input { line } => f.write_str(line),
            Self::ForcedDeparture { time, client } => {
                write!(f, "{time} {} {client}", Self::FORCED_DEPARTURE_CODE)
            }
            Self::AutoSeated {
                time,
                client,
                table,
            } => write!(f, "{time} {} {client} {table}", Self::AUTO_SEATED_CODE),
            Self::Error { time, error } => write!(f, "{time} {} {error}", Self::ERROR_CODE),
        }
    }
}
