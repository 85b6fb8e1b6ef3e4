//! Client events fed into the club.

use std::fmt;

use crate::time::ClockTime;
use crate::types::ClientId;

/// What a client did.
///
/// Only seating carries a table number. The number is kept as written in
/// the input; whether such a table exists is a business rule checked by
/// the club, not a property of the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// The client came in (code 1).
    Arrival { client: ClientId },
    /// The client sat down at a table (code 2).
    Sit { client: ClientId, table: i64 },
    /// The client started waiting for a table (code 3).
    Wait { client: ClientId },
    /// The client left (code 4).
    Leave { client: ClientId },
}

impl EventKind {
    /// Numeric event code used in the input format.
    pub const fn code(&self) -> u8 {
        match self {
            Self::Arrival { .. } => 1,
            Self::Sit { .. } => 2,
            Self::Wait { .. } => 3,
            Self::Leave { .. } => 4,
        }
    }

    /// The client the event is about.
    pub const fn client(&self) -> &ClientId {
        match self {
            Self::Arrival { client }
            | Self::Sit { client, .. }
            | Self::Wait { client }
            | Self::Leave { client } => client,
        }
    }
}

/// A timestamped client event together with its source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// When the event happened.
    pub time: ClockTime,
    /// What happened.
    pub kind: EventKind,
    /// The line echoed to the output log.
    line: String,
}

impl Event {
    /// Creates an event whose log line is the canonical rendering.
    pub fn new(time: ClockTime, kind: EventKind) -> Self {
        let line = canonical_line(time, &kind);
        Self { time, kind, line }
    }

    /// Creates an event that echoes `line` verbatim, as read from input.
    pub fn with_line(time: ClockTime, kind: EventKind, line: impl Into<String>) -> Self {
        Self {
            time,
            kind,
            line: line.into(),
        }
    }

    /// The line echoed to the output log.
    pub fn line(&self) -> &str {
        &self.line
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

fn canonical_line(time: ClockTime, kind: &EventKind) -> String {
    let mut line = format!("{time} {} {}", kind.code(), kind.client());
    if let EventKind::Sit { table, .. } = kind {
        line.push(' ');
        line.push_str(&table.to_string());
    }
    line
}
