//! End-of-day per-table summary.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::time::format_duration;

/// Revenue and occupied time of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableReport {
    /// Table number, starting at 1.
    pub table: u32,
    /// Total billed amount.
    pub revenue: u64,
    /// Total minutes the table was occupied, rendered as `HH:MM` in JSON.
    #[serde(rename = "occupied", serialize_with = "serialize_duration")]
    pub occupied_minutes: u32,
}

impl fmt::Display for TableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.table,
            self.revenue,
            format_duration(self.occupied_minutes)
        )
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_duration<S: Serializer>(minutes: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_duration(*minutes))
}
