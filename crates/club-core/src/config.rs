//! Fixed parameters of a simulated club day.

use serde::Serialize;

use crate::time::ClockTime;
use crate::types::ValidationError;

/// The club's table count, operating hours and hourly rate.
///
/// Immutable once built; every invariant is checked in [`ClubConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClubConfig {
    tables: u32,
    open: ClockTime,
    close: ClockTime,
    hourly_cost: u64,
}

impl ClubConfig {
    /// Largest supported table count.
    pub const MAX_TABLES: u32 = 65_535;

    /// Largest supported hourly cost, the range of a signed 32-bit amount.
    pub const MAX_HOURLY_COST: u64 = 2_147_483_647;

    /// Creates a configuration, rejecting zero or oversized counts and
    /// non-increasing hours.
    pub fn new(
        tables: u32,
        open: ClockTime,
        close: ClockTime,
        hourly_cost: u64,
    ) -> Result<Self, ValidationError> {
        if tables == 0 {
            return Err(ValidationError::NotPositive {
                field: "table count",
            });
        }
        if tables > Self::MAX_TABLES {
            return Err(ValidationError::TooLarge {
                field: "table count",
                max: u64::from(Self::MAX_TABLES),
            });
        }
        if open >= close {
            return Err(ValidationError::ClosesBeforeOpening {
                open: open.to_string(),
                close: close.to_string(),
            });
        }
        if hourly_cost == 0 {
            return Err(ValidationError::NotPositive {
                field: "hourly cost",
            });
        }
        if hourly_cost > Self::MAX_HOURLY_COST {
            return Err(ValidationError::TooLarge {
                field: "hourly cost",
                max: Self::MAX_HOURLY_COST,
            });
        }
        Ok(Self {
            tables,
            open,
            close,
            hourly_cost,
        })
    }

    /// Number of tables, numbered `1..=tables`.
    pub const fn tables(&self) -> u32 {
        self.tables
    }

    pub const fn open(&self) -> ClockTime {
        self.open
    }

    pub const fn close(&self) -> ClockTime {
        self.close
    }

    /// Price of one started hour at a table.
    pub const fn hourly_cost(&self) -> u64 {
        self.hourly_cost
    }

    /// Whether `time` falls within opening hours, both ends inclusive.
    pub fn is_open_at(&self, time: ClockTime) -> bool {
        (self.open..=self.close).contains(&time)
    }
}
