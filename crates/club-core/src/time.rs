//! Simulated wall-clock values.
//!
//! The simulation never reads a real clock. Every timestamp is a minute
//! offset since midnight, written as `HH:MM` on input and output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::ValidationError;

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: u16 = 60;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// A time of day with minute resolution, in `00:00..=23:59`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: Self = Self(0);

    /// Creates a clock time from a minute offset since midnight.
    pub const fn new(minutes: u16) -> Result<Self, ValidationError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ValidationError::TimeOutOfRange { minutes });
        }
        Ok(Self(minutes))
    }

    /// Creates a clock time from an hour and minute, if both are in range.
    pub const fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour >= 24 || minute >= MINUTES_PER_HOUR {
            return None;
        }
        Some(Self(hour * MINUTES_PER_HOUR + minute))
    }

    /// Returns the minute offset since midnight.
    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// Minutes elapsed from `earlier` to `self`, or zero if `earlier` is later.
    pub fn minutes_since(self, earlier: Self) -> u32 {
        u32::from(self.0.saturating_sub(earlier.0))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}",
            self.0 / MINUTES_PER_HOUR,
            self.0 % MINUTES_PER_HOUR
        )
    }
}

impl FromStr for ClockTime {
    type Err = ValidationError;

    /// Parses strict `HH:MM`: two digits, a colon, two digits.
    ///
    /// Signs, padding and single-digit hours are all rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::TimeFormat {
            value: s.to_string(),
        };

        let &[h1, h2, b':', m1, m2] = s.as_bytes() else {
            return Err(invalid());
        };
        if ![h1, h2, m1, m2].iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }

        let digit = |b: u8| u16::from(b - b'0');
        let hour = digit(h1) * 10 + digit(h2);
        let minute = digit(m1) * 10 + digit(m2);
        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Formats a minute count as `HH:MM`.
///
/// Unlike [`ClockTime`], the hour part is not capped at 23.
pub fn format_duration(minutes: u32) -> String {
    let per_hour = u32::from(MINUTES_PER_HOUR);
    format!("{:02}:{:02}", minutes / per_hour, minutes % per_hour)
}
