//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The provided value contained whitespace.
    #[error("{field} cannot contain whitespace: {value:?}")]
    Whitespace { field: &'static str, value: String },

    /// A clock time was not in strict `HH:MM` form.
    #[error("invalid time {value:?}, expected HH:MM")]
    TimeFormat { value: String },

    /// A minute offset was past the end of the day.
    #[error("minute offset {minutes} is outside 0..1440")]
    TimeOutOfRange { minutes: u16 },

    /// A count or amount that must be positive was zero.
    #[error("{field} must be positive")]
    NotPositive { field: &'static str },

    /// A count or amount exceeded its supported maximum.
    #[error("{field} must be at most {max}")]
    TooLarge { field: &'static str, max: u64 },

    /// The club would close before (or when) it opens.
    #[error("closing time {close} must be after opening time {open}")]
    ClosesBeforeOpening { open: String, close: String },
}

/// A validated client identifier.
///
/// Client IDs are non-empty and contain no whitespace, so they survive a
/// round trip through a space-separated log line. Ordering is bytewise,
/// which is what the end-of-day sweep relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new ID after validation.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::Empty { field: "client ID" });
        }
        if id.chars().any(char::is_whitespace) {
            return Err(ValidationError::Whitespace {
                field: "client ID",
                value: id,
            });
        }
        Ok(Self(id))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ClientId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClientId> for String {
    fn from(id: ClientId) -> Self {
        id.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
