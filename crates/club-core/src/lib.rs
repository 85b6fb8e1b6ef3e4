//! Core domain logic for the computer club simulator.
//!
//! This crate contains the fundamental types and logic for:
//! - Time: strict `HH:MM` clock values and duration formatting
//! - Events: the four client event kinds and the typed output log
//! - The club: a state machine applying events and billing tables

mod club;
mod config;
mod error;
mod event;
mod log;
mod report;
pub mod time;
mod types;

pub use club::Club;
pub use config::ClubConfig;
pub use error::ClubError;
pub use event::{Event, EventKind};
pub use log::LogEntry;
pub use report::TableReport;
pub use time::{ClockTime, format_duration};
pub use types::{ClientId, ValidationError};
