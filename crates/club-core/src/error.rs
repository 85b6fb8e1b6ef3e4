//! Business-rule violations raised while applying events.

use serde::Serialize;
use thiserror::Error;

/// Why the club rejected an event.
///
/// The `Display` form is the exact message written to the output log.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClubError {
    /// Arrival outside opening hours.
    #[error("NotOpenYet")]
    NotOpenYet,

    /// Arrival of a client who is already inside.
    #[error("YouShallNotPass")]
    AlreadyInClub,

    /// Action by a client who is not inside.
    #[error("ClientUnknown")]
    ClientUnknown,

    /// Seating request for a table that does not exist.
    #[error("InvalidTableNumber")]
    InvalidTableNumber,

    /// Seating request for an occupied table.
    #[error("PlaceIsBusy")]
    PlaceIsBusy,

    /// Waiting while a table is free.
    #[error("ICanWaitNoLonger!")]
    CanWaitNoLonger,
}

impl Serialize for ClubError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
