//! Line structure errors.
//!
//! These errors represent edits that would break a line's single-chain
//! shape. They are distinct from path search errors.

use super::{InvalidDistance, Station};

/// Errors from creating or editing the sections of a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// The split section is not longer than the section being inserted
    #[error(transparent)]
    Distance(#[from] InvalidDistance),

    /// A section cannot start and end at the same station
    #[error("section endpoints must differ: {0}")]
    SameEndpoints(Station),

    /// The two stations are already adjacent on the line
    #[error("section {0} - {1} already exists on the line")]
    SectionAlreadyExists(Station, Station),

    /// Both stations are on the line, so adding the section would close a loop
    #[error("stations {0} and {1} are both already on the line")]
    StationsAlreadyOnLine(Station, Station),

    /// Neither station is on the line, so the section would float free
    #[error("neither {0} nor {1} is on the line")]
    NotConnected(Station, Station),

    /// The station to remove is not part of the line
    #[error("station {0} is not on the line")]
    StationNotOnLine(Station),

    /// The line is down to its last section
    #[error("a line must keep at least one section")]
    LastSection,
}
