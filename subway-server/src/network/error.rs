//! Network loading error types.

use std::path::PathBuf;

use crate::domain::{InvalidDistance, LineError, LineId, StationId};

/// Errors that can occur when loading a network file.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Reading the file failed
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse the file as JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two stations share an id
    #[error("duplicate station id {0}")]
    DuplicateStation(StationId),

    /// Two lines share an id
    #[error("duplicate line id {0}")]
    DuplicateLine(LineId),

    /// A section refers to a station that is not in the station list
    #[error("line {line} refers to unknown station {station}")]
    UnknownStation { line: LineId, station: StationId },

    /// A line has no sections
    #[error("line {0} has no sections")]
    EmptyLine(LineId),

    /// A section distance is not positive
    #[error("line {line}: {source}")]
    Distance {
        line: LineId,
        source: InvalidDistance,
    },

    /// A section does not fit the line built so far
    #[error("line {line}: {source}")]
    Line { line: LineId, source: LineError },
}
