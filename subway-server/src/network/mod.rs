//! Loaded subway network: the station list and every line.
//!
//! Stands in for the station and line stores the route search consults.
//! The network is read once from a JSON file and then only read.

mod error;
mod file;

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::domain::{Line, Station, StationId};

pub use error::NetworkError;
pub use file::{LineDto, NetworkFile, SectionDto, StationDto};

/// Stations and lines, indexed for lookup by id.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    station_index: HashMap<StationId, usize>,
    lines: Vec<Line>,
}

impl Network {
    /// Build a network from already-validated parts.
    ///
    /// If two stations share an id the later one wins the lookup.
    pub fn new(stations: Vec<Station>, lines: Vec<Line>) -> Self {
        let station_index = stations
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id(), i))
            .collect();
        Self {
            stations,
            station_index,
            lines,
        }
    }

    /// Load a network from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let network = Self::from_json(&json)?;

        info!(
            path = %path.display(),
            stations = network.stations.len(),
            lines = network.lines.len(),
            "loaded network"
        );

        Ok(network)
    }

    /// Parse a network from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        let file: NetworkFile = serde_json::from_str(json)?;
        let (stations, lines) = file.into_parts()?;
        Ok(Self::new(stations, lines))
    }

    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.station_index.get(&id).map(|&i| &self.stations[i])
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}
