//! On-disk network description.
//!
//! ```json
//! {
//!   "stations": [{ "id": 1, "name": "강남역" }, { "id": 2, "name": "양재역" }],
//!   "lines": [{
//!     "id": 1, "name": "신분당선", "color": "bg-red-600", "surcharge": 900,
//!     "sections": [{ "up": 1, "down": 2, "distance": 10 }]
//!   }]
//! }
//! ```
//!
//! Sections are replayed in file order through [`Line::add_section`], so each
//! one after the first must share exactly one station with those before it.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Distance, Line, LineId, Station, StationId};

use super::error::NetworkError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkFile {
    pub stations: Vec<StationDto>,
    #[serde(default)]
    pub lines: Vec<LineDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationDto {
    pub id: StationId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineDto {
    pub id: LineId,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub surcharge: u32,
    pub sections: Vec<SectionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDto {
    pub up: StationId,
    pub down: StationId,
    /// Signed so a bad value is reported as a distance error, not a parse error.
    pub distance: i64,
}

impl NetworkFile {
    /// Validate the file and build stations and lines from it.
    ///
    /// Stations keep file order. Fails on the first problem found.
    pub fn into_parts(self) -> Result<(Vec<Station>, Vec<Line>), NetworkError> {
        let mut by_id: HashMap<StationId, Station> = HashMap::new();
        let mut stations = Vec::with_capacity(self.stations.len());
        for dto in self.stations {
            let station = Station::new(dto.id, dto.name);
            if by_id.insert(dto.id, station.clone()).is_some() {
                return Err(NetworkError::DuplicateStation(dto.id));
            }
            stations.push(station);
        }

        let mut line_ids = HashSet::new();
        let mut lines = Vec::with_capacity(self.lines.len());
        for dto in self.lines {
            if !line_ids.insert(dto.id) {
                return Err(NetworkError::DuplicateLine(dto.id));
            }
            lines.push(build_line(dto, &by_id)?);
        }

        Ok((stations, lines))
    }
}

fn build_line(dto: LineDto, stations: &HashMap<StationId, Station>) -> Result<Line, NetworkError> {
    let id = dto.id;
    let lookup = |station: StationId| {
        stations
            .get(&station)
            .cloned()
            .ok_or(NetworkError::UnknownStation { line: id, station })
    };
    let distance =
        |km: i64| Distance::new(km).map_err(|source| NetworkError::Distance { line: id, source });

    let mut sections = dto.sections.into_iter();
    let first = sections.next().ok_or(NetworkError::EmptyLine(id))?;

    let mut line = Line::new(
        id,
        dto.name,
        dto.color,
        dto.surcharge,
        lookup(first.up)?,
        lookup(first.down)?,
        distance(first.distance)?,
    )
    .map_err(|source| NetworkError::Line { line: id, source })?;

    for section in sections {
        line.add_section(
            lookup(section.up)?,
            lookup(section.down)?,
            distance(section.distance)?,
        )
        .map_err(|source| NetworkError::Line { line: id, source })?;
    }

    debug!(
        line = %line.name(),
        sections = line.sections().len(),
        "loaded line"
    );

    Ok(line)
}
