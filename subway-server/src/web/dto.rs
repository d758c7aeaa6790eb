//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, Station};
use crate::path::Path;

/// Query for the shortest path between two stations.
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    /// Departure station id
    pub source: u64,

    /// Arrival station id
    pub target: u64,

    /// Passenger age, for age discounts
    pub age: Option<i64>,
}

/// A station in a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: u64,
    pub name: String,
}

impl StationResponse {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id().get(),
            name: station.name().to_string(),
        }
    }
}

/// Shortest path result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResponse {
    /// Stations from source to target
    pub stations: Vec<StationResponse>,

    /// Total distance in km
    pub distance: u64,

    /// Fare after any age discount
    pub fare: u64,
}

impl PathResponse {
    /// Build a response for `path`, charging `fare`.
    pub fn from_path(path: &Path, fare: u64) -> Self {
        Self {
            stations: path
                .stations()
                .iter()
                .map(StationResponse::from_station)
                .collect(),
            distance: path.distance().value(),
            fare,
        }
    }
}

/// A line with its stations in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResponse {
    pub id: u64,
    pub name: String,
    pub color: String,
    pub surcharge: u32,

    /// Stations from the up terminus to the down terminus
    pub stations: Vec<StationResponse>,

    /// Length of the whole line in km
    pub distance: u64,
}

impl LineResponse {
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id().get(),
            name: line.name().to_string(),
            color: line.color().to_string(),
            surcharge: line.surcharge(),
            stations: line.stations().map(StationResponse::from_station).collect(),
            distance: line.total_distance().value(),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
