//! Station identity types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Opaque station identifier assigned by whoever owns the station list.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u64);

impl StationId {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        StationId(id)
    }

    /// Returns the raw identifier.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station in the network.
///
/// Stations carry a display name, but two stations are the same station
/// exactly when their ids match. Renaming a station does not change its
/// identity.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{Station, StationId};
///
/// let a = Station::new(StationId::new(1), "강남역");
/// let b = Station::new(StationId::new(1), "Gangnam");
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct Station {
    id: StationId,
    name: String,
}

impl Station {
    /// Create a station.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the station identifier.
    pub fn id(&self) -> StationId {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({}, {})", self.id.0, self.name)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
