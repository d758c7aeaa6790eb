//! Line sections.

use super::{Distance, Station};

/// A stretch of track between two adjacent stations on one line.
///
/// `up` and `down` give the direction the owning line lists its stations
/// in. Trains run both ways, so route search treats a section as undirected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    up: Station,
    down: Station,
    distance: Distance,
}

impl Section {
    /// Creates a section. Callers guarantee `up != down`.
    pub(crate) fn new(up: Station, down: Station, distance: Distance) -> Self {
        Self { up, down, distance }
    }

    /// Returns the station at the up end.
    pub fn up(&self) -> &Station {
        &self.up
    }

    /// Returns the station at the down end.
    pub fn down(&self) -> &Station {
        &self.down
    }

    /// Returns the section length.
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Returns true if the section touches `station` at either end.
    pub fn touches(&self, station: &Station) -> bool {
        &self.up == station || &self.down == station
    }

    /// Returns true if the section joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &Station, b: &Station) -> bool {
        (&self.up == a && &self.down == b) || (&self.up == b && &self.down == a)
    }
}
