//! Lines: ordered chains of sections.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Distance, LineError, Section, Station};

/// Opaque line identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(u64);

impl LineId {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        LineId(id)
    }

    /// Returns the raw identifier.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subway line.
///
/// Sections are kept in order from the up terminus to the down terminus,
/// so `sections[i].down() == sections[i + 1].up()` for every `i`.
///
/// # Invariants
///
/// - At least one section
/// - No station appears twice (the line is a simple chain, no branches or loops)
/// - Every section distance is positive
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    surcharge: u32,
    sections: Vec<Section>,
}

impl Line {
    /// Creates a line from its first section.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_server::domain::{Distance, Line, LineId, Station, StationId};
    ///
    /// let gangnam = Station::new(StationId::new(1), "강남역");
    /// let yangjae = Station::new(StationId::new(2), "양재역");
    /// let line = Line::new(
    ///     LineId::new(1),
    ///     "신분당선",
    ///     "bg-red-600",
    ///     900,
    ///     gangnam,
    ///     yangjae,
    ///     Distance::new(10).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(line.sections().len(), 1);
    /// assert_eq!(line.surcharge(), 900);
    /// ```
    pub fn new(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        surcharge: u32,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<Self, LineError> {
        if up == down {
            return Err(LineError::SameEndpoints(up));
        }
        Ok(Self {
            id,
            name: name.into(),
            color: color.into(),
            surcharge,
            sections: vec![Section::new(up, down, distance)],
        })
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Extra fare charged on any route that rides this line.
    pub fn surcharge(&self) -> u32 {
        self.surcharge
    }

    /// Sections in order from the up terminus.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Stations in order from the up terminus to the down terminus.
    pub fn stations(&self) -> impl Iterator<Item = &Station> + '_ {
        self.sections
            .first()
            .map(Section::up)
            .into_iter()
            .chain(self.sections.iter().map(Section::down))
    }

    /// Returns true if `station` is on this line.
    pub fn contains(&self, station: &Station) -> bool {
        self.position(station).is_some()
    }

    /// Length of the whole line.
    pub fn total_distance(&self) -> Distance {
        self.sections
            .iter()
            .fold(Distance::zero(), |acc, s| acc.add(s.distance()))
    }

    /// Inserts a section that shares exactly one station with the line.
    ///
    /// If the shared station is a terminus and the new section points away
    /// from the line, the line is extended. Otherwise the existing section
    /// at the shared station is split in two: the new section takes its
    /// own distance and the remainder keeps the rest, so the split section
    /// must be strictly longer than the new one.
    ///
    /// # Errors
    ///
    /// - [`LineError::SameEndpoints`] if `up == down`
    /// - [`LineError::SectionAlreadyExists`] if the stations are already adjacent
    /// - [`LineError::StationsAlreadyOnLine`] if both stations are on the line
    /// - [`LineError::NotConnected`] if neither station is on the line
    /// - [`LineError::Distance`] if the split section is not longer than `distance`
    pub fn add_section(
        &mut self,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<(), LineError> {
        if up == down {
            return Err(LineError::SameEndpoints(up));
        }

        match (self.position(&up), self.position(&down)) {
            (Some(u), Some(d)) if u.abs_diff(d) == 1 => {
                Err(LineError::SectionAlreadyExists(up, down))
            }
            (Some(_), Some(_)) => Err(LineError::StationsAlreadyOnLine(up, down)),
            (None, None) => Err(LineError::NotConnected(up, down)),
            (Some(u), None) => {
                if u == self.sections.len() {
                    self.sections.push(Section::new(up, down, distance));
                    return Ok(());
                }
                // up -> down takes the front of the section leaving `up`
                let split = &self.sections[u];
                let rest = split.distance().subtract(distance)?;
                let remainder = Section::new(down.clone(), split.down().clone(), rest);
                self.sections[u] = remainder;
                self.sections.insert(u, Section::new(up, down, distance));
                Ok(())
            }
            (None, Some(d)) => {
                if d == 0 {
                    self.sections.insert(0, Section::new(up, down, distance));
                    return Ok(());
                }
                // up -> down takes the back of the section arriving at `down`
                let split = &self.sections[d - 1];
                let rest = split.distance().subtract(distance)?;
                let remainder = Section::new(split.up().clone(), up.clone(), rest);
                self.sections[d - 1] = remainder;
                self.sections.insert(d, Section::new(up, down, distance));
                Ok(())
            }
        }
    }

    /// Removes `station` from the line.
    ///
    /// A terminus takes its one section with it. An interior station's two
    /// sections are merged into one spanning both, with the summed distance.
    ///
    /// # Errors
    ///
    /// - [`LineError::StationNotOnLine`] if `station` is not on the line
    /// - [`LineError::LastSection`] if the line has a single section
    pub fn remove_section(&mut self, station: &Station) -> Result<(), LineError> {
        let at = self
            .position(station)
            .ok_or_else(|| LineError::StationNotOnLine(station.clone()))?;

        if self.sections.len() == 1 {
            return Err(LineError::LastSection);
        }

        if at == 0 {
            self.sections.remove(0);
        } else if at == self.sections.len() {
            self.sections.pop();
        } else {
            let next = self.sections.remove(at);
            let prev = &self.sections[at - 1];
            let merged = Section::new(
                prev.up().clone(),
                next.down().clone(),
                prev.distance().add(next.distance()),
            );
            self.sections[at - 1] = merged;
        }
        Ok(())
    }

    /// Index of `station` in up-to-down station order.
    fn position(&self, station: &Station) -> Option<usize> {
        self.stations().position(|s| s == station)
    }
}
