//! Shortest path search contract.

use crate::domain::{Distance, Station};

use super::graph::{EdgeIndex, RouteGraph, VertexIndex};

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Source and target are the same station
    #[error("source and target are the same station: {0}")]
    SameStation(Station),

    /// Station does not appear on any line
    #[error("station {0} is not on any line")]
    UnknownStation(Station),

    /// No sequence of sections joins the two stations
    #[error("stations {from} and {to} are not connected")]
    Disconnected { from: Station, to: Station },
}

/// A route through a [`RouteGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Visited vertices from source to target, no repeats.
    pub vertices: Vec<VertexIndex>,

    /// Sum of the edge distances.
    pub distance: Distance,

    /// Edges taken, `edges[i]` joining `vertices[i]` and `vertices[i + 1]`.
    pub edges: Vec<EdgeIndex>,
}

/// Trait for shortest path algorithms.
///
/// [`PathFinder`](super::PathFinder) only talks to this trait, so the
/// search can be swapped without touching callers.
pub trait ShortestPathFinder {
    /// Find a minimum-distance route from `source` to `target`.
    ///
    /// # Errors
    ///
    /// - [`PathError::SameStation`] if `source == target`
    /// - [`PathError::UnknownStation`] if either station is not in `graph`
    /// - [`PathError::Disconnected`] if no route exists
    fn find(
        &self,
        graph: &RouteGraph,
        source: &Station,
        target: &Station,
    ) -> Result<Route, PathError>;
}
