//! Weighted route graph built from lines.
//!
//! The graph is rebuilt for every query from whatever lines the caller
//! hands in, so it is never edited after construction.

use std::collections::HashMap;

use crate::domain::{Distance, Line, LineId, Station, StationId};

use super::strategy::PathError;

/// Position of a station in a [`RouteGraph`].
///
/// Only meaningful for the graph that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexIndex(pub usize);

/// Position of an edge in a [`RouteGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeIndex(pub usize);

/// One section of one line, as an undirected edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub a: VertexIndex,
    pub b: VertexIndex,
    pub distance: Distance,
    /// Line that owns the section.
    pub line: LineId,
    /// Surcharge of the owning line.
    pub surcharge: u32,
}

impl Edge {
    /// The endpoint that is not `from`.
    pub fn other(&self, from: VertexIndex) -> VertexIndex {
        if self.a == from { self.b } else { self.a }
    }
}

/// Undirected multigraph of every section on every line.
///
/// Two lines running between the same pair of stations contribute two
/// parallel edges; both are kept so the search can pick either.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    stations: Vec<Station>,
    index: HashMap<StationId, VertexIndex>,
    edges: Vec<Edge>,
    /// For each vertex, the edges touching it in insertion order.
    adjacency: Vec<Vec<EdgeIndex>>,
}

impl RouteGraph {
    /// Flatten `lines` into a single graph.
    ///
    /// Vertices are added in the order stations are first seen (line order,
    /// then up-to-down along each line) and edges in section order, so the
    /// same input always yields the same graph.
    pub fn build<'a>(lines: impl IntoIterator<Item = &'a Line>) -> Self {
        let mut graph = Self::default();
        for line in lines {
            for section in line.sections() {
                let a = graph.add_vertex(section.up());
                let b = graph.add_vertex(section.down());
                let edge = EdgeIndex(graph.edges.len());
                graph.edges.push(Edge {
                    a,
                    b,
                    distance: section.distance(),
                    line: line.id(),
                    surcharge: line.surcharge(),
                });
                graph.adjacency[a.0].push(edge);
                graph.adjacency[b.0].push(edge);
            }
        }
        graph
    }

    fn add_vertex(&mut self, station: &Station) -> VertexIndex {
        if let Some(&v) = self.index.get(&station.id()) {
            return v;
        }
        let v = VertexIndex(self.stations.len());
        self.stations.push(station.clone());
        self.index.insert(station.id(), v);
        self.adjacency.push(Vec::new());
        v
    }

    /// Looks up the vertex for a station.
    pub fn vertex(&self, station: &Station) -> Option<VertexIndex> {
        self.index.get(&station.id()).copied()
    }

    /// Resolves both ends of a query.
    ///
    /// The same-station check runs first so it fires even for stations
    /// the graph has never heard of.
    pub fn endpoints(
        &self,
        source: &Station,
        target: &Station,
    ) -> Result<(VertexIndex, VertexIndex), PathError> {
        if source == target {
            return Err(PathError::SameStation(source.clone()));
        }
        let s = self
            .vertex(source)
            .ok_or_else(|| PathError::UnknownStation(source.clone()))?;
        let t = self
            .vertex(target)
            .ok_or_else(|| PathError::UnknownStation(target.clone()))?;
        Ok((s, t))
    }

    pub fn station(&self, v: VertexIndex) -> &Station {
        &self.stations[v.0]
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn edge(&self, e: EdgeIndex) -> &Edge {
        &self.edges[e.0]
    }

    /// Edges touching `v`, each paired with its index.
    pub fn edges_from(&self, v: VertexIndex) -> impl Iterator<Item = (EdgeIndex, &Edge)> + '_ {
        self.adjacency[v.0].iter().map(|&e| (e, &self.edges[e.0]))
    }

    pub fn vertex_count(&self) -> usize {
        self.stations.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
