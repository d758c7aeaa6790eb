//! Exhaustive simple-path search.
//!
//! Enumerates every simple path between the two stations and keeps the
//! shortest. Exponential in the worst case, so only suitable for small
//! networks; it exists mainly to cross-check [`Dijkstra`](super::Dijkstra).

use crate::domain::{Distance, Station};

use super::graph::{EdgeIndex, RouteGraph, VertexIndex};
use super::strategy::{PathError, Route, ShortestPathFinder};

/// Depth-first enumeration of all simple paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exhaustive;

/// Mutable state for one depth-first walk.
struct Walk<'g> {
    graph: &'g RouteGraph,
    target: VertexIndex,
    on_path: Vec<bool>,
    vertices: Vec<VertexIndex>,
    edges: Vec<EdgeIndex>,
    best: Option<Route>,
}

impl Walk<'_> {
    fn visit(&mut self, v: VertexIndex, dist: Distance) {
        if v == self.target {
            if self.best.as_ref().is_none_or(|b| dist < b.distance) {
                self.best = Some(Route {
                    vertices: self.vertices.clone(),
                    distance: dist,
                    edges: self.edges.clone(),
                });
            }
            return;
        }

        let graph = self.graph;
        for (e, edge) in graph.edges_from(v) {
            let next = edge.other(v);
            if self.on_path[next.0] {
                continue;
            }
            self.on_path[next.0] = true;
            self.vertices.push(next);
            self.edges.push(e);

            self.visit(next, dist.add(edge.distance));

            self.edges.pop();
            self.vertices.pop();
            self.on_path[next.0] = false;
        }
    }
}

impl ShortestPathFinder for Exhaustive {
    fn find(
        &self,
        graph: &RouteGraph,
        source: &Station,
        target: &Station,
    ) -> Result<Route, PathError> {
        let (s, t) = graph.endpoints(source, target)?;

        let mut walk = Walk {
            graph,
            target: t,
            on_path: vec![false; graph.vertex_count()],
            vertices: vec![s],
            edges: Vec::new(),
            best: None,
        };
        walk.on_path[s.0] = true;
        walk.visit(s, Distance::zero());

        walk.best.ok_or_else(|| PathError::Disconnected {
            from: source.clone(),
            to: target.clone(),
        })
    }
}
