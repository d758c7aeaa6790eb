//! Dijkstra's algorithm over the route graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::domain::{Distance, Station};

use super::graph::{EdgeIndex, RouteGraph, VertexIndex};
use super::strategy::{PathError, Route, ShortestPathFinder};

/// Single-source Dijkstra that stops as soon as the target is settled.
///
/// Section distances are always positive, so a vertex's distance is final
/// the first time it leaves the frontier. Stale frontier entries are
/// skipped on pop instead of being decreased in place.
///
/// When two routes tie, the one found first wins: relaxation only replaces
/// a tentative distance with a strictly smaller one, and edges are scanned
/// in the order lines were passed to [`RouteGraph::build`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl ShortestPathFinder for Dijkstra {
    fn find(
        &self,
        graph: &RouteGraph,
        source: &Station,
        target: &Station,
    ) -> Result<Route, PathError> {
        let (s, t) = graph.endpoints(source, target)?;
        let n = graph.vertex_count();

        // None is "not reached yet"
        let mut best: Vec<Option<Distance>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut via: Vec<Option<(VertexIndex, EdgeIndex)>> = vec![None; n];
        let mut frontier = BinaryHeap::new();

        best[s.0] = Some(Distance::zero());
        frontier.push(Reverse((Distance::zero(), s)));

        let mut settled_count = 0usize;
        while let Some(Reverse((dist, v))) = frontier.pop() {
            if settled[v.0] {
                continue;
            }
            settled[v.0] = true;
            settled_count += 1;

            trace!(station = %graph.station(v), distance = dist.value(), "settled");

            if v == t {
                break;
            }

            for (e, edge) in graph.edges_from(v) {
                let next = edge.other(v);
                if settled[next.0] {
                    continue;
                }
                let candidate = dist.add(edge.distance);
                if best[next.0].is_none_or(|current| candidate < current) {
                    best[next.0] = Some(candidate);
                    via[next.0] = Some((v, e));
                    frontier.push(Reverse((candidate, next)));
                }
            }
        }

        debug!(
            from = %source,
            to = %target,
            settled = settled_count,
            vertices = n,
            "dijkstra finished"
        );

        let distance = match best[t.0] {
            Some(d) if settled[t.0] => d,
            _ => {
                return Err(PathError::Disconnected {
                    from: source.clone(),
                    to: target.clone(),
                });
            }
        };

        // Walk the predecessor links back from the target
        let mut vertices = vec![t];
        let mut edges = Vec::new();
        let mut cursor = t;
        while let Some((prev, e)) = via[cursor.0] {
            vertices.push(prev);
            edges.push(e);
            cursor = prev;
        }
        vertices.reverse();
        edges.reverse();

        Ok(Route {
            vertices,
            distance,
            edges,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, LineId, StationId};

    fn station(id: u64) -> Station {
        Station::new(StationId::new(id), format!("S{id}"))
    }

    fn line(id: u64, surcharge: u32, up: u64, down: u64, km: i64) -> Line {
        Line::new(
            LineId::new(id),
            format!("L{id}"),
            "c",
            surcharge,
            station(up),
            station(down),
            Distance::new(km).unwrap(),
        )
        .unwrap()
    }

    fn ids(graph: &RouteGraph, route: &Route) -> Vec<u64> {
        route
            .vertices
            .iter()
            .map(|&v| graph.station(v).id().get())
            .collect()
    }

    #[test]
    fn single_edge() {
        let lines = [line(1, 0, 1, 2, 7)];
        let graph = RouteGraph::build(&lines);
        let route = Dijkstra.find(&graph, &station(1), &station(2)).unwrap();
        assert_eq!(ids(&graph, &route), vec![1, 2]);
        assert_eq!(route.distance.value(), 7);
        assert_eq!(route.edges, vec![EdgeIndex(0)]);
    }

    #[test]
    fn travels_against_section_direction() {
        let lines = [line(1, 0, 1, 2, 7)];
        let graph = RouteGraph::build(&lines);
        let route = Dijkstra.find(&graph, &station(2), &station(1)).unwrap();
        assert_eq!(ids(&graph, &route), vec![2, 1]);
        assert_eq!(route.distance.value(), 7);
    }

    #[test]
    fn prefers_more_stops_when_shorter() {
        // 1 -(10)- 2 directly, or 1 -(3)- 3 -(3)- 2
        let lines = [line(1, 0, 1, 2, 10), line(2, 0, 1, 3, 3), line(3, 0, 3, 2, 3)];
        let graph = RouteGraph::build(&lines);
        let route = Dijkstra.find(&graph, &station(1), &station(2)).unwrap();
        assert_eq!(ids(&graph, &route), vec![1, 3, 2]);
        assert_eq!(route.distance.value(), 6);
        assert_eq!(route.edges.len(), 2);
    }

    #[test]
    fn picks_shorter_parallel_edge() {
        let lines = [line(1, 0, 1, 2, 10), line(2, 500, 2, 1, 4)];
        let graph = RouteGraph::build(&lines);
        let route = Dijkstra.find(&graph, &station(1), &station(2)).unwrap();
        assert_eq!(route.distance.value(), 4);
        assert_eq!(graph.edge(route.edges[0]).line, LineId::new(2));
    }

    #[test]
    fn equal_parallel_edges_keep_first_line() {
        let lines = [line(1, 0, 1, 2, 5), line(2, 500, 1, 2, 5)];
        let graph = RouteGraph::build(&lines);
        let route = Dijkstra.find(&graph, &station(1), &station(2)).unwrap();
        assert_eq!(graph.edge(route.edges[0]).line, LineId::new(1));
    }

    #[test]
    fn long_routes_compare_exactly() {
        let max = u32::MAX as i64;
        // 1 -(max)- 2 -(max)- 4 against 1 -(max)- 3 -(max - 1)- 4
        let lines = [
            line(1, 0, 1, 2, max),
            line(2, 0, 2, 4, max),
            line(3, 0, 1, 3, max),
            line(4, 0, 3, 4, max - 1),
        ];
        let graph = RouteGraph::build(&lines);
        let route = Dijkstra.find(&graph, &station(1), &station(4)).unwrap();
        assert_eq!(ids(&graph, &route), vec![1, 3, 4]);
        assert_eq!(route.distance.value(), 2 * u64::from(u32::MAX) - 1);
    }

    #[test]
    fn same_station() {
        let lines = [line(1, 0, 1, 2, 7)];
        let graph = RouteGraph::build(&lines);
        assert_eq!(
            Dijkstra.find(&graph, &station(1), &station(1)),
            Err(PathError::SameStation(station(1)))
        );
    }

    #[test]
    fn unknown_station() {
        let lines = [line(1, 0, 1, 2, 7)];
        let graph = RouteGraph::build(&lines);
        assert_eq!(
            Dijkstra.find(&graph, &station(1), &station(3)),
            Err(PathError::UnknownStation(station(3)))
        );
    }

    #[test]
    fn disconnected() {
        let lines = [line(1, 0, 1, 2, 7), line(2, 0, 3, 4, 5)];
        let graph = RouteGraph::build(&lines);
        assert_eq!(
            Dijkstra.find(&graph, &station(1), &station(4)),
            Err(PathError::Disconnected {
                from: station(1),
                to: station(4),
            })
        );
    }
}
