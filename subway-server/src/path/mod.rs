//! Shortest path search over the subway network.
//!
//! Lines are flattened into a weighted graph, searched with a pluggable
//! [`ShortestPathFinder`] (Dijkstra by default), and the winning route is
//! priced with the fare tariff.

mod dijkstra;
mod exhaustive;
mod finder;
mod graph;
mod strategy;

pub use dijkstra::Dijkstra;
pub use exhaustive::Exhaustive;
pub use finder::{Path, PathFinder};
pub use graph::{Edge, EdgeIndex, RouteGraph, VertexIndex};
pub use strategy::{PathError, Route, ShortestPathFinder};
