//! Subway route planner server.
//!
//! Loads a subway network, finds the shortest path between two stations
//! and prices the trip by distance, line surcharge and passenger age.

pub mod config;
pub mod domain;
pub mod fare;
pub mod network;
pub mod path;
pub mod web;
