//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;
use crate::path::PathFinder;

/// Shared application state.
///
/// Everything here is read-only once the server starts.
#[derive(Clone)]
pub struct AppState {
    /// Stations and lines
    pub network: Arc<Network>,

    /// Route search and tariff
    pub finder: Arc<PathFinder>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, finder: PathFinder) -> Self {
        Self {
            network: Arc::new(network),
            finder: Arc::new(finder),
        }
    }
}
