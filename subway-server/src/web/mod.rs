//! Web layer for the subway route planner.
//!
//! Provides HTTP endpoints for listing the network and finding paths.

mod dto;
mod routes;
mod shutdown;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use shutdown::shutdown_signal;
pub use state::AppState;
