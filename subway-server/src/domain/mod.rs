//! Domain types for the subway route planner.
//!
//! This module contains the core domain model types that represent
//! validated network data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod age;
mod distance;
mod error;
mod line;
mod section;
mod station;

pub use age::{Age, InvalidAge};
pub use distance::{Distance, InvalidDistance};
pub use error::LineError;
pub use line::{Line, LineId};
pub use section::Section;
pub use station::{Station, StationId};
