//! Fare calculation.
//!
//! The distance tariff plus the most expensive line surcharge gives the
//! fare of a route. Age discounts are a separate step on top of that.

mod discount;
mod policy;

pub use discount::{AgeGroup, discounted_fare};
pub use policy::{FarePolicy, fare};
