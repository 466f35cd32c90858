//! Domain services

pub mod cycle;
pub mod fleet;
pub mod fleet_summary;
pub mod planning;
pub mod route;

pub use planning::calculate_plan;
pub use route::{decide_extra_trip, TripDecision};
