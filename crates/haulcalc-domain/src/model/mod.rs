//! Domain model types

pub mod inputs;
pub mod plan;
pub mod route;
pub mod schedule;

pub use inputs::InputValues;
pub use plan::{
    Plan, PlanInputs, PlanRow, PlanTotals, RouteDistances, TransportRequest, VehicleConfig,
};
pub use route::{RouteParameters, TripOutcome};
pub use schedule::{
    ExtraTrip, GroupSlot, ShiftBudget, ShiftTotals, SlotResult, Throughput, TurnoverSchedule,
    MAX_SLOTS,
};
