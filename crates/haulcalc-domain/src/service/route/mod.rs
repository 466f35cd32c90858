//! Single-vehicle route calculators
//!
//! Every route shares one decision: after the whole trips (or turnarounds)
//! that fit into the shift, the leftover time buys one more trip only if
//! it covers at least the mandatory loaded leg.

pub mod delivery;
pub mod pendulum;
pub mod ring;

use serde::{Deserialize, Serialize};

use crate::numeric::safe_divide;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripDecision {
    /// `shift / cycle_time`
    pub theoretical: f64,
    pub whole: u32,
    /// Time left after the whole cycles
    pub delta_time: f64,
    /// Time the extra trip needs
    pub required_time: f64,
    pub extra: bool,
}

impl TripDecision {
    pub fn actual_trips(&self) -> u32 {
        self.whole + u32::from(self.extra)
    }

    /// Cycles actually driven, counting an extra trip as half a turnaround
    pub fn actual_turns(&self) -> f64 {
        f64::from(self.whole) + if self.extra { 0.5 } else { 0.0 }
    }

    pub fn verdict(&self) -> &'static str {
        if self.extra {
            "выполнима"
        } else {
            "не выполнима"
        }
    }
}

/// Decide whether the remainder of `shift_duration` after whole cycles of
/// `cycle_time` fits one more trip needing `required_time`.
///
/// A non-positive speed never grants the extra trip.
pub fn decide_extra_trip(
    shift_duration: f64,
    cycle_time: f64,
    required_time: f64,
    technical_speed: f64,
) -> TripDecision {
    let theoretical = safe_divide(shift_duration, cycle_time);
    let whole = theoretical.max(0.0).floor();
    let delta_time = shift_duration - whole * cycle_time;
    TripDecision {
        theoretical,
        whole: whole as u32,
        delta_time,
        required_time,
        extra: technical_speed > 0.0 && delta_time >= required_time,
    }
}
