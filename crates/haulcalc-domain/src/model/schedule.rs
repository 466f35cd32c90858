//! Value records produced by the fleet scheduling loop

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::numeric::{safe_divide, WHOLE_TURN_EPSILON};

/// Most vehicles or dispatch groups a throughput admits. Operation times
/// close to zero would otherwise ask for millions of rows.
pub const MAX_SLOTS: u32 = 1_000;

/// Duty time shared by a staggered group: slot `j` starts
/// `operation_time · (j − 1)` hours after the first one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftBudget {
    pub duty_time: f64,
    pub operation_time: f64,
}

impl ShiftBudget {
    pub fn new(duty_time: f64, operation_time: f64) -> Self {
        Self {
            duty_time,
            operation_time,
        }
    }

    /// Time left for 1-based `slot` before flooring; may be negative
    pub fn available_time(&self, slot: u32) -> f64 {
        self.duty_time - self.operation_time * f64::from(slot.saturating_sub(1))
    }

    pub fn bounded_time(&self, slot: u32) -> f64 {
        self.available_time(slot).max(0.0)
    }
}

/// How many slots an operation of `operation_time` lets through in `window`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Throughput {
    pub raw: f64,
    pub accepted: u32,
}

impl Throughput {
    /// `floor(window / operation_time)` kept within `1..=MAX_SLOTS`; raw
    /// is 0 for a non-positive operation time
    pub fn compute(window: f64, operation_time: f64) -> Self {
        let raw = if operation_time > 0.0 {
            safe_divide(window, operation_time)
        } else {
            0.0
        };
        Self {
            raw,
            accepted: raw.floor().clamp(1.0, f64::from(MAX_SLOTS)) as u32,
        }
    }

    /// The raw throughput exceeded `MAX_SLOTS` and was cut
    pub fn is_capped(&self) -> bool {
        self.raw.floor() > f64::from(MAX_SLOTS)
    }
}

/// Whole turnovers a slot fits into its available time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnoverSchedule {
    pub available_time: f64,
    pub raw_turnovers: f64,
    pub int_turnovers: u32,
    pub remainder: f64,
}

impl TurnoverSchedule {
    pub fn for_slot(budget: &ShiftBudget, slot: u32, cycle_time: f64) -> Self {
        let available_time = budget.available_time(slot);
        let bounded = available_time.max(0.0);
        let raw_turnovers = safe_divide(bounded, cycle_time);
        let whole = raw_turnovers.floor();
        Self {
            available_time,
            raw_turnovers,
            int_turnovers: whole as u32,
            remainder: bounded - whole * cycle_time,
        }
    }

    /// Turnover count is an integer within `WHOLE_TURN_EPSILON`
    pub fn is_whole_turn(&self) -> bool {
        let fraction = self.raw_turnovers - f64::from(self.int_turnovers);
        fraction.abs() < WHOLE_TURN_EPSILON
    }
}

/// Which legs get one more trip out of the remainder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraTrip {
    #[default]
    None,
    FirstLeg,
    SecondLeg,
    BothLegs,
}

impl ExtraTrip {
    pub fn first_leg(self) -> u32 {
        u32::from(matches!(self, ExtraTrip::FirstLeg | ExtraTrip::BothLegs))
    }

    pub fn second_leg(self) -> u32 {
        u32::from(matches!(self, ExtraTrip::SecondLeg | ExtraTrip::BothLegs))
    }
}

/// Per dispatch group on a two-leg route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupSlot {
    pub index: u32,
    pub schedule: TurnoverSchedule,
    pub extra: ExtraTrip,
    pub trips_leg1: u32,
    pub trips_leg2: u32,
    pub total_trips: u32,
    pub tonnage: f64,
    pub ton_km: f64,
    pub total_distance: f64,
    pub actual_duty_time: f64,
}

/// One vehicle's shift
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotResult {
    pub index: u32,
    pub trips: u32,
    pub tonnage: f64,
    pub ton_km: f64,
    pub total_distance: f64,
    pub actual_duty_time: f64,
}

/// Shift-level sums
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftTotals {
    pub tonnage: f64,
    pub ton_km: f64,
    pub distance: f64,
    pub duty_time: f64,
}

impl AddAssign<&SlotResult> for ShiftTotals {
    fn add_assign(&mut self, slot: &SlotResult) {
        self.tonnage += slot.tonnage;
        self.ton_km += slot.ton_km;
        self.distance += slot.total_distance;
        self.duty_time += slot.actual_duty_time;
    }
}

impl AddAssign<&GroupSlot> for ShiftTotals {
    fn add_assign(&mut self, group: &GroupSlot) {
        self.tonnage += group.tonnage;
        self.ton_km += group.ton_km;
        self.distance += group.total_distance;
        self.duty_time += group.actual_duty_time;
    }
}

impl<'a> FromIterator<&'a SlotResult> for ShiftTotals {
    fn from_iter<T: IntoIterator<Item = &'a SlotResult>>(iter: T) -> Self {
        let mut totals = ShiftTotals::default();
        for slot in iter {
            totals += slot;
        }
        totals
    }
}

impl<'a> FromIterator<&'a GroupSlot> for ShiftTotals {
    fn from_iter<T: IntoIterator<Item = &'a GroupSlot>>(iter: T) -> Self {
        let mut totals = ShiftTotals::default();
        for group in iter {
            totals += group;
        }
        totals
    }
}
