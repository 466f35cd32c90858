//! Group work on a ring with two loading points

use serde::{Deserialize, Serialize};

use super::{schedule_two_leg, TwoLegFleet, TwoLegRoute, TwoLegTiming};
use crate::model::{ExtraTrip, InputValues, TurnoverSchedule};
use crate::numeric::safe_divide;

/// Slack added to the remainder before comparing it with trip times
pub const REMAINDER_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RingFleetInput {
    pub payload: f64,
    pub load_factor: f64,
    pub duty_time: f64,
    pub load_unload_time: f64,
    pub loaded_distance1: f64,
    pub loaded_distance2: f64,
    pub zero_run1: f64,
    pub zero_run2: f64,
    pub zero_run3: f64,
    pub empty_distance1: f64,
    pub empty_distance2: f64,
    pub technical_speed: f64,
    /// Longest single operation (Rmax); taken as given, no fallback
    pub single_operation_time: f64,
}

impl RingFleetInput {
    pub fn from_values(values: &InputValues) -> Self {
        Self {
            payload: values.number("payload"),
            load_factor: values.number("loadFactor"),
            duty_time: values.number("dutyTime"),
            load_unload_time: values.number("loadUnloadTime"),
            loaded_distance1: values.number("loadedDistance1"),
            loaded_distance2: values.number("loadedDistance2"),
            zero_run1: values.number("zeroRun1"),
            zero_run2: values.number("zeroRun2"),
            zero_run3: values.number("zeroRun3"),
            empty_distance1: values.number("emptyDistance1"),
            empty_distance2: values.number("emptyDistance2"),
            technical_speed: values.number("technicalSpeed"),
            single_operation_time: values.number("singleOperationTime"),
        }
    }
}

impl TwoLegRoute for RingFleetInput {
    fn timing(&self) -> TwoLegTiming {
        let speed = self.technical_speed;
        let trip_time1 = safe_divide(self.loaded_distance1 + self.empty_distance1, speed)
            + self.load_unload_time;
        let trip_time2 = safe_divide(self.loaded_distance2 + self.empty_distance2, speed)
            + self.load_unload_time;
        let turnaround_time = trip_time1 + trip_time2;
        let payload_per_trip = self.payload * self.load_factor;
        TwoLegTiming {
            route_length: self.loaded_distance1
                + self.empty_distance1
                + self.loaded_distance2
                + self.empty_distance2,
            trip_time1,
            trip_time2,
            turnaround_time,
            avg_trip_time: safe_divide(turnaround_time, 2.0),
            payload_per_trip1: payload_per_trip,
            payload_per_trip2: payload_per_trip,
            ton_km_trip1: payload_per_trip * self.loaded_distance1,
            ton_km_trip2: payload_per_trip * self.loaded_distance2,
        }
    }

    fn technical_speed(&self) -> f64 {
        self.technical_speed
    }

    fn load_unload_time(&self) -> f64 {
        self.load_unload_time
    }

    /// Both legs if the remainder fits a whole turnaround, else the first
    /// leg if it fits that trip alone
    fn extra_trip(&self, timing: &TwoLegTiming, schedule: &TurnoverSchedule) -> ExtraTrip {
        let remainder = schedule.remainder + REMAINDER_TOLERANCE;
        if remainder >= timing.trip_time1 + timing.trip_time2 {
            ExtraTrip::BothLegs
        } else if remainder >= timing.trip_time1 {
            ExtraTrip::FirstLeg
        } else {
            ExtraTrip::None
        }
    }

    fn closing_distance(
        &self,
        starts_at_first_point: bool,
        whole_turn: bool,
        turnover_distance: f64,
    ) -> f64 {
        match (starts_at_first_point, whole_turn) {
            (true, true) => {
                self.zero_run1 + turnover_distance + self.zero_run3 - self.empty_distance2
            }
            (true, false) => self.zero_run1 + turnover_distance + self.zero_run2,
            (false, true) => self.zero_run2 + turnover_distance + self.zero_run2,
            (false, false) => {
                self.zero_run2 + turnover_distance + self.zero_run3 - self.empty_distance2
            }
        }
    }
}

pub fn ring_route(input: &RingFleetInput) -> TwoLegFleet {
    schedule_two_leg(input, input.duty_time, input.single_operation_time)
}
