//! Group work on pendulum routes

use serde::{Deserialize, Serialize};

use super::{
    operation_time_or_half, schedule_two_leg, SingleLegFleet, TwoLegFleet, TwoLegRoute,
    TwoLegTiming,
};
use crate::model::{
    ExtraTrip, InputValues, RouteParameters, ShiftBudget, SlotResult, Throughput, TurnoverSchedule,
};
use crate::numeric::safe_divide;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyReturnFleetInput {
    pub route: RouteParameters,
    pub duty_time: f64,
    pub single_operation_time: f64,
}

impl EmptyReturnFleetInput {
    pub fn from_values(values: &InputValues) -> Self {
        Self {
            route: RouteParameters::from_values(values, "payload", "loadUnloadTime"),
            duty_time: values.number("dutyTime"),
            single_operation_time: values.number("singleOperationTime"),
        }
    }
}

/// Every vehicle runs its own loaded/empty trips; the remainder buys one
/// more trip when it covers the loaded leg with handling.
pub fn empty_return(input: &EmptyReturnFleetInput) -> SingleLegFleet {
    let route = &input.route;
    let outcome = route.trip_outcome();
    let essential_trip_time = route.essential_trip_time();
    let operation_time =
        operation_time_or_half(input.single_operation_time, route.load_unload_time);
    let throughput = Throughput::compute(outcome.trip_time, operation_time);
    let budget = ShiftBudget::new(input.duty_time, operation_time);

    let vehicles: Vec<SlotResult> = (1..=throughput.accepted)
        .map(|index| {
            let schedule = TurnoverSchedule::for_slot(&budget, index, outcome.trip_time);
            let trips = if schedule.remainder >= essential_trip_time {
                schedule.raw_turnovers.ceil() as u32
            } else {
                schedule.int_turnovers
            };
            let count = f64::from(trips);
            let total_distance = (route.zero_run1 + outcome.route_length * count + route.zero_run2
                - route.empty_distance)
                .max(0.0);
            SlotResult {
                index,
                trips,
                tonnage: outcome.tonnage_per_trip * count,
                ton_km: outcome.ton_km_per_trip * count,
                total_distance,
                actual_duty_time: safe_divide(total_distance, route.technical_speed)
                    + count * route.load_unload_time,
            }
        })
        .collect();
    let totals = vehicles.iter().collect();

    SingleLegFleet {
        route_length: outcome.route_length,
        trip_time: outcome.trip_time,
        essential_trip_time,
        operation_time,
        throughput,
        payload_per_trip: outcome.tonnage_per_trip,
        ton_km_per_trip: outcome.ton_km_per_trip,
        vehicles,
        totals,
    }
}

/// Return leg loaded over `lг₂` only, then `lх₂` empty (γ₁ = γ₂)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialLoadedFleetInput {
    pub payload: f64,
    pub load_factor: f64,
    pub duty_time: f64,
    pub load_unload_time: f64,
    pub loaded_distance1: f64,
    pub loaded_distance2: f64,
    pub zero_run1: f64,
    pub zero_run2: f64,
    pub zero_run3: f64,
    pub empty_distance2: f64,
    pub technical_speed: f64,
}

impl PartialLoadedFleetInput {
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
            empty_distance2: values.number("emptyDistance2"),
            technical_speed: values.number("technicalSpeed"),
        }
    }

    fn essential_trip_time(&self) -> f64 {
        safe_divide(self.loaded_distance2, self.technical_speed) + self.load_unload_time
    }
}

impl TwoLegRoute for PartialLoadedFleetInput {
    fn timing(&self) -> TwoLegTiming {
        let speed = self.technical_speed;
        let trip_time1 = safe_divide(self.loaded_distance1, speed) + self.load_unload_time;
        let trip_time2 = safe_divide(self.loaded_distance2 + self.empty_distance2, speed)
            + self.load_unload_time;
        let turnaround_time = trip_time1 + trip_time2;
        let payload_per_trip = self.payload * self.load_factor;
        TwoLegTiming {
            route_length: self.loaded_distance1 + self.loaded_distance2 + self.empty_distance2,
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

    fn extra_trip(&self, _timing: &TwoLegTiming, schedule: &TurnoverSchedule) -> ExtraTrip {
        if schedule.remainder >= self.essential_trip_time() {
            ExtraTrip::SecondLeg
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

/// Operation time is half the handling time
pub fn partial_loaded_return(input: &PartialLoadedFleetInput) -> TwoLegFleet {
    schedule_two_leg(input, input.duty_time, input.load_unload_time / 2.0)
}

/// Loaded in both directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadedReturnFleetInput {
    pub payload: f64,
    pub load_factor: f64,
    pub duty_time: f64,
    pub load_unload_time: f64,
    pub single_operation_time: f64,
    pub loaded_distance1: f64,
    pub loaded_distance2: f64,
    pub zero_run1: f64,
    pub zero_run2: f64,
    pub technical_speed: f64,
}

impl LoadedReturnFleetInput {
    pub fn from_values(values: &InputValues) -> Self {
        Self {
            payload: values.number("payload"),
            load_factor: values.number("loadFactor"),
            duty_time: values.number("dutyTime"),
            load_unload_time: values.number("loadUnloadTime"),
            single_operation_time: values.number("singleOperationTime"),
            loaded_distance1: values.number("loadedDistance1"),
            loaded_distance2: values.number("loadedDistance2"),
            zero_run1: values.number("zeroRun1"),
            zero_run2: values.number("zeroRun2"),
            technical_speed: values.number("technicalSpeed"),
        }
    }
}

impl TwoLegRoute for LoadedReturnFleetInput {
    fn timing(&self) -> TwoLegTiming {
        let speed = self.technical_speed;
        let trip_time1 = safe_divide(self.loaded_distance1, speed) + self.load_unload_time;
        let trip_time2 = safe_divide(self.loaded_distance2, speed) + self.load_unload_time;
        let turnaround_time = trip_time1 + trip_time2;
        let payload_per_trip = self.payload * self.load_factor;
        TwoLegTiming {
            route_length: self.loaded_distance1 + self.loaded_distance2,
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

    fn extra_trip(&self, timing: &TwoLegTiming, schedule: &TurnoverSchedule) -> ExtraTrip {
        // the return leg is the whole second trip here
        if schedule.remainder >= timing.trip_time2 {
            ExtraTrip::SecondLeg
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
        let (start, other) = if starts_at_first_point {
            (self.zero_run1, self.zero_run2)
        } else {
            (self.zero_run2, self.zero_run1)
        };
        let end = if whole_turn { start } else { other };
        start + turnover_distance + end
    }
}

pub fn loaded_return(input: &LoadedReturnFleetInput) -> TwoLegFleet {
    let operation_time =
        operation_time_or_half(input.single_operation_time, input.load_unload_time);
    schedule_two_leg(input, input.duty_time, operation_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    fn empty_return_input() -> EmptyReturnFleetInput {
        EmptyReturnFleetInput {
            route: RouteParameters {
                payload_capacity: 10.0,
                load_factor: 0.9,
                load_unload_time: 0.2,
                loaded_distance: 16.0,
                empty_distance: 16.0,
                zero_run1: 7.0,
                zero_run2: 11.0,
                technical_speed: 25.0,
            },
            duty_time: 10.0,
            single_operation_time: 0.1,
        }
    }

    #[test]
    fn test_empty_return_reference_scenario() {
        let fleet = empty_return(&empty_return_input());
        assert_eq!(fleet.route_length, 32.0);
        assert!(close(fleet.trip_time, 1.48));
        assert_eq!(fleet.payload_per_trip, 9.0);
        assert_eq!(fleet.throughput.accepted, 14);
        assert_eq!(fleet.vehicles.len(), 14);

        let trips: Vec<u32> = fleet.vehicles.iter().map(|v| v.trips).collect();
        assert_eq!(&trips[..3], &[7, 7, 7]);
        assert!(trips[3..].iter().all(|&t| t == 6));

        let first = &fleet.vehicles[0];
        assert_eq!(first.tonnage, 63.0);
        assert_eq!(first.ton_km, 1008.0);
        assert_eq!(first.total_distance, 226.0);
        assert!(close(first.actual_duty_time, 10.44));

        assert!(close(fleet.totals.tonnage, 783.0));
        assert!(close(fleet.totals.ton_km, 12528.0));
        assert!(close(fleet.totals.distance, 2812.0));
        assert!(close(fleet.totals.duty_time, 129.88));
    }

    #[test]
    fn test_empty_return_operation_time_fallback() {
        let fleet = empty_return(&EmptyReturnFleetInput {
            single_operation_time: 0.0,
            ..empty_return_input()
        });
        assert_eq!(fleet.operation_time, 0.1);
        assert_eq!(fleet.throughput.accepted, 14);
    }

    #[test]
    fn test_empty_return_idle_group_keeps_one_vehicle() {
        let mut input = empty_return_input();
        input.single_operation_time = 0.0;
        input.route.load_unload_time = 0.0;
        let fleet = empty_return(&input);
        assert_eq!(fleet.throughput.raw, 0.0);
        assert_eq!(fleet.vehicles.len(), 1);
    }

    fn partial_input() -> PartialLoadedFleetInput {
        PartialLoadedFleetInput {
            payload: 10.0,
            load_factor: 1.0,
            duty_time: 10.0,
            load_unload_time: 0.4,
            loaded_distance1: 16.0,
            loaded_distance2: 10.0,
            zero_run1: 13.0,
            zero_run2: 8.0,
            zero_run3: 6.0,
            empty_distance2: 5.0,
            technical_speed: 25.0,
        }
    }

    #[test]
    fn test_partial_loaded_groups_alternate() {
        let fleet = partial_loaded_return(&partial_input());
        assert_eq!(fleet.timing.route_length, 31.0);
        assert!(close(fleet.timing.turnaround_time, 2.04));
        assert_eq!(fleet.throughput_single.accepted, 10);
        assert_eq!(fleet.throughput_dual.accepted, 5);
        assert_eq!(fleet.groups.len(), 5);
        assert_eq!(fleet.vehicles.len(), 10);

        for group in &fleet.groups {
            assert_eq!(group.schedule.int_turnovers, 4);
            assert_eq!(group.extra, ExtraTrip::SecondLeg);
            assert_eq!((group.trips_leg1, group.trips_leg2), (4, 5));
            assert_eq!(group.tonnage, 90.0);
            assert_eq!(group.ton_km, 1140.0);
        }
        assert_eq!(fleet.groups[0].total_distance, 145.0);
        assert_eq!(fleet.groups[1].total_distance, 133.0);
        assert!(close(fleet.groups[0].actual_duty_time, 9.4));
        assert!(close(fleet.groups[1].actual_duty_time, 8.92));

        assert!(close(fleet.totals.tonnage, 450.0));
        assert!(close(fleet.totals.ton_km, 5700.0));
        assert!(close(fleet.totals.distance, 701.0));
        assert!(close(fleet.totals.duty_time, 46.04));
    }

    #[test]
    fn test_partial_loaded_whole_turn_closing() {
        let input = partial_input();
        assert_eq!(input.closing_distance(true, true, 124.0), 138.0);
        assert_eq!(input.closing_distance(false, true, 124.0), 140.0);
    }

    #[test]
    fn test_loaded_return_reference_scenario() {
        let fleet = loaded_return(&LoadedReturnFleetInput {
            payload: 10.0,
            load_factor: 0.9,
            duty_time: 10.0,
            load_unload_time: 0.2,
            single_operation_time: 0.1,
            loaded_distance1: 16.0,
            loaded_distance2: 16.0,
            zero_run1: 12.0,
            zero_run2: 9.0,
            technical_speed: 27.0,
        });
        assert_eq!(fleet.throughput_single.accepted, 15);
        assert_eq!(fleet.throughput_dual.accepted, 7);

        let trips: Vec<(u32, u32)> = fleet
            .groups
            .iter()
            .map(|g| (g.trips_leg1, g.trips_leg2))
            .collect();
        assert_eq!(trips[..5], [(6, 6); 5]);
        assert_eq!(trips[5..], [(5, 6); 2]);

        assert_eq!(fleet.groups[0].total_distance, 213.0);
        assert_eq!(fleet.groups[6].total_distance, 181.0);
        assert!(close(fleet.totals.tonnage, 738.0));
        assert!(close(fleet.totals.ton_km, 11808.0));
        assert!(close(fleet.totals.distance, 1427.0));
        assert_eq!(fleet.vehicles.len(), 14);
        assert_eq!(fleet.vehicles[13].index, 14);
    }
}
