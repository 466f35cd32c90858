//! Pendulum (there-and-back) routes for one vehicle

use serde::{Deserialize, Serialize};

use super::{decide_extra_trip, TripDecision};
use crate::model::{InputValues, RouteParameters};
use crate::numeric::safe_divide;

/// Pendulum with an empty return leg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmptyReturnShift {
    pub route_length: f64,
    pub trip_time: f64,
    pub tonnage_per_trip: f64,
    pub ton_km_per_trip: f64,
    pub decision: TripDecision,
    pub actual_trips: u32,
    pub total_tonnage: f64,
    pub total_ton_km: f64,
    pub total_distance: f64,
    pub actual_shift_time: f64,
    pub beta_trip: f64,
    pub beta_day: f64,
}

pub fn empty_return(route: &RouteParameters, shift_duration: f64) -> EmptyReturnShift {
    let outcome = route.trip_outcome();
    let decision = decide_extra_trip(
        shift_duration,
        outcome.trip_time,
        route.essential_trip_time(),
        route.technical_speed,
    );
    let actual_trips = decision.actual_trips();
    let trips = f64::from(actual_trips);

    let distance_base = route.zero_run1 + outcome.route_length * trips + route.zero_run2;
    let closing = if actual_trips > 0 { route.empty_distance } else { 0.0 };
    let total_distance = (distance_base - closing).max(0.0);

    EmptyReturnShift {
        route_length: outcome.route_length,
        trip_time: outcome.trip_time,
        tonnage_per_trip: outcome.tonnage_per_trip,
        ton_km_per_trip: outcome.ton_km_per_trip,
        decision,
        actual_trips,
        total_tonnage: outcome.tonnage_per_trip * trips,
        total_ton_km: outcome.ton_km_per_trip * trips,
        total_distance,
        actual_shift_time: safe_divide(total_distance, route.technical_speed)
            + route.load_unload_time * trips,
        beta_trip: safe_divide(route.loaded_distance, outcome.route_length),
        beta_day: safe_divide(route.loaded_distance * trips, total_distance),
    }
}

/// Shift results of a route driven as two trips per turnaround
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnaroundShift {
    pub route_length: f64,
    pub first_trip_time: f64,
    pub second_trip_time: f64,
    pub cycle_time: f64,
    pub tonnage_first_trip: f64,
    pub tonnage_second_trip: f64,
    pub tonnage_per_cycle: f64,
    pub ton_km_first_trip: f64,
    pub ton_km_second_trip: f64,
    pub ton_km_per_cycle: f64,
    pub decision: TripDecision,
    pub trips_first: u32,
    pub trips_second: u32,
    pub total_trips: u32,
    pub actual_turns: f64,
    pub total_tonnage: f64,
    pub total_ton_km: f64,
    pub total_distance: f64,
    pub actual_shift_time: f64,
    pub beta_day: f64,
}

/// Pendulum whose return leg carries cargo over part of the distance (γ₁ = γ₂)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialLoadedInput {
    pub payload_capacity: f64,
    pub load_factor: f64,
    pub shift_duration: f64,
    pub service_time: f64,
    pub forward_distance: f64,
    pub return_distance: f64,
    pub zero_run1: f64,
    pub zero_run2: f64,
    pub zero_run3: f64,
    pub empty_distance: f64,
    pub technical_speed: f64,
}

impl PartialLoadedInput {
    pub fn from_values(values: &InputValues) -> Self {
        Self {
            payload_capacity: values.number("payloadCapacity"),
            load_factor: values.number("loadFactor"),
            shift_duration: values.number("shiftDuration"),
            service_time: values.number("serviceTime"),
            forward_distance: values.number("forwardDistance"),
            return_distance: values.number("returnDistance"),
            zero_run1: values.number("zeroRun1"),
            zero_run2: values.number("zeroRun2"),
            zero_run3: values.number("zeroRun3"),
            empty_distance: values.number("emptyDistance"),
            technical_speed: values.number("technicalSpeed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartialLoadedShift {
    pub shift: TurnaroundShift,
    pub beta_second_trip: f64,
    pub beta_cycle: f64,
}

pub fn partial_loaded(input: &PartialLoadedInput) -> PartialLoadedShift {
    let speed = input.technical_speed;
    let route_length = input.forward_distance + input.return_distance + input.empty_distance;
    let first_trip_time = safe_divide(input.forward_distance, speed) + input.service_time;
    let second_trip_time =
        safe_divide(input.return_distance + input.empty_distance, speed) + input.service_time;
    let cycle_time = first_trip_time + second_trip_time;

    let tonnage_per_trip = input.payload_capacity * input.load_factor;
    let ton_km_first_trip = input.payload_capacity * input.load_factor * input.forward_distance;
    let ton_km_second_trip = input.payload_capacity * input.load_factor * input.return_distance;

    let required_time = safe_divide(input.forward_distance, speed) + input.service_time;
    let decision = decide_extra_trip(input.shift_duration, cycle_time, required_time, speed);

    let trips_first = decision.actual_trips();
    let trips_second = decision.whole;
    let total_trips = trips_first + trips_second;
    let actual_turns = decision.actual_turns();

    let total_ton_km = input.payload_capacity
        * input.load_factor
        * (f64::from(trips_first) * input.forward_distance
            + f64::from(trips_second) * input.return_distance);

    let distance_base = input.zero_run1 + route_length * actual_turns;
    let total_distance = if decision.extra {
        distance_base + input.zero_run2
    } else {
        distance_base + input.zero_run3 - input.empty_distance
    };

    let shift = TurnaroundShift {
        route_length,
        first_trip_time,
        second_trip_time,
        cycle_time,
        tonnage_first_trip: tonnage_per_trip,
        tonnage_second_trip: tonnage_per_trip,
        tonnage_per_cycle: tonnage_per_trip * 2.0,
        ton_km_first_trip,
        ton_km_second_trip,
        ton_km_per_cycle: ton_km_first_trip + ton_km_second_trip,
        decision,
        trips_first,
        trips_second,
        total_trips,
        actual_turns,
        total_tonnage: tonnage_per_trip * f64::from(total_trips),
        total_ton_km,
        total_distance,
        actual_shift_time: safe_divide(total_distance, speed)
            + input.service_time * f64::from(total_trips),
        beta_day: safe_divide(
            input.forward_distance * f64::from(trips_first)
                + input.return_distance * f64::from(trips_second),
            total_distance,
        ),
    };

    PartialLoadedShift {
        shift,
        beta_second_trip: safe_divide(
            input.return_distance,
            input.return_distance + input.empty_distance,
        ),
        beta_cycle: safe_divide(input.forward_distance + input.return_distance, route_length),
    }
}

/// Pendulum loaded both ways with different load factors (γ₁ ≠ γ₂)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UnequalLoadInput {
    pub payload_capacity: f64,
    pub load_factor_forward: f64,
    pub load_factor_return: f64,
    pub shift_duration: f64,
    pub service_time: f64,
    pub forward_distance: f64,
    pub return_distance: f64,
    pub zero_run1: f64,
    pub zero_run2: f64,
    pub technical_speed: f64,
}

impl UnequalLoadInput {
    pub fn from_values(values: &InputValues) -> Self {
        Self {
            payload_capacity: values.number("payloadCapacity"),
            load_factor_forward: values.number("loadFactorForward"),
            load_factor_return: values.number("loadFactorReturn"),
            shift_duration: values.number("shiftDuration"),
            service_time: values.number("serviceTime"),
            forward_distance: values.number("forwardDistance"),
            return_distance: values.number("returnDistance"),
            zero_run1: values.number("zeroRun1"),
            zero_run2: values.number("zeroRun2"),
            technical_speed: values.number("technicalSpeed"),
        }
    }
}

pub fn unequal_load(input: &UnequalLoadInput) -> TurnaroundShift {
    let speed = input.technical_speed;
    let route_length = input.forward_distance + input.return_distance;
    let first_trip_time = safe_divide(input.forward_distance, speed) + input.service_time;
    let second_trip_time = safe_divide(input.return_distance, speed) + input.service_time;
    let cycle_time = first_trip_time + second_trip_time;

    let tonnage_first_trip = input.payload_capacity * input.load_factor_forward;
    let tonnage_second_trip = input.payload_capacity * input.load_factor_return;
    let ton_km_first_trip = tonnage_first_trip * input.forward_distance;
    let ton_km_second_trip = tonnage_second_trip * input.return_distance;

    let required_time = safe_divide(input.forward_distance, speed) + input.service_time;
    let decision = decide_extra_trip(input.shift_duration, cycle_time, required_time, speed);

    let trips_first = decision.actual_trips();
    let trips_second = decision.whole;
    let total_trips = trips_first + trips_second;
    let actual_turns = decision.actual_turns();

    let distance_base = route_length * actual_turns;
    let closing = if decision.extra {
        input.zero_run2
    } else {
        input.zero_run1
    };
    let total_distance = input.zero_run1 + distance_base + closing;

    TurnaroundShift {
        route_length,
        first_trip_time,
        second_trip_time,
        cycle_time,
        tonnage_first_trip,
        tonnage_second_trip,
        tonnage_per_cycle: tonnage_first_trip + tonnage_second_trip,
        ton_km_first_trip,
        ton_km_second_trip,
        ton_km_per_cycle: ton_km_first_trip + ton_km_second_trip,
        decision,
        trips_first,
        trips_second,
        total_trips,
        actual_turns,
        total_tonnage: tonnage_first_trip * f64::from(trips_first)
            + tonnage_second_trip * f64::from(trips_second),
        total_ton_km: ton_km_first_trip * f64::from(trips_first)
            + ton_km_second_trip * f64::from(trips_second),
        total_distance,
        actual_shift_time: safe_divide(total_distance, speed)
            + input.service_time * f64::from(total_trips),
        beta_day: safe_divide(
            input.forward_distance * f64::from(trips_first)
                + input.return_distance * f64::from(trips_second),
            total_distance,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_route() -> RouteParameters {
        RouteParameters {
            payload_capacity: 10.0,
            load_factor: 0.9,
            load_unload_time: 0.2,
            loaded_distance: 16.0,
            empty_distance: 16.0,
            zero_run1: 7.0,
            zero_run2: 11.0,
            technical_speed: 25.0,
        }
    }

    #[test]
    fn test_empty_return_reference_shift() {
        let shift = empty_return(&reference_route(), 10.0);
        assert_eq!(shift.route_length, 32.0);
        assert!((shift.trip_time - 1.48).abs() < 1e-12);
        assert_eq!(shift.decision.whole, 6);
        assert!((shift.decision.delta_time - 1.12).abs() < 1e-9);
        assert!((shift.decision.required_time - 0.84).abs() < 1e-12);
        assert!(shift.decision.extra);
        assert_eq!(shift.actual_trips, 7);
        assert!((shift.total_tonnage - 63.0).abs() < 1e-9);
        assert!((shift.total_ton_km - 1008.0).abs() < 1e-9);
        assert_eq!(shift.total_distance, 226.0);
        assert!((shift.actual_shift_time - 10.44).abs() < 1e-9);
        assert_eq!(shift.beta_trip, 0.5);
        assert!((shift.beta_day - 112.0 / 226.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_return_without_trips_keeps_empty_leg() {
        let shift = empty_return(&reference_route(), 0.5);
        assert_eq!(shift.actual_trips, 0);
        assert_eq!(shift.total_distance, 18.0);
        assert_eq!(shift.total_tonnage, 0.0);
        assert_eq!(shift.beta_day, 0.0);
    }

    #[test]
    fn test_empty_return_is_pure() {
        let route = reference_route();
        assert_eq!(empty_return(&route, 9.3), empty_return(&route, 9.3));
    }

    #[test]
    fn test_empty_return_zero_speed() {
        let route = RouteParameters {
            technical_speed: 0.0,
            ..reference_route()
        };
        let shift = empty_return(&route, 1.0);
        assert_eq!(shift.trip_time, 0.2);
        assert_eq!(shift.decision.whole, 5);
        assert!(!shift.decision.extra);
        assert_eq!(shift.actual_shift_time, 1.0);
    }

    fn partial_input() -> PartialLoadedInput {
        PartialLoadedInput {
            payload_capacity: 10.0,
            load_factor: 1.0,
            shift_duration: 10.0,
            service_time: 0.4,
            forward_distance: 16.0,
            return_distance: 10.0,
            zero_run1: 13.0,
            zero_run2: 8.0,
            zero_run3: 6.0,
            empty_distance: 5.0,
            technical_speed: 25.0,
        }
    }

    #[test]
    fn test_partial_loaded_with_extra_forward_trip() {
        let result = partial_loaded(&partial_input());
        let shift = result.shift;
        assert_eq!(shift.route_length, 31.0);
        assert!((shift.cycle_time - 2.04).abs() < 1e-12);
        assert_eq!(shift.decision.whole, 4);
        assert!(shift.decision.extra);
        assert_eq!(shift.trips_first, 5);
        assert_eq!(shift.trips_second, 4);
        assert_eq!(shift.total_trips, 9);
        assert_eq!(shift.actual_turns, 4.5);
        assert_eq!(shift.total_tonnage, 90.0);
        assert_eq!(shift.total_ton_km, 1200.0);
        assert_eq!(shift.total_distance, 160.5);
        assert!((shift.actual_shift_time - (160.5 / 25.0 + 3.6)).abs() < 1e-12);
        assert!((result.beta_second_trip - 10.0 / 15.0).abs() < 1e-12);
        assert!((result.beta_cycle - 26.0 / 31.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_loaded_whole_turn_closing() {
        let input = PartialLoadedInput {
            shift_duration: 8.5,
            ..partial_input()
        };
        let shift = partial_loaded(&input).shift;
        assert_eq!(shift.decision.whole, 4);
        assert!(!shift.decision.extra);
        assert_eq!(shift.total_distance, 13.0 + 31.0 * 4.0 + 6.0 - 5.0);
    }

    #[test]
    fn test_unequal_load_closes_on_first_zero_run() {
        let input = UnequalLoadInput {
            payload_capacity: 10.0,
            load_factor_forward: 1.0,
            load_factor_return: 0.5,
            shift_duration: 8.0,
            service_time: 0.5,
            forward_distance: 20.0,
            return_distance: 20.0,
            zero_run1: 5.0,
            zero_run2: 9.0,
            technical_speed: 40.0,
        };
        let shift = unequal_load(&input);
        assert_eq!(shift.cycle_time, 2.0);
        assert_eq!(shift.decision.whole, 4);
        assert!(!shift.decision.extra);
        assert_eq!(shift.total_tonnage, 60.0);
        assert_eq!(shift.total_ton_km, 1200.0);
        assert_eq!(shift.total_distance, 5.0 + 160.0 + 5.0);

        let longer = unequal_load(&UnequalLoadInput {
            shift_duration: 9.0,
            ..input
        });
        assert!(longer.decision.extra);
        assert_eq!(longer.trips_first, 5);
        assert_eq!(longer.total_distance, 5.0 + 180.0 + 9.0);
        assert_eq!(longer.total_tonnage, 70.0);
    }
}
