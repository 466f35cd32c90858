//! Ring route with two loaded and two empty legs

use serde::{Deserialize, Serialize};

use super::decide_extra_trip;
use super::pendulum::TurnaroundShift;
use crate::model::InputValues;
use crate::numeric::safe_divide;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RingInput {
    pub payload_capacity: f64,
    pub static_load_factor: f64,
    pub shift_duration: f64,
    pub service_time: f64,
    pub loaded_distance1: f64,
    pub loaded_distance2: f64,
    pub zero_run1: f64,
    pub zero_run2: f64,
    pub zero_run3: f64,
    pub empty_run1: f64,
    pub empty_run2: f64,
    pub technical_speed: f64,
}

impl RingInput {
    pub fn from_values(values: &InputValues) -> Self {
        Self {
            payload_capacity: values.number("payloadCapacity"),
            static_load_factor: values.number("staticLoadFactor"),
            shift_duration: values.number("shiftDuration"),
            service_time: values.number("serviceTime"),
            loaded_distance1: values.number("loadedDistance1"),
            loaded_distance2: values.number("loadedDistance2"),
            zero_run1: values.number("zeroRun1"),
            zero_run2: values.number("zeroRun2"),
            zero_run3: values.number("zeroRun3"),
            empty_run1: values.number("emptyRun1"),
            empty_run2: values.number("emptyRun2"),
            technical_speed: values.number("technicalSpeed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingShift {
    pub shift: TurnaroundShift,
    pub beta_trip1: f64,
    pub beta_trip2: f64,
    pub beta_cycle: f64,
}

/// The extra trip, when it fits, is the second loaded leg; a half
/// turnaround then closes through the second zero run.
pub fn ring_route(input: &RingInput) -> RingShift {
    let speed = input.technical_speed;
    let route_length =
        input.loaded_distance1 + input.empty_run1 + input.loaded_distance2 + input.empty_run2;
    let first_trip_time =
        safe_divide(input.loaded_distance1 + input.empty_run1, speed) + input.service_time;
    let second_trip_time =
        safe_divide(input.loaded_distance2 + input.empty_run2, speed) + input.service_time;
    let cycle_time = first_trip_time + second_trip_time;

    let tonnage_per_trip = input.payload_capacity * input.static_load_factor;
    let ton_km_first_trip = tonnage_per_trip * input.loaded_distance1;
    let ton_km_second_trip = tonnage_per_trip * input.loaded_distance2;

    let required_time = safe_divide(input.loaded_distance2, speed) + input.service_time;
    let decision = decide_extra_trip(input.shift_duration, cycle_time, required_time, speed);

    let trips_first = decision.whole;
    let trips_second = decision.actual_trips();
    let total_trips = trips_first + trips_second;
    let actual_turns = decision.actual_turns();

    let distance_base = input.zero_run1 + route_length * actual_turns;
    let with_ending = if decision.extra {
        distance_base + input.zero_run2 - input.empty_run1
    } else {
        distance_base + input.zero_run3 - input.empty_run2
    };
    let total_distance = with_ending.max(0.0);

    let shift = TurnaroundShift {
        route_length,
        first_trip_time,
        second_trip_time,
        cycle_time,
        tonnage_first_trip: tonnage_per_trip,
        tonnage_second_trip: tonnage_per_trip,
        tonnage_per_cycle: tonnage_per_trip + tonnage_per_trip,
        ton_km_first_trip,
        ton_km_second_trip,
        ton_km_per_cycle: ton_km_first_trip + ton_km_second_trip,
        decision,
        trips_first,
        trips_second,
        total_trips,
        actual_turns,
        total_tonnage: tonnage_per_trip * f64::from(trips_first)
            + tonnage_per_trip * f64::from(trips_second),
        total_ton_km: ton_km_first_trip * f64::from(trips_first)
            + ton_km_second_trip * f64::from(trips_second),
        total_distance,
        actual_shift_time: safe_divide(total_distance, speed)
            + input.service_time * f64::from(total_trips),
        beta_day: safe_divide(
            input.loaded_distance1 * f64::from(trips_first)
                + input.loaded_distance2 * f64::from(trips_second),
            total_distance,
        ),
    };

    RingShift {
        shift,
        beta_trip1: safe_divide(input.loaded_distance1, input.loaded_distance1 + input.empty_run1),
        beta_trip2: safe_divide(input.loaded_distance2, input.loaded_distance2 + input.empty_run2),
        beta_cycle: safe_divide(input.loaded_distance1 + input.loaded_distance2, route_length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> RingInput {
        RingInput {
            payload_capacity: 10.0,
            static_load_factor: 0.9,
            shift_duration: 8.0,
            service_time: 0.2,
            loaded_distance1: 16.0,
            loaded_distance2: 7.0,
            zero_run1: 7.0,
            zero_run2: 11.0,
            zero_run3: 8.0,
            empty_run1: 8.0,
            empty_run2: 8.0,
            technical_speed: 25.0,
        }
    }

    #[test]
    fn test_whole_turnovers_only() {
        let ring = ring_route(&input());
        let shift = ring.shift;
        assert_eq!(shift.route_length, 39.0);
        assert!((shift.cycle_time - 1.96).abs() < 1e-12);
        assert_eq!(shift.decision.whole, 4);
        assert!(!shift.decision.extra);
        assert_eq!(shift.trips_first, 4);
        assert_eq!(shift.trips_second, 4);
        assert_eq!(shift.total_distance, 163.0);
        assert!((shift.total_tonnage - 72.0).abs() < 1e-9);
        assert!((ring.beta_trip1 - 16.0 / 24.0).abs() < 1e-12);
        assert!((ring.beta_cycle - 23.0 / 39.0).abs() < 1e-12);
    }

    #[test]
    fn test_extra_second_trip() {
        let ring = ring_route(&RingInput {
            shift_duration: 8.5,
            ..input()
        });
        let shift = ring.shift;
        assert!(shift.decision.extra);
        assert_eq!(shift.trips_first, 4);
        assert_eq!(shift.trips_second, 5);
        assert_eq!(shift.actual_turns, 4.5);
        assert_eq!(shift.total_distance, 185.5);
        assert!((shift.total_tonnage - 81.0).abs() < 1e-9);
        assert!((shift.total_ton_km - (144.0 * 4.0 + 63.0 * 5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_distance_floored_at_zero() {
        let ring = ring_route(&RingInput {
            shift_duration: 0.0,
            zero_run1: 0.0,
            zero_run3: 0.0,
            ..input()
        });
        assert_eq!(ring.shift.total_distance, 0.0);
        assert_eq!(ring.shift.beta_day, 0.0);
    }

    #[test]
    fn test_repeated_runs_agree() {
        let values = InputValues::new()
            .with("payloadCapacity", "10")
            .with("staticLoadFactor", "0,9")
            .with("shiftDuration", "8,5")
            .with("serviceTime", "0,2")
            .with("loadedDistance1", "16")
            .with("loadedDistance2", "7")
            .with("zeroRun1", "7")
            .with("zeroRun2", "11")
            .with("zeroRun3", "8")
            .with("emptyRun1", "8")
            .with("emptyRun2", "8")
            .with("technicalSpeed", "25");
        let input = RingInput::from_values(&values);
        let first = ring_route(&input);
        let second = ring_route(&RingInput::from_values(&values));
        assert_eq!(first, second);
        assert_eq!(first, ring_route(&input));
    }
}
