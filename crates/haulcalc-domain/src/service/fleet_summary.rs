//! Single-shot group figures over shift averages

use serde::{Deserialize, Serialize};

use crate::model::InputValues;
use crate::numeric::safe_divide;

/// Group averages shared by the summary calculators; each one reads only
/// the fields it needs
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetSummaryInput {
    pub vehicles: f64,
    pub avg_trips: f64,
    pub avg_payload: f64,
    pub route_length: f64,
    pub shift_duration: f64,
    pub prep_time: f64,
    pub downtime: f64,
    pub working_time: f64,
    pub payload_a: f64,
    pub payload_b: f64,
    pub distance_a: f64,
    pub distance_b: f64,
    pub driving_time: f64,
    pub service_time: f64,
    pub idle_time: f64,
    pub payload_capacity: f64,
    pub turnaround_time: f64,
    pub load_factor: f64,
}

impl FleetSummaryInput {
    pub fn from_values(values: &InputValues) -> Self {
        Self {
            vehicles: values.number("vehicles"),
            avg_trips: values.number("avgTrips"),
            avg_payload: values.number("avgPayload"),
            route_length: values.number("routeLength"),
            shift_duration: values.number("shiftDuration"),
            prep_time: values.number("prepTime"),
            downtime: values.number("downtime"),
            working_time: values.number("workingTime"),
            payload_a: values.number("payloadA"),
            payload_b: values.number("payloadB"),
            distance_a: values.number("distanceA"),
            distance_b: values.number("distanceB"),
            driving_time: values.number("drivingTime"),
            service_time: values.number("serviceTime"),
            idle_time: values.number("idleTime"),
            payload_capacity: values.number("payloadCapacity"),
            turnaround_time: values.number("turnaroundTime"),
            load_factor: values.number("loadFactor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftBalance {
    pub total_trips: f64,
    pub total_payload: f64,
    pub total_distance: f64,
}

pub fn shift_balance(input: &FleetSummaryInput) -> ShiftBalance {
    let total_trips = input.vehicles * input.avg_trips;
    ShiftBalance {
        total_trips,
        total_payload: total_trips * input.avg_payload,
        total_distance: total_trips * input.route_length,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Utilization {
    pub effective_time: f64,
    pub readiness: f64,
    pub utilization: f64,
    pub vehicle_hours: f64,
}

pub fn utilization(input: &FleetSummaryInput) -> Utilization {
    let shift = input.shift_duration;
    let effective_time = (shift - input.prep_time - input.downtime).max(0.0);
    Utilization {
        effective_time,
        readiness: safe_divide(effective_time, shift),
        utilization: safe_divide(input.working_time, shift),
        vehicle_hours: input.working_time * input.vehicles,
    }
}

/// Two legs A and B served by one group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiRoute {
    pub average_payload: f64,
    /// Leg length weighted by payload
    pub weighted_distance: f64,
    pub total_payload: f64,
}

pub fn multi_route(input: &FleetSummaryInput) -> MultiRoute {
    let payload = input.payload_a + input.payload_b;
    let average_payload = safe_divide(payload, 2.0);
    MultiRoute {
        average_payload,
        weighted_distance: safe_divide(
            input.distance_a * input.payload_a + input.distance_b * input.payload_b,
            payload,
        ),
        total_payload: input.vehicles * average_payload,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBalance {
    pub total_time: f64,
    pub driving_share: f64,
    pub service_share: f64,
    pub idle_share: f64,
    pub vehicle_hours: f64,
}

pub fn time_balance(input: &FleetSummaryInput) -> TimeBalance {
    let total_time = input.driving_time + input.service_time + input.idle_time;
    TimeBalance {
        total_time,
        driving_share: safe_divide(input.driving_time, total_time),
        service_share: safe_divide(input.service_time, total_time),
        idle_share: safe_divide(input.idle_time, total_time),
        vehicle_hours: total_time * input.vehicles,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    pub trips_per_vehicle: f64,
    pub total_trips: f64,
    pub payload_per_trip: f64,
    pub total_payload: f64,
}

pub fn capacity(input: &FleetSummaryInput) -> Capacity {
    let trips_per_vehicle = safe_divide(input.shift_duration, input.turnaround_time).floor();
    let total_trips = trips_per_vehicle * input.vehicles;
    let payload_per_trip = input.payload_capacity * input.load_factor;
    Capacity {
        trips_per_vehicle,
        total_trips,
        payload_per_trip,
        total_payload: payload_per_trip * total_trips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_reads_form_names() {
        let values = InputValues::new()
            .with("vehicles", "4")
            .with("payloadA", "6,5")
            .with("turnaroundTime", 1.5);
        let input = FleetSummaryInput::from_values(&values);
        assert_eq!(input.vehicles, 4.0);
        assert_eq!(input.payload_a, 6.5);
        assert_eq!(input.turnaround_time, 1.5);
        assert_eq!(input.idle_time, 0.0);
    }

    #[test]
    fn test_shift_balance() {
        let values = InputValues::new()
            .with("vehicles", 5.0)
            .with("avgTrips", 6.5)
            .with("avgPayload", 9.0)
            .with("routeLength", "32");
        let balance = shift_balance(&FleetSummaryInput::from_values(&values));
        assert_eq!(balance.total_trips, 32.5);
        assert_eq!(balance.total_payload, 292.5);
        assert_eq!(balance.total_distance, 1040.0);
    }

    #[test]
    fn test_utilization_floors_effective_time() {
        let values = InputValues::new()
            .with("vehicles", 4.0)
            .with("shiftDuration", 8.0)
            .with("prepTime", 6.0)
            .with("downtime", 3.0)
            .with("workingTime", 6.0);
        let result = utilization(&FleetSummaryInput::from_values(&values));
        assert_eq!(result.effective_time, 0.0);
        assert_eq!(result.readiness, 0.0);
        assert_eq!(result.utilization, 0.75);
        assert_eq!(result.vehicle_hours, 24.0);
    }

    #[test]
    fn test_multi_route_without_payload() {
        let result = multi_route(&FleetSummaryInput::from_values(
            &InputValues::new().with("distanceA", 10.0),
        ));
        assert_eq!(result.average_payload, 0.0);
        assert_eq!(result.weighted_distance, 0.0);
    }

    #[test]
    fn test_multi_route_weighting() {
        let values = InputValues::new()
            .with("vehicles", 3.0)
            .with("payloadA", 6.0)
            .with("payloadB", 2.0)
            .with("distanceA", 10.0)
            .with("distanceB", 30.0);
        let result = multi_route(&FleetSummaryInput::from_values(&values));
        assert_eq!(result.average_payload, 4.0);
        assert_eq!(result.weighted_distance, 15.0);
        assert_eq!(result.total_payload, 12.0);
    }

    #[test]
    fn test_time_balance_shares() {
        let values = InputValues::new()
            .with("vehicles", 2.0)
            .with("drivingTime", 5.0)
            .with("serviceTime", 2.0)
            .with("idleTime", 1.0);
        let result = time_balance(&FleetSummaryInput::from_values(&values));
        assert_eq!(result.total_time, 8.0);
        assert_eq!(result.driving_share, 0.625);
        assert_eq!(result.idle_share, 0.125);
        assert_eq!(result.vehicle_hours, 16.0);
    }

    #[test]
    fn test_capacity_whole_trips() {
        let values = InputValues::new()
            .with("vehicles", 4.0)
            .with("payloadCapacity", 10.0)
            .with("turnaroundTime", 1.5)
            .with("shiftDuration", 8.0)
            .with("loadFactor", 0.8);
        let result = capacity(&FleetSummaryInput::from_values(&values));
        assert_eq!(result.trips_per_vehicle, 5.0);
        assert_eq!(result.total_trips, 20.0);
        assert_eq!(result.payload_per_trip, 8.0);
        assert_eq!(result.total_payload, 160.0);
    }
}
