//! Topographic plan: vehicles needed to cover each transport request

use crate::model::{Plan, PlanInputs, PlanRow, PlanTotals, RouteDistances, VehicleConfig};
use crate::numeric::safe_divide;
use crate::service::route::decide_extra_trip;

/// One vehicle's shift on a request's pendulum route
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteShift {
    pub route_length: f64,
    pub trip_time: f64,
    pub actual_trips: u32,
    pub total_tonnage: f64,
    pub total_ton_km: f64,
    pub total_distance: f64,
    pub feasible: bool,
}

pub fn route_shift(
    vehicle: &VehicleConfig,
    distances: &RouteDistances,
    service_time: f64,
    work_time: f64,
) -> RouteShift {
    let speed = vehicle.technical_speed;
    let route_length = distances.loaded_distance + distances.empty_distance;
    let trip_time = safe_divide(route_length, speed) + service_time;
    let tonnage_per_trip = vehicle.payload * vehicle.load_factor;
    let ton_km_per_trip = tonnage_per_trip * distances.loaded_distance;

    let required_time = safe_divide(distances.loaded_distance, speed) + service_time;
    let decision = decide_extra_trip(work_time, trip_time, required_time, speed);
    let actual_trips = decision.actual_trips();
    let trips = f64::from(actual_trips);

    RouteShift {
        route_length,
        trip_time,
        actual_trips,
        total_tonnage: tonnage_per_trip * trips,
        total_ton_km: ton_km_per_trip * trips,
        // both zero runs are driven; the last empty leg is not subtracted
        total_distance: distances.zero_run1 + route_length * trips + distances.zero_run2,
        feasible: trip_time < work_time,
    }
}

/// Requests whose route has no distances are skipped and listed in
/// `Plan::skipped_routes`.
pub fn calculate_plan(inputs: &PlanInputs) -> Plan {
    let vehicle = &inputs.vehicle_config;
    let service_time = vehicle.service_time();

    let mut rows = Vec::with_capacity(inputs.requests.len());
    let mut skipped_routes = Vec::new();

    for request in &inputs.requests {
        let Some(distances) = inputs.route_distances.get(&request.route) else {
            skipped_routes.push(request.route.clone());
            continue;
        };
        let shift = route_shift(vehicle, distances, service_time, request.work_time);
        let vehicles_needed = if shift.total_tonnage > 0.0 {
            (request.volume / shift.total_tonnage).ceil().max(0.0) as u32
        } else {
            0
        };
        let fleet = f64::from(vehicles_needed);
        rows.push(PlanRow {
            route: request.route.clone(),
            feasible: shift.feasible,
            trip_time: shift.trip_time,
            trips_per_vehicle: shift.actual_trips,
            vehicles_needed,
            planned_tonnage: shift.total_tonnage * fleet,
            planned_ton_km: shift.total_ton_km * fleet,
            planned_distance: shift.total_distance * fleet,
            planned_duty_time: 0.0,
        });
    }

    let totals = rows.iter().fold(PlanTotals::default(), |acc, row| PlanTotals {
        planned_tonnage: acc.planned_tonnage + row.planned_tonnage,
        planned_ton_km: acc.planned_ton_km + row.planned_ton_km,
        planned_distance: acc.planned_distance + row.planned_distance,
        planned_duty_time: acc.planned_duty_time + row.planned_duty_time,
        vehicles_needed: acc.vehicles_needed + row.vehicles_needed,
    });

    Plan {
        service_time,
        rows,
        totals,
        skipped_routes,
    }
}
