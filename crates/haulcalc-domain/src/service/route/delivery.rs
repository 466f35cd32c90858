//! Delivery and delivery-collection routes through several stops

use serde::{Deserialize, Serialize};

use crate::model::InputValues;
use crate::numeric::safe_divide;

/// Small shipments from A dropped at B, C and D in turn
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SmallShipmentsInput {
    pub payload_capacity: f64,
    pub load_factor: f64,
    pub load_unload_time: f64,
    pub detour_time: f64,
    pub loaded_distance1: f64,
    pub loaded_distance2: f64,
    pub loaded_distance3: f64,
    pub empty_distance: f64,
    pub demand_b: f64,
    pub demand_c: f64,
    pub demand_d: f64,
    pub unloading_points: f64,
    pub technical_speed: f64,
}

impl SmallShipmentsInput {
    pub fn from_values(values: &InputValues) -> Self {
        Self {
            payload_capacity: values.number("payloadCapacity"),
            load_factor: values.number("loadFactor"),
            load_unload_time: values.number("loadUnloadTime"),
            detour_time: values.number("detourTime"),
            loaded_distance1: values.number("loadedDistance1"),
            loaded_distance2: values.number("loadedDistance2"),
            loaded_distance3: values.number("loadedDistance3"),
            empty_distance: values.number("emptyDistance"),
            demand_b: values.number("demandB"),
            demand_c: values.number("demandC"),
            demand_d: values.number("demandD"),
            unloading_points: values.number("unloadingPoints"),
            technical_speed: values.number("technicalSpeed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmallShipmentsTrip {
    pub route_length: f64,
    pub trip_time: f64,
    pub effective_load: f64,
    pub ton_km: f64,
    pub loaded_at_origin: f64,
    /// Loaded tonnes over `q·γ`
    pub load_balance: f64,
}

pub fn small_shipments(input: &SmallShipmentsInput) -> SmallShipmentsTrip {
    let loaded_at_origin = input.demand_b + input.demand_c + input.demand_d;
    let route_length = input.loaded_distance1
        + input.loaded_distance2
        + input.loaded_distance3
        + input.empty_distance;
    let trip_time = safe_divide(route_length, input.technical_speed)
        + input.load_unload_time
        + input.detour_time * (input.unloading_points - 1.0).max(0.0);
    let effective_load = input.payload_capacity * input.load_factor;

    // on-board load shrinks after every drop
    let ton_km = loaded_at_origin * input.loaded_distance1
        + (loaded_at_origin - input.demand_b).max(0.0) * input.loaded_distance2
        + (loaded_at_origin - input.demand_b - input.demand_c).max(0.0) * input.loaded_distance3;

    SmallShipmentsTrip {
        route_length,
        trip_time,
        effective_load,
        ton_km,
        loaded_at_origin,
        load_balance: safe_divide(loaded_at_origin, effective_load),
    }
}

/// Drops and pickups at B, C and D on one loop from A
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MixedRouteInput {
    pub payload_capacity: f64,
    pub unload_load_time: f64,
    pub collection_load_time: f64,
    pub detour_time: f64,
    pub loaded_distances: [f64; 4],
    pub demand_b: f64,
    pub pickup_b: f64,
    pub demand_c: f64,
    pub pickup_c: f64,
    pub demand_d: f64,
    pub pickup_d: f64,
    pub points_count: f64,
    pub technical_speed: f64,
}

impl MixedRouteInput {
    pub fn from_values(values: &InputValues) -> Self {
        Self {
            payload_capacity: values.number("payloadCapacity"),
            unload_load_time: values.number("unloadLoadTime"),
            collection_load_time: values.number("collectionLoadTime"),
            detour_time: values.number("detourTime"),
            loaded_distances: [
                values.number("loadedDistance1"),
                values.number("loadedDistance2"),
                values.number("loadedDistance3"),
                values.number("loadedDistance4"),
            ],
            demand_b: values.number("demandB"),
            pickup_b: values.number("pickupB"),
            demand_c: values.number("demandC"),
            pickup_c: values.number("pickupC"),
            demand_d: values.number("demandD"),
            pickup_d: values.number("pickupD"),
            points_count: values.number("pointsCount"),
            technical_speed: values.number("technicalSpeed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixedRouteTurn {
    pub route_length: f64,
    pub time_per_turn: f64,
    pub tonnage_per_turn: f64,
    pub ton_km: f64,
    pub total_delivered: f64,
    pub total_picked: f64,
    /// On-board load on A→B, B→C, C→D and D→A
    pub leg_loads: [f64; 4],
    pub payload_ratio: f64,
}

pub fn mixed_route(input: &MixedRouteInput) -> MixedRouteTurn {
    let [l1, l2, l3, l4] = input.loaded_distances;
    let route_length = l1 + l2 + l3 + l4;
    let time_per_turn = safe_divide(route_length, input.technical_speed)
        + input.unload_load_time
        + input.collection_load_time
        + input.detour_time * (input.points_count - 2.0).max(0.0);

    let total_delivered = input.demand_b + input.demand_c + input.demand_d;
    let total_picked = input.pickup_b + input.pickup_c + input.pickup_d;

    let load1 = total_delivered;
    let load2 = load1 - input.demand_b + input.pickup_b;
    let load3 = load2 - input.demand_c + input.pickup_c;
    let load4 = load3 - input.demand_d + input.pickup_d;

    let ton_km = load1 * l1 + load2 * l2 + load3 * l3 + load4.abs() * l4;

    MixedRouteTurn {
        route_length,
        time_per_turn,
        tonnage_per_turn: total_delivered + load4.abs(),
        ton_km,
        total_delivered,
        total_picked,
        leg_loads: [load1, load2, load3, load4],
        payload_ratio: safe_divide(total_delivered, input.payload_capacity),
    }
}
