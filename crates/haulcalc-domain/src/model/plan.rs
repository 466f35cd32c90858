//! Transport-request planning inputs and results

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Vehicle used for every request in a plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleConfig {
    /// Payload capacity (t)
    pub payload: f64,
    pub load_factor: f64,
    /// Handling time per tonne of payload (h/t)
    pub service_time_per_ton: f64,
    /// km/h
    pub technical_speed: f64,
}

impl VehicleConfig {
    pub fn service_time(&self) -> f64 {
        self.payload * self.service_time_per_ton
    }
}

/// A shipper → consignee request to cover within one working window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportRequest {
    pub route: String,
    pub shipper: String,
    pub consignee: String,
    /// Tonnes to move
    pub volume: f64,
    /// Hours available
    pub work_time: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDistances {
    pub loaded_distance: f64,
    pub empty_distance: f64,
    pub zero_run1: f64,
    pub zero_run2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInputs {
    pub vehicle_config: VehicleConfig,
    pub requests: Vec<TransportRequest>,
    #[serde(default)]
    pub route_distances: BTreeMap<String, RouteDistances>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRow {
    pub route: String,
    /// Trip fits into the working window (`tо < Tн`)
    pub feasible: bool,
    pub trip_time: f64,
    pub trips_per_vehicle: u32,
    pub vehicles_needed: u32,
    pub planned_tonnage: f64,
    pub planned_ton_km: f64,
    pub planned_distance: f64,
    pub planned_duty_time: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTotals {
    pub planned_tonnage: f64,
    pub planned_ton_km: f64,
    pub planned_distance: f64,
    pub planned_duty_time: f64,
    pub vehicles_needed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub service_time: f64,
    pub rows: Vec<PlanRow>,
    pub totals: PlanTotals,
    /// Routes of requests that had no distances and were left out
    #[serde(default)]
    pub skipped_routes: Vec<String>,
}
