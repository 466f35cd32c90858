//! Route parameters for a simple loaded/empty pendulum

use serde::{Deserialize, Serialize};

use crate::model::InputValues;
use crate::numeric::safe_divide;

/// Distances (km), speed (km/h), handling time (h) and payload (t) of a
/// pendulum route with one loaded leg and an empty return
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteParameters {
    pub payload_capacity: f64,
    pub load_factor: f64,
    pub load_unload_time: f64,
    pub loaded_distance: f64,
    pub empty_distance: f64,
    pub zero_run1: f64,
    pub zero_run2: f64,
    pub technical_speed: f64,
}

/// Per-trip values, computed once and reused by every dispatch slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripOutcome {
    pub route_length: f64,
    pub trip_time: f64,
    pub tonnage_per_trip: f64,
    pub ton_km_per_trip: f64,
}

impl RouteParameters {
    /// Read parameters using the given field names for payload and
    /// handling time; the remaining names are shared by every form
    pub fn from_values(values: &InputValues, payload_field: &str, handling_field: &str) -> Self {
        Self {
            payload_capacity: values.number(payload_field),
            load_factor: values.number("loadFactor"),
            load_unload_time: values.number(handling_field),
            loaded_distance: values.number("loadedDistance"),
            empty_distance: values.number("emptyDistance"),
            zero_run1: values.number("zeroRun1"),
            zero_run2: values.number("zeroRun2"),
            technical_speed: values.number("technicalSpeed"),
        }
    }

    pub fn route_length(&self) -> f64 {
        self.loaded_distance + self.empty_distance
    }

    /// Time for the loaded leg plus handling; the minimum an extra trip needs
    pub fn essential_trip_time(&self) -> f64 {
        safe_divide(self.loaded_distance, self.technical_speed) + self.load_unload_time
    }

    pub fn trip_outcome(&self) -> TripOutcome {
        let route_length = self.route_length();
        let tonnage_per_trip = self.payload_capacity * self.load_factor;
        TripOutcome {
            route_length,
            trip_time: safe_divide(route_length, self.technical_speed) + self.load_unload_time,
            tonnage_per_trip,
            ton_km_per_trip: tonnage_per_trip * self.loaded_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RouteParameters {
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
    fn test_trip_outcome() {
        let outcome = sample().trip_outcome();
        assert_eq!(outcome.route_length, 32.0);
        assert!((outcome.trip_time - 1.48).abs() < 1e-12);
        assert!((outcome.tonnage_per_trip - 9.0).abs() < 1e-12);
        assert!((outcome.ton_km_per_trip - 144.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_speed_has_no_driving_time() {
        let route = RouteParameters {
            technical_speed: 0.0,
            ..sample()
        };
        assert_eq!(route.trip_outcome().trip_time, 0.2);
        assert_eq!(route.essential_trip_time(), 0.2);
    }
}
