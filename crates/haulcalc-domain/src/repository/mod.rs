//! Repository trait definitions for planning data

use haulcalc_types::Result;

use crate::model::{PlanInputs, TransportRequest};

/// Source of planning inputs (vehicle, requests, route distances)
pub trait PlanRepository {
    fn load_plan(&self) -> Result<PlanInputs>;
}

/// Source of transport requests kept apart from the route data
pub trait RequestRepository {
    fn find_all(&self) -> Result<Vec<TransportRequest>>;

    fn find_by_shipper(&self, shipper: &str) -> Result<Vec<TransportRequest>> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|request| request.shipper == shipper)
            .collect())
    }
}
