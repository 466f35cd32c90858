//! Planning Service - topographic plan for a set of transport requests
//!
//! 1. Load vehicle, requests and route distances from the plan repository
//! 2. Optionally replace the requests with an external request list
//! 3. Optionally keep only one shipper's requests
//! 4. Run the planning calculation

use haulcalc_domain::model::Plan;
use haulcalc_domain::repository::{PlanRepository, RequestRepository};
use haulcalc_domain::service::calculate_plan;
use haulcalc_types::Error;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors specific to the planning service
#[derive(Debug, Error)]
pub enum PlanningServiceError {
    #[error("Planning data not found: {0}")]
    NotFound(String),

    #[error("Invalid planning data: {0}")]
    InvalidData(String),

    #[error("No transport requests for shipper '{0}'")]
    NoRequests(String),

    #[error("Planning failed: {0}")]
    Failed(String),
}

impl From<Error> for PlanningServiceError {
    fn from(err: Error) -> Self {
        match err {
            Error::FileNotFound(msg) => PlanningServiceError::NotFound(msg),
            Error::Toml(e) => PlanningServiceError::InvalidData(e.to_string()),
            Error::Json(e) => PlanningServiceError::InvalidData(e.to_string()),
            Error::Csv(e) => PlanningServiceError::InvalidData(e.to_string()),
            Error::Input(e) => PlanningServiceError::InvalidData(e.to_string()),
            _ => PlanningServiceError::Failed(err.to_string()),
        }
    }
}

/// Options for planning
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Keep only requests from this shipper
    pub shipper: Option<String>,
}

impl PlanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shipper(mut self, shipper: impl Into<String>) -> Self {
        self.shipper = Some(shipper.into());
        self
    }
}

/// Build the topographic plan
///
/// Requests come from `requests` when given, otherwise from the plan file.
pub fn plan(
    repo: &impl PlanRepository,
    requests: Option<&dyn RequestRepository>,
    options: &PlanOptions,
) -> Result<Plan, PlanningServiceError> {
    let mut inputs = repo.load_plan()?;

    if let Some(requests) = requests {
        inputs.requests = match options.shipper.as_deref() {
            Some(shipper) => requests.find_by_shipper(shipper)?,
            None => requests.find_all()?,
        };
        debug!(count = inputs.requests.len(), "using external request list");
    } else if let Some(shipper) = options.shipper.as_deref() {
        inputs.requests.retain(|request| request.shipper == shipper);
    }

    if let Some(shipper) = options.shipper.as_deref() {
        if inputs.requests.is_empty() {
            return Err(PlanningServiceError::NoRequests(shipper.to_string()));
        }
    }

    let plan = calculate_plan(&inputs);

    for route in &plan.skipped_routes {
        warn!(route = %route, "no route distances, request skipped");
    }
    info!(
        routes = plan.rows.len(),
        vehicles = plan.totals.vehicles_needed,
        "plan calculated"
    );

    Ok(plan)
}
