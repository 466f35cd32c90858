//! File-based implementations of the domain repository traits

mod csv_request_repo;
mod file_plan_repo;

pub use csv_request_repo::CsvRequestRepository;
pub use file_plan_repo::FilePlanRepository;
