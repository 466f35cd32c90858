//! Transport requests kept in a CSV file

use std::path::PathBuf;

use haulcalc_domain::model::TransportRequest;
use haulcalc_domain::repository::RequestRepository;
use haulcalc_types::Result;

use crate::requests_csv::load_requests;

pub struct CsvRequestRepository {
    csv_path: PathBuf,
}

impl CsvRequestRepository {
    pub fn new(csv_path: PathBuf) -> Self {
        Self { csv_path }
    }
}

impl RequestRepository for CsvRequestRepository {
    fn find_all(&self) -> Result<Vec<TransportRequest>> {
        load_requests(&self.csv_path)
    }
}
