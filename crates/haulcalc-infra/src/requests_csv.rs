//! CSV loader for transport requests
//!
//! Expected header (column order is free):
//! route,shipper,consignee,volume,workTime

use std::io::Read;
use std::path::Path;

use haulcalc_domain::model::TransportRequest;
use haulcalc_types::{Error, Result};

pub fn load_requests(path: &Path) -> Result<Vec<TransportRequest>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let file = std::fs::File::open(path)?;
    let requests = read_requests(file)?;
    tracing::debug!(path = %path.display(), count = requests.len(), "loaded transport requests");
    Ok(requests)
}

/// Blank lines are skipped; a row with a missing or non-numeric
/// volume/workTime is an error naming the row.
pub fn read_requests<R: Read>(reader: R) -> Result<Vec<TransportRequest>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut requests = Vec::new();
    for record in reader.deserialize::<TransportRequest>() {
        requests.push(record?);
    }
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_requests() {
        let data = "route,shipper,consignee,volume,workTime\n\
                    A6B2B2A6, A6, B2, 20, 10\n\
                    \n\
                    B2F1F1B2,B2,F1,30.5,9\n";
        let requests = read_requests(data.as_bytes()).unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].shipper, "A6");
        assert_eq!(requests[1].volume, 30.5);
        assert_eq!(requests[1].work_time, 9.0);
    }

    #[test]
    fn test_column_order_is_free() {
        let data = "workTime,volume,route,consignee,shipper\n8,40,C3D5D5C3,D5,C3\n";
        let requests = read_requests(data.as_bytes()).unwrap();
        assert_eq!(requests[0].route, "C3D5D5C3");
        assert_eq!(requests[0].work_time, 8.0);
    }

    #[test]
    fn test_bad_number_is_error() {
        let data = "route,shipper,consignee,volume,workTime\nA6B2B2A6,A6,B2,lots,10\n";
        assert!(matches!(read_requests(data.as_bytes()), Err(Error::Csv(_))));
    }
}
