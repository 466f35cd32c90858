//! Loads the bundled planning fixtures through the file repositories

use std::path::PathBuf;

use haulcalc_domain::repository::{PlanRepository, RequestRepository};
use haulcalc_infra::input_file::load_input_values;
use haulcalc_infra::persistence::{CsvRequestRepository, FilePlanRepository};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
}

#[test]
fn test_topographic_fixture_loads() {
    let repo = FilePlanRepository::new(fixtures_dir().join("topographic.toml")).unwrap();
    let inputs = repo.load_plan().unwrap();

    assert_eq!(inputs.vehicle_config.payload, 5.0);
    assert_eq!(inputs.vehicle_config.service_time(), 0.5);
    assert_eq!(inputs.requests.len(), 7);
    for request in &inputs.requests {
        assert!(
            inputs.route_distances.contains_key(&request.route),
            "no distances for {}",
            request.route
        );
    }
}

#[test]
fn test_request_csv_fixture() {
    let repo = CsvRequestRepository::new(fixtures_dir().join("requests.csv"));
    assert_eq!(repo.find_all().unwrap().len(), 3);

    let e4 = repo.find_by_shipper("E4").unwrap();
    let routes: Vec<_> = e4.iter().map(|r| r.route.as_str()).collect();
    assert_eq!(routes, vec!["E4A3A3E4", "E4F3F3E4"]);
}

#[test]
fn test_input_file_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inputs.toml");
    std::fs::write(
        &path,
        "payloadCapacity = 8\nloadFactor = \"0,9\"\nsegmentData = \"12,40,5\"\n",
    )
    .unwrap();

    let values = load_input_values(&path).unwrap();
    assert_eq!(values.number("payloadCapacity"), 8.0);
    assert_eq!(values.number("loadFactor"), 0.9);
    assert_eq!(values.text("segmentData"), "12,40,5");
}
