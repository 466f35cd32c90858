//! End-to-end use cases over the bundled fixtures

use std::path::PathBuf;

use haulcalc_app::app::{plan, PlanOptions};
use haulcalc_app::catalogue::{self, ids};
use haulcalc_app::config::Config;
use haulcalc_app::export::export_to_excel;
use haulcalc_app::reports::plan::{plan_report, PLAN_TABLE};
use haulcalc_app::repository::{open_plan_repo, open_request_repo};
use haulcalc_domain::model::InputValues;
use haulcalc_domain::repository::RequestRepository;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
}

fn fixture_config() -> Config {
    Config {
        fixtures_dir: Some(fixtures_dir()),
        ..Config::default()
    }
}

#[test]
fn test_plan_for_fixture_requests() {
    let repo = open_plan_repo(&fixture_config()).unwrap();
    let plan = plan(&repo, None, &PlanOptions::new()).unwrap();

    assert_eq!(plan.rows.len(), 7);
    assert!(plan.skipped_routes.is_empty());
    assert!(plan.rows.iter().all(|row| row.feasible));
    assert_eq!(plan.totals.vehicles_needed, 12);
    assert_eq!(plan.totals.planned_tonnage, 380.0);
    assert_eq!(plan.totals.planned_ton_km, 4410.0);
    assert_eq!(plan.totals.planned_distance, 2025.0);

    let report = plan_report(&plan);
    let table = report
        .tables()
        .find(|(label, _)| *label == PLAN_TABLE)
        .map(|(_, table)| table)
        .unwrap();
    let total_row = table.row_cells(table.rows.len() - 1);
    assert_eq!(total_row[0], "Итого");
    assert_eq!(total_row[1], "380,00");
    assert_eq!(total_row[5], "12");
}

#[test]
fn test_plan_with_request_csv_and_shipper() {
    let repo = open_plan_repo(&fixture_config()).unwrap();
    let requests = open_request_repo(fixtures_dir().join("requests.csv"));
    let requests: &dyn RequestRepository = &requests;
    let options = PlanOptions::new().with_shipper("E4");

    let plan = plan(&repo, Some(requests), &options).unwrap();

    let routes: Vec<_> = plan.rows.iter().map(|row| row.route.as_str()).collect();
    assert_eq!(routes, vec!["E4A3A3E4", "E4F3F3E4"]);
    assert_eq!(plan.rows[0].trips_per_vehicle, 5);
    assert_eq!(plan.rows[1].trips_per_vehicle, 8);
    assert_eq!(plan.totals.vehicles_needed, 3);
    assert_eq!(plan.totals.planned_tonnage, 90.0);
}

#[test]
fn test_calculate_and_export_fleet_ring() {
    let report = catalogue::run(ids::FLEET_RING_ROUTE, &InputValues::new()).unwrap();
    assert_eq!(report.scalar_value("Суммарная выработка Qн = Σ Qᵢ, т"), Some("198,00"));
    assert_eq!(report.scalar_value("Суммарный пробег Lобщ = Σ Lобщᵢ, км"), Some("437,00"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ring.xlsx");
    export_to_excel(&report, &path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_method_listing_serializes_without_calculator() {
    let method = catalogue::find_method(ids::RING_SEGMENTS).unwrap();
    let json = serde_json::to_value(method).unwrap();
    assert_eq!(json["id"], "ring-segments");
    assert_eq!(json["mode"], "single");
    assert!(json.get("calculate").is_none());
    assert_eq!(json["inputs"][0]["kind"], "number");
}
