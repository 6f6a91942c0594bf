use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DATASET: &str = "\
project_id,project_name,campus,budget_allocated,vendor_name,reliability_score,expense_date,amount,category
1001,Expansion 1001,Apple Park,1000.00,Contractor_101,72,2025-04-02,100.00,Labor
1001,Expansion 1001,Apple Park,1000.00,Contractor_102,95,2025-04-03,200.00,Materials
1002,Expansion 1002,Apple Park,500.00,Contractor_101,72,2025-04-03,50.00,Labor
1003,Retrofit 1003,Infinite Loop,300.00,Contractor_103,60,2025-05-01,30.00,Permits
";

const RUN_RESULTS: &str = r#"{
  "results": [
    {"unique_id": "model.places.fct_project_spend", "status": "success", "execution_time": 1.5},
    {"unique_id": "test.places.not_null_amount", "status": "pass", "execution_time": 0.5},
    {"unique_id": "model.places.stg_vendors", "status": "error", "execution_time": 2.0}
  ]
}"#;

fn project_dir() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir_all(dir.path().join("data")).expect("data dir");
    fs::write(dir.path().join("data/fct_project_spend.csv"), DATASET).expect("dataset");
    dir
}

fn write_target(dir: &Path, name: &str, contents: &str) {
    fs::create_dir_all(dir.join("target")).expect("target dir");
    fs::write(dir.join("target").join(name), contents).expect("artifact");
}

fn places(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("places").expect("bin");
    cmd.env_remove("PLACES_HUB_DIR")
        .env_remove("RUST_LOG")
        .arg("--dir")
        .arg(dir);
    cmd
}

#[test]
fn summary_reports_budget_kpis() {
    let dir = project_dir();
    places(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Campus Construction & Budget Tracking"))
        .stdout(predicate::str::contains("$1,800"))
        .stdout(predicate::str::contains("$380"))
        .stdout(predicate::str::contains("21.11%"));
}

#[test]
fn campuses_listed_in_first_seen_order() {
    let dir = project_dir();
    places(dir.path())
        .arg("campuses")
        .assert()
        .success()
        .stdout("Apple Park\nInfinite Loop\n");
}

#[test]
fn vendors_below_threshold_for_selected_campus() {
    let dir = project_dir();
    places(dir.path())
        .args(["vendors", "--campus", "Apple Park", "--threshold", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contractor_101"))
        .stdout(predicate::str::contains("Contractor_102").not())
        .stdout(predicate::str::contains("Contractor_103").not());
}

#[test]
fn spend_csv_export_is_written() {
    let dir = project_dir();
    let out = dir.path().join("by_category.csv");
    places(dir.path())
        .args(["spend", "--by", "category", "--output"])
        .arg(&out)
        .assert()
        .success();

    let csv = fs::read_to_string(&out).expect("export");
    assert_eq!(
        csv,
        "campus,category,amount\nApple Park,Labor,150.00\nApple Park,Materials,200.00\n"
    );
}

#[test]
fn spend_csv_export_honours_top() {
    let dir = project_dir();
    let out = dir.path().join("top_category.csv");
    places(dir.path())
        .args(["spend", "--by", "category", "--top", "1", "--output"])
        .arg(&out)
        .assert()
        .success();

    let csv = fs::read_to_string(&out).expect("export");
    assert_eq!(csv, "campus,category,amount\nApple Park,Materials,200.00\n");
}

#[test]
fn unknown_campus_fails() {
    let dir = project_dir();
    places(dir.path())
        .args(["vendors", "--campus", "Nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nowhere"));
}

#[test]
fn threshold_out_of_range_is_rejected() {
    let dir = project_dir();
    places(dir.path())
        .args(["vendors", "--threshold", "0"])
        .assert()
        .failure();
}

#[test]
fn missing_dataset_fails() {
    let dir = TempDir::new().expect("tempdir");
    places(dir.path())
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("fct_project_spend.csv"));
}

#[test]
fn pipeline_without_run_results_warns_and_succeeds() {
    let dir = project_dir();
    places(dir.path())
        .arg("pipeline")
        .assert()
        .success()
        .stdout(predicate::str::contains("run_results.json not found"));
}

#[test]
fn pipeline_with_malformed_run_results_warns_and_succeeds() {
    let dir = project_dir();
    write_target(dir.path(), "run_results.json", "{ not json");
    places(dir.path())
        .arg("pipeline")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: could not parse"));
}

#[test]
fn pipeline_reports_node_health() {
    let dir = project_dir();
    write_target(dir.path(), "run_results.json", RUN_RESULTS);
    places(dir.path())
        .arg("pipeline")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Nodes:          3"))
        .stdout(predicate::str::contains("66.67%"))
        .stdout(predicate::str::contains("fct_project_spend"))
        .stdout(predicate::str::contains("not_null_amount"));
}

#[test]
fn dashboard_json_resolves_default_campus() {
    let dir = project_dir();
    write_target(dir.path(), "run_results.json", RUN_RESULTS);
    let output = places(dir.path())
        .args(["dashboard", "--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(payload["schema_version"], "1.0.0");
    let dashboard = &payload["dashboard"];
    assert_eq!(dashboard["filter"]["campus"], "Apple Park");
    assert_eq!(dashboard["kpis"]["total_budget"], 180000);
    assert_eq!(dashboard["kpis"]["total_spend"], 38000);
    assert_eq!(dashboard["telemetry"]["kpis"]["total_nodes"], 3);
}

#[test]
fn config_init_persists_threshold() {
    let dir = project_dir();
    places(dir.path())
        .args(["--threshold", "75", "config", "init"])
        .assert()
        .success();

    let settings = fs::read_to_string(dir.path().join("places-hub.json")).expect("settings");
    let settings: serde_json::Value = serde_json::from_str(&settings).expect("json");
    assert_eq!(settings["default_reliability_threshold"], 75);
}
