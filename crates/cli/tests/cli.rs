use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const BODIES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../configs/bodies");
const SETTINGS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../configs/simulation.toml");

#[test]
fn propagate_writes_csv_for_single_body() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("mercury.csv");

    Command::cargo_bin("propagate")
        .expect("propagate bin")
        .args([
            "--body",
            "mercury",
            "--bodies",
            BODIES_DIR,
            "--start",
            "-10",
            "--end",
            "10",
            "--step",
            "5",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let mut reader = csv::Reader::from_path(&output).expect("csv");
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 5);
    assert_eq!(&rows[0][1], "Mercury");
    let first_time: f64 = rows[0][0].parse().unwrap();
    let last_time: f64 = rows[4][0].parse().unwrap();
    assert_eq!(first_time, -10.0);
    assert_eq!(last_time, 10.0);

    // t = 0 is the periapsis passage.
    let x: f64 = rows[2][2].parse().unwrap();
    let y: f64 = rows[2][3].parse().unwrap();
    assert!((x - 0.26889).abs() < 1e-3 && (y - 0.14905).abs() < 1e-3);
}

#[test]
fn propagate_streams_all_bodies_to_stdout() {
    Command::cargo_bin("propagate")
        .expect("propagate bin")
        .args(["--bodies", BODIES_DIR, "--end", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("time,body,x,y,r"))
        .stdout(predicate::str::contains(",Moon,"))
        .stdout(predicate::str::contains(",Venus,"));
}

#[test]
fn propagate_rejects_unknown_body() {
    Command::cargo_bin("propagate")
        .expect("propagate bin")
        .args(["--body", "Vulcan", "--bodies", BODIES_DIR, "--end", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vulcan"));
}

#[test]
fn propagate_rejects_non_positive_step() {
    Command::cargo_bin("propagate")
        .expect("propagate bin")
        .args(["--bodies", BODIES_DIR, "--end", "1", "--step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("step"));
}

#[test]
fn orbit_path_writes_closed_sidecar() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("earth.json");

    Command::cargo_bin("orbit_path")
        .expect("orbit_path bin")
        .args([
            "--body",
            "Earth",
            "--bodies",
            BODIES_DIR,
            "--steps",
            "90",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["body"], "Earth");
    assert_eq!(json["steps"], 90);
    let points = json["points"].as_array().unwrap();
    assert_eq!(points.len(), 91);
    let first = points.first().unwrap().as_array().unwrap();
    let last = points.last().unwrap().as_array().unwrap();
    for i in 0..2 {
        let a = first[i].as_f64().unwrap();
        let b = last[i].as_f64().unwrap();
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn simulate_reports_final_frame() {
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args([
            "--bodies",
            BODIES_DIR,
            "--settings",
            SETTINGS,
            "--frames",
            "20",
            "--trail-length",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Frame at t = 2.000"))
        .stdout(predicate::str::contains("Mercury"))
        .stdout(predicate::str::contains("Moon"));
}

#[test]
fn simulate_rejects_zero_frames() {
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args(["--bodies", BODIES_DIR, "--frames", "0"])
        .assert()
        .failure();
}
