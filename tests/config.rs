use std::fs;

use kepler_orrery::config::{
    BodyConfig, ConfigError, SimulationConfig, load_bodies, load_simulation,
};
use kepler_orrery::orbits::ElementsError;

#[test]
fn shipped_catalog_contains_inner_planets_and_moon() {
    let bodies = load_bodies("configs/bodies").expect("bodies catalog");
    assert!(bodies.len() >= 5);
    for name in ["Mercury", "Venus", "Earth", "Mars", "Moon"] {
        assert!(bodies.iter().any(|b| b.name == name), "missing {name}");
    }
    let moon = bodies.iter().find(|b| b.name == "Moon").unwrap();
    assert_eq!(moon.parent.as_deref(), Some("Earth"));

    let mercury = bodies.iter().find(|b| b.name == "Mercury").unwrap();
    let elements = mercury.elements().expect("mercury elements");
    assert!((elements.argument_of_periapsis() - 29.0_f64.to_radians()).abs() < 1e-12);
    assert_eq!(elements.periapsis_time(), 0.0);
}

#[test]
fn directory_records_are_sorted_by_file_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("b.toml"),
        "name = \"Second\"\nsemi_major_axis = 2.0\neccentricity = 0.1\nperiod = 20.0\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("a.toml"),
        "name = \"First\"\nsemi_major_axis = 1.0\neccentricity = 0.0\nperiod = 10.0\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let bodies = load_bodies(dir.path()).expect("directory catalog");
    let names: Vec<&str> = bodies.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["First", "Second"]);
    assert_eq!(bodies[0].argument_of_periapsis_deg, 0.0);
    assert_eq!(bodies[0].parent, None);
}

#[test]
fn yaml_catalog_loads_with_parents() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bodies.yaml");
    fs::write(
        &path,
        r#"
- name: Jupiter
  semi_major_axis: 5.2
  eccentricity: 0.0489
  period: 4332.59
  argument_of_periapsis_deg: 273.9
- name: Io
  parent: Jupiter
  semi_major_axis: 0.00282
  eccentricity: 0.0041
  period: 1.769
  periapsis_time: 0.25
"#,
    )
    .unwrap();

    let bodies = load_bodies(&path).expect("yaml catalog");
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[1].parent.as_deref(), Some("Jupiter"));
    assert_eq!(bodies[1].periapsis_time, 0.25);
}

#[test]
fn invalid_elements_are_rejected_at_load_time() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("comet.toml");
    fs::write(
        &path,
        "name = \"Comet\"\nsemi_major_axis = 3.0\neccentricity = 1.0\nperiod = 100.0\n",
    )
    .unwrap();

    match load_bodies(&path) {
        Err(ConfigError::InvalidElements { body, source }) => {
            assert_eq!(body, "Comet");
            assert_eq!(source, ElementsError::InvalidEccentricity(1.0));
        }
        other => panic!("expected invalid elements, got {other:?}"),
    }
}

#[test]
fn body_config_reports_invalid_period() {
    let body = BodyConfig {
        name: "Broken".to_string(),
        semi_major_axis: 1.0,
        eccentricity: 0.1,
        period: 0.0,
        argument_of_periapsis_deg: 0.0,
        periapsis_time: 0.0,
        parent: None,
    };
    let err = body.elements().unwrap_err();
    assert!(err.to_string().contains("Broken"));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_bodies("configs/does-not-exist.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn malformed_toml_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "name = \"Bad\"\nsemi_major_axis = \"far\"\n").unwrap();
    assert!(matches!(load_bodies(&path), Err(ConfigError::Toml(_))));
}

#[test]
fn shipped_simulation_settings_match_defaults() {
    let settings = load_simulation("configs/simulation.toml").expect("simulation settings");
    assert_eq!(settings, SimulationConfig::default());
    assert_eq!(settings.trail_length, 1_000);
    assert_eq!(settings.scale, 400.0);
    assert_eq!((settings.width, settings.height), (800, 800));
}

#[test]
fn partial_simulation_settings_fill_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sim.yaml");
    fs::write(&path, "time_step: 2.5\nzoom: 3.0\n").unwrap();
    let settings = load_simulation(&path).expect("yaml settings");
    assert_eq!(settings.time_step, 2.5);
    assert_eq!(settings.zoom, 3.0);
    assert_eq!(settings.trail_length, 1_000);
    assert_eq!(settings.start_time, 0.0);
}
