use kepler_orrery::config::load_bodies;
use kepler_orrery::orbits::{OrbitalElements, Position, position, satellite_position};
use kepler_orrery::sim::{BodySpec, OrbitSystem, SystemError};

fn body(name: &str, a: f64, parent: Option<&str>) -> BodySpec {
    BodySpec {
        name: name.to_string(),
        elements: OrbitalElements::new(a, 0.1, 10.0 * a, 0.3).unwrap(),
        parent: parent.map(str::to_string),
    }
}

#[test]
fn satellites_are_composed_with_parents() {
    // Child listed before its parent to exercise the evaluation order.
    let system = OrbitSystem::new(vec![
        body("Moon", 0.01, Some("Earth")),
        body("Earth", 1.0, None),
        body("Probe", 0.001, Some("Moon")),
    ])
    .expect("system");

    let t = 12.34;
    let earth = system.body("Earth").unwrap().elements;
    let moon = system.body("Moon").unwrap().elements;
    let probe = system.body("Probe").unwrap().elements;

    let positions = system.positions_at(t);
    let names: Vec<&str> = positions.iter().map(|p| p.name).collect();
    assert_eq!(names, ["Moon", "Earth", "Probe"]);

    assert_eq!(positions[1].position, position(&earth, t));
    assert_eq!(positions[0].position, satellite_position(&earth, &moon, t));
    let expected_probe = satellite_position(&earth, &moon, t) + position(&probe, t);
    assert!(positions[2].position.distance_to(&expected_probe) < 1e-15);
    assert_eq!(positions[2].parent, Some("Moon"));

    let direct = system.position_of("Probe", t).unwrap();
    assert!(direct.distance_to(&expected_probe) < 1e-15);
    assert!(system.position_of("Pluto", t).is_none());
}

#[test]
fn duplicate_names_are_rejected() {
    let err = OrbitSystem::new(vec![body("Earth", 1.0, None), body("Earth", 2.0, None)])
        .unwrap_err();
    assert!(matches!(err, SystemError::DuplicateBody(name) if name == "Earth"));
}

#[test]
fn unknown_parents_are_rejected() {
    let err = OrbitSystem::new(vec![body("Moon", 0.01, Some("Earth"))]).unwrap_err();
    match err {
        SystemError::UnknownParent { body, parent } => {
            assert_eq!(body, "Moon");
            assert_eq!(parent, "Earth");
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn parent_cycles_are_rejected() {
    let err = OrbitSystem::new(vec![
        body("A", 1.0, None),
        body("B", 1.0, Some("C")),
        body("C", 1.0, Some("B")),
    ])
    .unwrap_err();
    assert!(matches!(err, SystemError::ParentCycle(_)));

    let err = OrbitSystem::new(vec![body("Self", 1.0, Some("Self"))]).unwrap_err();
    assert!(matches!(err, SystemError::ParentCycle(name) if name == "Self"));
}

#[test]
fn orbit_paths_follow_parent_position() {
    let system = OrbitSystem::new(vec![body("Earth", 1.0, None), body("Moon", 0.01, Some("Earth"))])
        .unwrap();
    let t = 3.0;
    let paths = system.orbit_paths(36, t);
    assert_eq!(paths.len(), 2);

    let (name, earth_path) = &paths[0];
    assert_eq!(*name, "Earth");
    assert_eq!(earth_path.len(), 37);
    assert_eq!(earth_path[0], system.body("Earth").unwrap().elements.path(36)[0]);

    let (_, moon_path) = &paths[1];
    let earth_now = system.position_of("Earth", t).unwrap();
    let moon_elements = system.body("Moon").unwrap().elements;
    for p in moon_path {
        let r = p.distance_to(&earth_now);
        assert!(r >= moon_elements.periapsis_distance() - 1e-12);
        assert!(r <= moon_elements.apoapsis_distance() + 1e-12);
    }
}

#[test]
fn shipped_catalog_builds_a_system() {
    let catalog = load_bodies("configs/bodies").expect("catalog");
    let system = OrbitSystem::from_configs(&catalog).expect("system");
    assert_eq!(system.len(), catalog.len());
    assert!(!system.is_empty());

    let earth = system.position_of("Earth", 100.0).unwrap();
    let moon = system.position_of("Moon", 100.0).unwrap();
    let separation = moon.distance_to(&earth);
    assert!(separation > 0.002 && separation < 0.003, "separation = {separation}");
    assert!(system.positions_at(-250.0).iter().all(|b| b.position.is_finite()));
    assert_ne!(earth, Position::ORIGIN);
}
