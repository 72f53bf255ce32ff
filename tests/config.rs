use std::path::PathBuf;

use nbsim::{load_scenario, parse_scenario, ConfigError, ExecutorConfig, ExecutorKind, NVec3};
use nbsim::{Scenario, SimulationError, StepExecutor};

fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(name)
}

#[test]
fn full_scenario_parses() {
    let cfg = parse_scenario(
        r#"
engine:
  executor: "pool"
  workers: 3
parameters:
  dt: 0.005
  G: 2.0
  check_singularities: false
bodies:
  - x: [1.0, 2.0, 3.0]
    v: [0.0, 0.5, 0.0]
    m: 4.0
"#,
    )
    .unwrap();

    assert_eq!(cfg.engine.executor, ExecutorConfig::Pool);
    assert_eq!(cfg.engine.workers, Some(3));
    assert_eq!(cfg.parameters.dt, 0.005);
    assert_eq!(cfg.parameters.g, 2.0);
    assert!(!cfg.parameters.check_singularities);
    assert_eq!(cfg.bodies.len(), 1);
    assert_eq!(cfg.bodies[0].m, 4.0);
}

#[test]
fn missing_sections_take_defaults() {
    let cfg = parse_scenario(
        r#"
bodies:
  - x: [0.0, 0.0, 0.0]
    v: [0.0, 0.0, 0.0]
    m: 1.0
"#,
    )
    .unwrap();

    assert_eq!(cfg.engine.executor, ExecutorConfig::Pool);
    assert_eq!(cfg.engine.workers, None);
    assert_eq!(cfg.parameters.dt, 0.01);
    assert_eq!(cfg.parameters.g, 1.0);
    assert!(cfg.parameters.check_singularities);
}

#[test]
fn h0_is_accepted_for_dt() {
    let cfg = parse_scenario(
        r#"
parameters:
  h0: 0.02
bodies:
  - { x: [0, 0, 0], v: [0, 0, 0], m: 1 }
"#,
    )
    .unwrap();

    assert_eq!(cfg.parameters.dt, 0.02);
}

#[test]
fn bare_body_list_in_json_layout_parses() {
    let cfg = parse_scenario(
        r#"[
  {"Mass": 10, "Pos": {"X": 1, "Y": 2, "Z": 3}, "Vel": {"X": 0, "Y": -1, "Z": 0}},
  {"Mass": 0.5, "Pos": {"X": -1, "Y": 0, "Z": 0}, "Vel": {"X": 0, "Y": 0, "Z": 0.25}}
]"#,
    )
    .unwrap();

    let scenario = Scenario::build(cfg).unwrap();
    assert_eq!(scenario.state.len(), 2);
    assert_eq!(scenario.state.bodies[0].mass, 10.0);
    assert_eq!(scenario.state.bodies[0].position, NVec3::new(1.0, 2.0, 3.0));
    assert_eq!(scenario.state.bodies[1].velocity, NVec3::new(0.0, 0.0, 0.25));
    assert_eq!(scenario.parameters.dt, 0.01);
}

#[test]
fn bad_parameter_value_is_reported_by_name() {
    let err = parse_scenario(
        r#"
parameters:
  dt: fast
bodies:
  - { x: [0, 0, 0], v: [0, 0, 0], m: 1 }
"#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
    let msg = err.to_string();
    assert!(msg.contains("dt"), "{msg}");
    assert!(!msg.contains("untagged"), "{msg}");
}

#[test]
fn body_without_mass_is_reported_by_name() {
    let full = parse_scenario(
        r#"
bodies:
  - { x: [0, 0, 0], v: [0, 0, 0] }
"#,
    )
    .unwrap_err();
    assert!(full.to_string().contains("missing field `m`"), "{full}");

    let bare = parse_scenario(r#"[{"Pos": {"X": 0, "Y": 0, "Z": 0}, "Vel": {"X": 0, "Y": 0, "Z": 0}}]"#)
        .unwrap_err();
    assert!(bare.to_string().contains("missing field `m`"), "{bare}");
}

#[test]
fn wrong_vector_length_is_reported() {
    let cfg = parse_scenario(
        r#"
bodies:
  - x: [0.0, 0.0]
    v: [0.0, 0.0, 0.0]
    m: 1.0
"#,
    )
    .unwrap();

    match Scenario::build(cfg) {
        Err(ConfigError::Dimension { index, field, len }) => {
            assert_eq!((index, field, len), (0, "x", 2));
        }
        other => panic!("expected a dimension error, got {:?}", other.map(|s| s.state)),
    }
}

#[test]
fn non_positive_dt_is_rejected() {
    let cfg = parse_scenario(
        r#"
parameters:
  dt: 0.0
bodies:
  - { x: [0, 0, 0], v: [0, 0, 0], m: 1 }
"#,
    )
    .unwrap();

    assert!(matches!(Scenario::build(cfg), Err(ConfigError::Invalid(_))));
}

#[test]
fn empty_body_list_is_rejected() {
    let cfg = parse_scenario("bodies: []").unwrap();
    assert!(matches!(Scenario::build(cfg), Err(ConfigError::Invalid(_))));
}

#[test]
fn coincident_bodies_are_rejected_unless_checks_are_off() {
    let text = |check: bool| {
        format!(
            r#"
parameters:
  check_singularities: {check}
bodies:
  - {{ x: [1, 1, 1], v: [0, 0, 0], m: 1 }}
  - {{ x: [1, 1, 1], v: [0, 0, 0], m: 1 }}
"#
        )
    };

    let checked = Scenario::build(parse_scenario(&text(true)).unwrap());
    assert!(matches!(
        checked,
        Err(ConfigError::Precondition(SimulationError::Singularity { first: 0, second: 1 }))
    ));

    let unchecked = Scenario::build(parse_scenario(&text(false)).unwrap());
    assert!(unchecked.is_ok());
}

#[test]
fn executor_settings_are_carried_into_the_scenario() {
    let cfg = parse_scenario(
        r#"
engine:
  workers: 2
bodies:
  - { x: [0, 0, 0], v: [0, 0, 0], m: 1 }
  - { x: [1, 0, 0], v: [0, 1, 0], m: 1 }
  - { x: [2, 0, 0], v: [0, 1, 0], m: 1 }
"#,
    )
    .unwrap();

    let scenario = Scenario::build(cfg).unwrap();
    assert_eq!(scenario.executor, ExecutorKind::Pool { workers: 2 });

    let mut sim = scenario.into_simulation().unwrap();
    assert_eq!(sim.executor().workers(), 2);
    assert_eq!(sim.step().unwrap().len(), 3);
}

#[test]
fn serial_executor_can_be_selected() {
    let cfg = parse_scenario(
        r#"
engine:
  executor: "serial"
bodies:
  - { x: [0, 0, 0], v: [1, 0, 0], m: 1 }
"#,
    )
    .unwrap();

    let scenario = Scenario::build(cfg).unwrap();
    assert_eq!(scenario.executor, ExecutorKind::Serial);
    assert_eq!(scenario.into_simulation().unwrap().executor().workers(), 1);
}

#[test]
fn bundled_scenarios_load_and_agree() {
    let yaml = Scenario::build(load_scenario(&scenario_path("planets.yaml")).unwrap()).unwrap();
    let json = Scenario::build(load_scenario(&scenario_path("planets.json")).unwrap()).unwrap();

    assert_eq!(yaml.state, json.state);
    assert_eq!(yaml.parameters, json.parameters);

    let two = load_scenario(&scenario_path("two_body.yaml")).unwrap();
    assert_eq!(two.bodies.len(), 2);
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(
        load_scenario(&scenario_path("does_not_exist.yaml")),
        Err(ConfigError::Io(_))
    ));
}
