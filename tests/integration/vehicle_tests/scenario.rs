use bevy::prelude::{Name, Transform};
use nalgebra::Vector3;
use skysim::components::{
    Halted, PhysicsComponent, PropulsionState, SpatialComponent, TrajectoryPreview,
};
use skysim::plugins::FlightSimulation;
use skysim::resources::SimulationConfig;

use crate::common::*;

const MIXED_SCENARIO: &str = r#"
physics:
  timestep: 0.02
vehicles:
  - type: projectile
    name: ball
    initial:
      position: [0.0, 1.0, 0.0]
      velocity: [15.0, 15.0, 0.0]
  - type: glider
    initial:
      position: [0.0, 300.0, 0.0]
      velocity: [25.0, 0.0, 0.0]
  - type: aircraft
    initial:
      position: [0.0, 1000.0, 0.0]
      velocity: [60.0, 0.0, 0.0]
  - type: jet
    initial:
      position: [0.0, 2000.0, 0.0]
  - type: quadrotor
    initial:
      position: [0.0, 20.0, 0.0]
launchers:
  - name: mortar
    initial:
      position: [10.0, 0.0, 0.0]
    launcher:
      muzzle_speed: 30.0
      elevation_deg: 60.0
      preview_samples: 12
"#;

#[test]
fn test_mixed_scenario_runs_clean() {
    let config = SimulationConfig::from_yaml_str(MIXED_SCENARIO).unwrap();
    let (mut sim, entities) = FlightSimulation::from_config(&config);
    assert_eq!(entities.len(), 6);

    let ticks = sim.advance(1.0);
    assert_eq!(ticks, 8, "one second of backlog is capped at max_substeps");
    sim.run_ticks(42);
    sim.frame();

    for &entity in &entities[..5] {
        assert!(sim.get::<Halted>(entity).is_none());
        assert_spatial_valid(sim.get::<SpatialComponent>(entity).unwrap());
        assert_physics_valid(sim.get::<PhysicsComponent>(entity).unwrap());
    }

    let names: Vec<&str> = entities
        .iter()
        .map(|&e| sim.get::<Name>(e).unwrap().as_str())
        .collect();
    assert_eq!(names, ["ball", "glider", "aircraft", "jet", "quadrotor", "mortar"]);

    // The jet idles until commanded
    let jet = sim.get::<PropulsionState>(entities[3]).unwrap();
    assert_eq!(jet.throttle, 0.0);

    let preview = sim.get::<TrajectoryPreview>(entities[5]).unwrap();
    assert_eq!(preview.samples.len(), 12);
    assert_position_eq(&preview.samples[0], &Vector3::new(10.0, 0.0, 0.0), 1e-12);
}

#[test]
fn test_scenario_file_round_trip() {
    let config = SimulationConfig::from_yaml_str(MIXED_SCENARIO).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.yaml");
    std::fs::write(&path, config.to_yaml_string().unwrap()).unwrap();

    let loaded = SimulationConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_transform_follows_simulated_pose() {
    let mut sim = create_test_simulation();
    let ball = sim.spawn(vacuum_projectile().bundle(&level_start(5.0, 10.0)));
    sim.world_mut()
        .entity_mut(ball)
        .insert(Transform::default());

    sim.run_ticks(10);

    let position = sim.get::<SpatialComponent>(ball).unwrap().position;
    let transform = sim.get::<Transform>(ball).unwrap();
    assert!((transform.translation.x as f64 - position.x).abs() < 1e-4);
    assert!((transform.translation.y as f64 - position.y).abs() < 1e-4);
    assert_eq!(transform.rotation, bevy::prelude::Quat::IDENTITY);
}

#[test]
fn test_halted_body_stays_frozen() {
    let mut sim = create_test_simulation();
    let healthy = sim.spawn(vacuum_projectile().bundle(&level_start(100.0, 0.0)));
    let mut broken = vacuum_projectile().bundle(&level_start(100.0, 0.0));
    broken.body.physics.mass = -1.0;
    let broken = sim.spawn(broken);

    sim.run_ticks(5);

    let halted = sim.get::<Halted>(broken).expect("invalid mass halts the body");
    assert!(!halted.reason.is_empty());
    assert_eq!(
        sim.get::<SpatialComponent>(broken).unwrap().position,
        Vector3::new(0.0, 100.0, 0.0)
    );
    assert!(sim.get::<Halted>(healthy).is_none());
    assert!(sim.get::<SpatialComponent>(healthy).unwrap().position.y < 100.0);
}
