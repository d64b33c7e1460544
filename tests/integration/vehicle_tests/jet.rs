use approx::assert_relative_eq;
use nalgebra::Vector3;
use skysim::components::{
    ConfigurationWarned, JetControls, PhysicsComponent, PropulsionState, SpatialComponent,
    ThrustMode,
};
use skysim::resources::{InitialState, JetConfig};

use crate::common::*;

fn weightless_jet(sim: &mut skysim::plugins::FlightSimulation, config: &JetConfig) -> bevy::prelude::Entity {
    let jet = sim.spawn(config.bundle(&InitialState::default()));
    sim.get_mut::<PhysicsComponent>(jet).unwrap().use_gravity = false;
    jet
}

#[test]
fn test_held_throttle_spools_to_full() {
    let mut sim = create_test_simulation();
    let jet = weightless_jet(&mut sim, &create_test_jet());

    sim.get_mut::<JetControls>(jet).unwrap().throttle_up_held = true;
    sim.run_ticks(25);
    assert_relative_eq!(
        sim.get::<PropulsionState>(jet).unwrap().throttle,
        0.5,
        epsilon = 1e-9
    );

    sim.run_ticks(50);
    let state = sim.get::<PropulsionState>(jet).unwrap();
    assert_eq!(state.throttle, 1.0);
    assert_eq!(state.last_thrust, 79_000.0);
}

#[test]
fn test_step_event_is_consumed_once() {
    let mut sim = create_test_simulation();
    let jet = weightless_jet(&mut sim, &create_test_jet());

    sim.get_mut::<JetControls>(jet).unwrap().step_up = true;
    sim.run_ticks(3);
    assert_relative_eq!(
        sim.get::<PropulsionState>(jet).unwrap().throttle,
        0.05,
        epsilon = 1e-12
    );
    assert!(!sim.get::<JetControls>(jet).unwrap().step_up);

    sim.get_mut::<JetControls>(jet).unwrap().step_down = true;
    sim.tick();
    assert_eq!(sim.get::<PropulsionState>(jet).unwrap().throttle, 0.0);
}

#[test]
fn test_afterburner_raises_rating() {
    let mut sim = create_test_simulation();
    let jet = weightless_jet(&mut sim, &create_test_jet());

    sim.get_mut::<PropulsionState>(jet).unwrap().set_throttle(0.5);
    sim.get_mut::<JetControls>(jet).unwrap().toggle_afterburner = true;
    sim.tick();

    let state = sim.get::<PropulsionState>(jet).unwrap();
    assert!(state.afterburner);
    assert_relative_eq!(state.last_thrust, 64_500.0, epsilon = 1e-9);
}

#[test]
fn test_impulse_and_continuous_thrust() {
    let mut sim = create_test_simulation();
    let impulse = weightless_jet(&mut sim, &create_test_jet());
    let continuous = weightless_jet(
        &mut sim,
        &JetConfig {
            thrust_mode: ThrustMode::Continuous,
            ..create_test_jet()
        },
    );
    for jet in [impulse, continuous] {
        sim.get_mut::<PropulsionState>(jet).unwrap().set_throttle(0.5);
    }

    sim.tick();

    let mass = create_test_jet().mass;
    let kick = sim.get::<SpatialComponent>(impulse).unwrap().velocity;
    assert_relative_eq!(kick, Vector3::new(39_500.0 / mass, 0.0, 0.0), epsilon = 1e-9);

    let push = sim.get::<SpatialComponent>(continuous).unwrap().velocity;
    assert_relative_eq!(
        push,
        Vector3::new(39_500.0 * TEST_TIMESTEP / mass, 0.0, 0.0),
        epsilon = 1e-9
    );

    // The nozzle sits on the thrust line: no pitching
    let spatial = sim.get::<SpatialComponent>(impulse).unwrap();
    assert_relative_eq!(spatial.angular_velocity, Vector3::zeros(), epsilon = 1e-12);
}

#[test]
fn test_offset_nozzle_makes_torque() {
    let mut sim = create_test_simulation();
    let mut config = create_test_jet();
    if let Some(nozzle) = config.nozzle.as_mut() {
        nozzle.offset = Vector3::new(-7.0, -1.0, 0.0);
    }
    let jet = weightless_jet(&mut sim, &config);
    sim.get_mut::<PropulsionState>(jet).unwrap().set_throttle(1.0);

    sim.tick();

    // Thrust below the centre of mass pitches the nose up
    let physics = sim.get::<PhysicsComponent>(jet).unwrap();
    assert!(physics.forces.net_torque().z > 0.0);
    assert!(sim.get::<SpatialComponent>(jet).unwrap().angular_velocity.z > 0.0);
}

#[test]
fn test_missing_nozzle_warns_once_and_idles() {
    let mut sim = create_test_simulation();
    let jet = weightless_jet(
        &mut sim,
        &JetConfig {
            nozzle: None,
            ..create_test_jet()
        },
    );
    sim.get_mut::<PropulsionState>(jet).unwrap().set_throttle(1.0);

    sim.run_ticks(5);

    assert!(sim.get::<ConfigurationWarned>(jet).is_some());
    assert_eq!(
        sim.get::<SpatialComponent>(jet).unwrap().velocity,
        Vector3::zeros()
    );
}

#[test]
fn test_missing_nozzle_reported_at_idle() {
    let mut sim = create_test_simulation();
    let jet = weightless_jet(
        &mut sim,
        &JetConfig {
            nozzle: None,
            ..create_test_jet()
        },
    );

    sim.tick();

    assert_eq!(sim.get::<PropulsionState>(jet).unwrap().throttle, 0.0);
    assert!(sim.get::<ConfigurationWarned>(jet).is_some());
}

#[test]
fn test_idle_jet_adds_no_thrust_record() {
    let mut sim = create_test_simulation();
    let jet = weightless_jet(&mut sim, &create_test_jet());

    sim.tick();

    let physics = sim.get::<PhysicsComponent>(jet).unwrap();
    assert!(physics.forces.force_by_label("jet_thrust").is_none());
    assert!(sim.get::<ConfigurationWarned>(jet).is_none());
}
