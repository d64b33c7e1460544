use approx::assert_relative_eq;
use nalgebra::Vector3;
use skysim::components::{
    AircraftControls, Halted, PhysicsComponent, PropulsionState, SpatialComponent,
};
use skysim::physics::ForceCategory;

use crate::common::*;

#[test]
fn test_cruise_contributions() {
    let mut sim = create_test_simulation();
    let aircraft = sim.spawn(create_test_aircraft().bundle(&level_start(1000.0, 60.0)));

    sim.tick();

    let physics = sim.get::<PhysicsComponent>(aircraft).unwrap();
    let forces = &physics.forces;
    let thrust = forces.force_by_label("thrust").unwrap();
    let lift = forces.force_by_label("lift").unwrap();

    assert_relative_eq!(thrust, Vector3::new(140_000.0, 0.0, 0.0), epsilon = 1e-6);
    assert_relative_eq!(lift, Vector3::new(0.0, 84_000.0, 0.0), epsilon = 1e-6);
    for label in ["gravity", "drag", "side_slip", "velocity_alignment"] {
        assert!(forces.force_by_label(label).is_some(), "missing {}", label);
    }
    assert_eq!(
        forces.force_by_category(&ForceCategory::Stabilization),
        forces.force_by_label("velocity_alignment").unwrap()
    );
    assert_physics_valid(physics);
}

#[test]
fn test_throttle_input_ramps_engine() {
    let mut sim = create_test_simulation();
    let aircraft = sim.spawn(create_test_aircraft().bundle(&level_start(1000.0, 60.0)));

    sim.get_mut::<AircraftControls>(aircraft).unwrap().throttle = 1.0;
    sim.run_ticks(10);
    let throttle = sim.get::<PropulsionState>(aircraft).unwrap().throttle;
    assert_relative_eq!(throttle, 0.9, epsilon = 1e-9);

    sim.run_ticks(50);
    let state = sim.get::<PropulsionState>(aircraft).unwrap();
    assert_eq!(state.throttle, 1.0);
    assert_relative_eq!(state.last_thrust, 200_000.0, epsilon = 1e-6);
}

#[test]
fn test_pitch_stick_raises_nose() {
    let mut sim = create_test_simulation();
    let aircraft = sim.spawn(create_test_aircraft().bundle(&level_start(1000.0, 60.0)));

    sim.get_mut::<AircraftControls>(aircraft).unwrap().pitch = 1.0;
    sim.run_ticks(25);

    let spatial = sim.get::<SpatialComponent>(aircraft).unwrap();
    assert!(spatial.angular_velocity.z > 0.0);
    assert!(spatial.forward().y > 0.0, "nose should be above the horizon");

    let physics = sim.get::<PhysicsComponent>(aircraft).unwrap();
    assert!(physics.forces.force_by_label("pitch_control").is_some());
    assert!(physics.forces.force_by_label("roll_control").is_none());
}

#[test]
fn test_full_stick_rate_change_per_tick() {
    let mut sim = create_test_simulation();
    let aircraft = sim.spawn(create_test_aircraft().bundle(&level_start(1000.0, 60.0)));
    sim.get_mut::<PhysicsComponent>(aircraft).unwrap().angular_damping = 0.0;

    sim.get_mut::<AircraftControls>(aircraft).unwrap().yaw = 1.0;
    sim.tick();
    let yaw_rate = sim.get::<SpatialComponent>(aircraft).unwrap().angular_velocity;
    assert_relative_eq!(yaw_rate, Vector3::new(0.0, -0.25, 0.0), epsilon = 1e-9);

    *sim.get_mut::<AircraftControls>(aircraft).unwrap() = AircraftControls {
        pitch: 1.0,
        ..Default::default()
    };
    sim.get_mut::<SpatialComponent>(aircraft).unwrap().angular_velocity = Vector3::zeros();
    sim.tick();
    let pitch_rate = sim.get::<SpatialComponent>(aircraft).unwrap().angular_velocity;
    assert_relative_eq!(pitch_rate, Vector3::new(0.0, 0.0, 0.025), epsilon = 1e-9);
}

#[test]
fn test_angular_damping_settles_rotation() {
    let mut sim = create_test_simulation();
    let aircraft = sim.spawn(create_test_aircraft().bundle(&level_start(1000.0, 60.0)));
    sim.get_mut::<SpatialComponent>(aircraft)
        .unwrap()
        .angular_velocity = Vector3::new(1.0, 0.0, 0.0);

    sim.run_ticks(250);

    let spatial = sim.get::<SpatialComponent>(aircraft).unwrap();
    assert!(spatial.angular_velocity.norm() < 0.01);
}

#[test]
fn test_corrupt_aircraft_is_halted_alone() {
    let mut sim = create_test_simulation();
    let broken = sim.spawn(create_test_aircraft().bundle(&level_start(1000.0, 60.0)));
    let healthy = sim.spawn(create_test_aircraft().bundle(&level_start(1000.0, 60.0)));

    sim.get_mut::<SpatialComponent>(broken).unwrap().velocity.x = f64::NAN;
    sim.run_ticks(2);

    assert!(sim.get::<Halted>(broken).is_some());
    assert!(sim.get::<Halted>(healthy).is_none());

    let frozen = sim.get::<SpatialComponent>(broken).unwrap().position;
    sim.run_ticks(5);
    assert_eq!(sim.get::<SpatialComponent>(broken).unwrap().position, frozen);
    assert_spatial_valid(sim.get::<SpatialComponent>(healthy).unwrap());
}
