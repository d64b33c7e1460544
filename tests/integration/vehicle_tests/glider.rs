use approx::assert_relative_eq;
use nalgebra::Vector3;
use skysim::components::{
    AeroSample, ConfigurationWarned, Halted, PhysicsComponent, SpatialComponent, Wing,
};
use skysim::resources::{GliderConfig, InitialState};

use crate::common::*;

#[test]
fn test_level_glider_samples_airflow() {
    let mut sim = create_test_simulation();
    let glider = sim.spawn(create_test_glider().bundle(&level_start(200.0, 30.0)));

    sim.tick();

    let sample = sim.get::<AeroSample>(glider).unwrap();
    assert_relative_eq!(sample.airspeed, 30.0, epsilon = 1e-12);
    assert_relative_eq!(sample.alpha, 0.0, epsilon = 1e-12);
    assert_relative_eq!(sample.flow_direction, Vector3::new(-1.0, 0.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(sample.drag_coefficient, Wing::default().cd0, epsilon = 1e-12);

    let physics = sim.get::<PhysicsComponent>(glider).unwrap();
    let wing = physics.forces.force_by_label("wing").unwrap();
    assert!(wing.x < 0.0);
}

#[test]
fn test_nose_up_glider_gains_lift() {
    let mut sim = create_test_simulation();
    let initial = InitialState {
        pitch_deg: 5.0,
        ..level_start(200.0, 30.0)
    };
    let glider = sim.spawn(create_test_glider().bundle(&initial));

    sim.tick();

    let sample = sim.get::<AeroSample>(glider).unwrap();
    assert_relative_eq!(sample.alpha, 5f64.to_radians(), epsilon = 1e-9);
    assert!(sample.lift > 0.0);

    // Lift beats the weight at this speed
    let spatial = sim.get::<SpatialComponent>(glider).unwrap();
    assert!(spatial.velocity.y > 0.0);
}

#[test]
fn test_glider_flight_stays_finite() {
    let mut sim = create_test_simulation();
    let glider = sim.spawn(create_test_glider().bundle(&level_start(500.0, 25.0)));

    for _ in 0..500 {
        sim.tick();
        assert_spatial_valid(sim.get::<SpatialComponent>(glider).unwrap());
    }
    assert!(sim.get::<Halted>(glider).is_none());
}

#[test]
fn test_glider_without_mount_just_falls() {
    let mut sim = create_test_simulation();
    let config = GliderConfig {
        wing: Wing {
            mount: None,
            ..Default::default()
        },
        ..Default::default()
    };
    let glider = sim.spawn(config.bundle(&level_start(100.0, 0.0)));

    sim.run_ticks(3);

    assert!(sim.get::<ConfigurationWarned>(glider).is_some());
    assert!(sim.get::<Halted>(glider).is_none());

    let physics = sim.get::<PhysicsComponent>(glider).unwrap();
    assert!(physics.forces.force_by_label("wing").is_none());
    let spatial = sim.get::<SpatialComponent>(glider).unwrap();
    assert_relative_eq!(spatial.velocity.y, -9.81 * 3.0 * TEST_TIMESTEP, epsilon = 1e-9);
}
