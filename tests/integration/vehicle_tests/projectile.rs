use approx::assert_relative_eq;
use nalgebra::Vector3;
use skysim::components::{ConstantForce, PhysicsComponent, SpatialComponent, TrajectoryPreview};
use skysim::resources::{InitialState, LauncherConfig, ProjectileConfig};
use skysim::systems::predict_vacuum_trajectory;

use crate::common::*;

#[test]
fn test_vacuum_flight_tracks_closed_form() {
    let mut sim = create_test_simulation();
    let initial = InitialState {
        velocity: Vector3::new(10.0, 10.0, 0.0),
        ..Default::default()
    };
    let ball = sim.spawn(vacuum_projectile().bundle(&initial));

    sim.run_ticks(50);

    let spatial = sim.get::<SpatialComponent>(ball).unwrap();
    let g = Vector3::new(0.0, -9.81, 0.0);
    let expected = predict_vacuum_trajectory(&Vector3::zeros(), &initial.velocity, &g, 1.0, 2)[1];

    // Semi-implicit Euler leads the exact parabola by g dt t / 2 in height
    let lead = 0.5 * 9.81 * TEST_TIMESTEP * 1.0;
    assert_relative_eq!(spatial.position.x, expected.x, epsilon = 1e-9);
    assert_relative_eq!(spatial.position.y, expected.y - lead, epsilon = 1e-6);
    assert_relative_eq!(spatial.velocity.y, 10.0 - 9.81, epsilon = 1e-9);
}

#[test]
fn test_drag_shortens_flight() {
    let mut sim = create_test_simulation();
    let initial = InitialState {
        velocity: Vector3::new(20.0, 20.0, 0.0),
        ..Default::default()
    };
    let vacuum = sim.spawn(vacuum_projectile().bundle(&initial));
    let draggy = sim.spawn(ProjectileConfig::default().bundle(&initial));

    let mut last_vx = 20.0;
    for _ in 0..100 {
        sim.tick();
        let vx = sim.get::<SpatialComponent>(draggy).unwrap().velocity.x;
        assert!(vx < last_vx, "drag must keep slowing the ball");
        last_vx = vx;
    }

    let a = sim.get::<SpatialComponent>(vacuum).unwrap();
    let b = sim.get::<SpatialComponent>(draggy).unwrap();
    assert!(b.position.x < a.position.x);
    assert!(b.position.y < a.position.y);
    assert_spatial_valid(b);
}

#[test]
fn test_falling_ball_reaches_terminal_velocity() {
    let mut sim = create_test_simulation();
    let config = ProjectileConfig::default();
    let ball = sim.spawn(config.bundle(&level_start(5000.0, 0.0)));

    sim.run_ticks(1500);

    let drag = config.drag();
    let terminal =
        (2.0 * config.mass * 9.81 / (drag.air_density * drag.drag_coefficient * drag.area)).sqrt();
    let spatial = sim.get::<SpatialComponent>(ball).unwrap();
    assert_relative_eq!(-spatial.velocity.y, terminal, max_relative = 1e-3);
}

#[test]
fn test_drag_record_is_labelled() {
    let mut sim = create_test_simulation();
    let ball = sim.spawn(ProjectileConfig::default().bundle(&level_start(10.0, 30.0)));

    sim.tick();

    let physics = sim.get::<PhysicsComponent>(ball).unwrap();
    let drag = physics.forces.force_by_label("drag").unwrap();
    let gravity = physics.forces.force_by_label("gravity").unwrap();
    assert!(drag.x < 0.0);
    assert_relative_eq!(gravity, Vector3::new(0.0, -9.81, 0.0));
    assert_relative_eq!(physics.forces.net_record().force, drag + gravity);
}

#[test]
fn test_launcher_preview_and_fire() {
    let mut sim = create_test_simulation();
    let config = LauncherConfig {
        initial: InitialState {
            position: Vector3::new(0.0, 1.0, 0.0),
            ..Default::default()
        },
        ..Default::default()
    };
    let launcher_entity = config.spawn_into(sim.world_mut());

    sim.frame();

    let preview = sim.get::<TrajectoryPreview>(launcher_entity).unwrap();
    assert_eq!(preview.samples.len(), config.launcher.preview_samples);
    assert_position_eq(&preview.samples[0], &Vector3::new(0.0, 1.0, 0.0), 1e-12);

    // The round follows the preview while drag is negligible
    let spatial = sim.get::<SpatialComponent>(launcher_entity).unwrap().clone();
    let mut round = config.launcher.projectile_bundle(&spatial);
    round.drag.drag_coefficient = 0.0;
    let expected = preview.samples[10];
    let shot = sim.spawn(round);

    sim.run_ticks(50);

    let flown = sim.get::<SpatialComponent>(shot).unwrap();
    let lead = 0.5 * 9.81 * TEST_TIMESTEP * 1.0;
    assert_relative_eq!(flown.position.x, expected.x, epsilon = 1e-9);
    assert_relative_eq!(flown.position.y, expected.y - lead, epsilon = 1e-6);
}

#[test]
fn test_constant_crosswind_pushes_sideways() {
    let mut sim = create_test_simulation();
    let ball = sim.spawn(vacuum_projectile().bundle(&level_start(100.0, 0.0)));
    sim.world_mut()
        .entity_mut(ball)
        .insert(ConstantForce::new(Vector3::new(0.0, 0.0, 2.0), "wind"));

    sim.run_ticks(10);

    let spatial = sim.get::<SpatialComponent>(ball).unwrap();
    assert_relative_eq!(spatial.velocity.z, 2.0 * 10.0 * TEST_TIMESTEP, epsilon = 1e-12);
    assert_relative_eq!(spatial.velocity.y, -9.81 * 10.0 * TEST_TIMESTEP, epsilon = 1e-12);

    let physics = sim.get::<PhysicsComponent>(ball).unwrap();
    assert!(physics.forces.force_by_label("wind").is_some());
}
