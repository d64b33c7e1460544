use nalgebra::{Matrix3, Vector3};
use skysim::{components::PhysicsComponent, plugins::FlightSimulation, resources::PhysicsConfig};

pub const TEST_TIMESTEP: f64 = 0.02;

pub fn create_test_physics_config() -> PhysicsConfig {
    PhysicsConfig {
        timestep: TEST_TIMESTEP,
        max_substeps: 8,
        gravity: Vector3::new(0.0, -9.81, 0.0),
    }
}

/// Driver at 50 Hz with standard gravity
pub fn create_test_simulation() -> FlightSimulation {
    FlightSimulation::new(create_test_physics_config())
}

/// Creates a physics component with standard test mass and inertia
pub fn create_test_physics() -> PhysicsComponent {
    PhysicsComponent::new(
        1000.0,
        Matrix3::from_diagonal(&Vector3::new(1000.0, 2000.0, 1500.0)),
    )
}

/// Heading about world up [rad] of a body-forward vector, zero along +X
pub fn heading(forward: &Vector3<f64>) -> f64 {
    (-forward.z).atan2(forward.x)
}
