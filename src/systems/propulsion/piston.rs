use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AircraftControls, Halted, PhysicsComponent, PistonEngine, PropulsionState, SpatialComponent,
};
use crate::physics::ForceCategory;
use crate::resources::PhysicsConfig;

/// Ramp the throttle by `command * throttle_rate * dt`, clamped to [0, 1].
///
/// `command` is the throttle lever movement in [-1, 1]; values outside are clamped.
pub fn update_piston_throttle(
    state: &mut PropulsionState,
    engine: &PistonEngine,
    command: f64,
    dt: f64,
) {
    let command = if command.is_finite() {
        command.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    state.set_throttle(state.throttle + command * engine.throttle_rate * dt);
}

/// Thrust along the body's forward axis, through the centre of mass
pub fn calculate_piston_thrust(
    engine: &PistonEngine,
    state: &PropulsionState,
    forward: &Vector3<f64>,
) -> Vector3<f64> {
    forward * (state.throttle * engine.max_thrust)
}

pub fn piston_throttle_system(
    mut query: Query<(&AircraftControls, &PistonEngine, &mut PropulsionState), Without<Halted>>,
    config: Res<PhysicsConfig>,
) {
    let dt = config.timestep;
    for (controls, engine, mut state) in query.iter_mut() {
        update_piston_throttle(&mut state, engine, controls.throttle, dt);
    }
}

pub fn piston_thrust_system(
    mut query: Query<
        (&PistonEngine, &mut PropulsionState, &SpatialComponent, &mut PhysicsComponent),
        Without<Halted>,
    >,
) {
    for (engine, mut state, spatial, mut physics) in query.iter_mut() {
        let thrust = calculate_piston_thrust(engine, &state, &spatial.forward());
        state.last_thrust = thrust.norm();
        physics
            .forces
            .add_force(thrust, ForceCategory::Propulsive, "thrust");
    }
}
