use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{ConstantForce, Halted, PhysicsComponent, SpatialComponent};
use crate::physics::ForceCategory;
use crate::resources::PhysicsConfig;

/// Weight of a body: `m g`
pub fn gravity_force(mass: f64, gravity: &Vector3<f64>) -> Vector3<f64> {
    gravity * mass
}

/// Clear last tick's contributions and seed the accumulator with gravity.
///
/// Runs first in every tick so no model ever sees stale forces.
pub fn force_reset_system(
    mut query: Query<(&mut PhysicsComponent, &SpatialComponent), Without<Halted>>,
    config: Res<PhysicsConfig>,
) {
    for (mut physics, spatial) in query.iter_mut() {
        physics.clear_forces(spatial);

        if physics.use_gravity {
            let weight = gravity_force(physics.mass, &config.gravity);
            physics
                .forces
                .add_force(weight, ForceCategory::Gravitational, "gravity");
        }
    }
}

/// Steady external loads, applied through the centre of mass every tick
pub fn constant_force_system(
    mut query: Query<(&ConstantForce, &mut PhysicsComponent), Without<Halted>>,
) {
    for (constant, mut physics) in query.iter_mut() {
        physics
            .forces
            .add_force(constant.force, constant.category.clone(), constant.label.clone());
    }
}
