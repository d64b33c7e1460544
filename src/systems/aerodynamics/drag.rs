use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{Halted, PhysicsComponent, QuadraticDrag, SpatialComponent};
use crate::physics::ForceCategory;

/// Quadratic drag opposing the velocity relative to the air mass.
///
/// `F = -0.5 ρ Cd A |v_rel| v_rel` with `v_rel = v - wind`. Returns exactly zero when
/// the body moves with the wind.
pub fn calculate_quadratic_drag(velocity: &Vector3<f64>, drag: &QuadraticDrag) -> Vector3<f64> {
    let relative_velocity = velocity - drag.wind;
    let speed = relative_velocity.norm();

    if speed == 0.0 || !speed.is_finite() {
        return Vector3::zeros();
    }

    let k = 0.5 * drag.air_density * drag.drag_coefficient * drag.area;
    -relative_velocity * (k * speed)
}

/// Drag through the centre of mass of every drag-affected body
pub fn quadratic_drag_system(
    mut query: Query<(&QuadraticDrag, &SpatialComponent, &mut PhysicsComponent), Without<Halted>>,
) {
    for (drag, spatial, mut physics) in query.iter_mut() {
        let force = calculate_quadratic_drag(&spatial.velocity, drag);
        physics
            .forces
            .add_force(force, ForceCategory::Aerodynamic, "drag");
    }
}
