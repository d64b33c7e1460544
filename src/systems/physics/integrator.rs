use bevy::prelude::*;

use crate::components::{Halted, PhysicsComponent, SpatialComponent};
use crate::physics::integrate;
use crate::resources::PhysicsConfig;

/// Consume each accumulator once and advance the body by one fixed tick.
///
/// A body whose state or loads are rejected is marked [`Halted`] and keeps its last
/// valid state; other bodies are unaffected.
pub fn physics_integrator_system(
    mut commands: Commands,
    mut query: Query<(Entity, &PhysicsComponent, &mut SpatialComponent, Option<&Name>), Without<Halted>>,
    config: Res<PhysicsConfig>,
) {
    let dt = config.timestep;

    for (entity, physics, mut spatial, name) in query.iter_mut() {
        let net_force = physics.forces.net_force();
        let net_torque = physics.forces.net_torque();

        match integrate(&spatial, physics, &net_force, &net_torque, dt) {
            Ok(next) => *spatial = next,
            Err(err) => {
                error!(
                    "Halting {}: {}",
                    name.map(|n| n.as_str().to_string())
                        .unwrap_or_else(|| format!("{:?}", entity)),
                    err
                );
                commands.entity(entity).insert(Halted {
                    reason: err.to_string(),
                });
            }
        }
    }
}

/// Copy the simulated pose onto the presentation transform
pub fn transform_sync_system(
    mut query: Query<(&SpatialComponent, &mut Transform), Changed<SpatialComponent>>,
) {
    for (spatial, mut transform) in query.iter_mut() {
        *transform = to_transform(spatial);
    }
}

/// f32 presentation transform for a body pose
pub fn to_transform(spatial: &SpatialComponent) -> Transform {
    let p = spatial.position;
    let q = spatial.attitude.quaternion();
    Transform {
        translation: Vec3::new(p.x as f32, p.y as f32, p.z as f32),
        rotation: Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32),
        scale: Vec3::ONE,
    }
}
