use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{
    Mount, PhysicsComponent, ProjectileBundle, QuadraticDrag, RigidBodyBundle, SpatialComponent,
};
use crate::systems::trajectory::launch_velocity;

/// Steepest elevation a launcher accepts [deg]
pub const MAX_ELEVATION_DEG: f64 = 85.0;

/// A fixed launcher that previews and fires drag-affected rounds
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Launcher {
    /// Launch point; its forward/up axes span the firing plane
    pub mount: Mount,
    /// [m/s]
    pub muzzle_speed: f64,
    /// Elevation above the mount's forward axis [deg], clamped to [0, 85]
    pub elevation_deg: f64,
    /// Round mass [kg]
    pub round_mass: f64,
    pub round_drag: QuadraticDrag,
    /// Preview sample spacing [s]
    pub preview_time_step: f64,
    /// Preview sample count, at least 2
    pub preview_samples: usize,
}

impl Default for Launcher {
    fn default() -> Self {
        Self {
            mount: Mount::default(),
            muzzle_speed: 20.0,
            elevation_deg: 20.0,
            round_mass: 1.0,
            round_drag: QuadraticDrag::default(),
            preview_time_step: 0.1,
            preview_samples: 30,
        }
    }
}

impl Launcher {
    /// World launch point and muzzle velocity for a launcher mounted on `spatial`
    pub fn launch_state(&self, spatial: &SpatialComponent) -> (Vector3<f64>, Vector3<f64>) {
        let (forward, up, _) = self.mount.world_axes(spatial);
        let velocity = launch_velocity(&forward, &up, self.muzzle_speed, self.elevation_deg);
        (self.mount.world_position(spatial), velocity)
    }

    /// A round leaving the muzzle now, ready for the host to spawn
    pub fn projectile_bundle(&self, spatial: &SpatialComponent) -> ProjectileBundle {
        let (position, velocity) = self.launch_state(spatial);
        ProjectileBundle {
            body: RigidBodyBundle::new(
                SpatialComponent {
                    position,
                    velocity,
                    ..Default::default()
                },
                PhysicsComponent::point_mass(self.round_mass),
            ),
            drag: self.round_drag.clone(),
            name: Name::new("projectile"),
        }
    }
}

/// Vacuum trajectory samples regenerated every frame for an external line renderer
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPreview {
    pub samples: Vec<Vector3<f64>>,
}
