use bevy::prelude::*;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::SpatialComponent;
use crate::physics::{ForceAccumulator, ForceCategory};

/// Mass properties and the per-tick force accumulator of a rigid body
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub mass: f64,
    pub inertia: Matrix3<f64>,
    pub inertia_inv: Matrix3<f64>,
    /// Centre of mass offset from the body origin, body frame [m]
    pub center_of_mass: Vector3<f64>,
    /// Linear damping coefficient [1/s]
    pub linear_damping: f64,
    /// Angular damping coefficient [1/s]
    pub angular_damping: f64,
    pub use_gravity: bool,
    pub forces: ForceAccumulator,
}

impl Default for PhysicsComponent {
    fn default() -> Self {
        Self::new(1.0, Matrix3::identity())
    }
}

impl PhysicsComponent {
    pub fn new(mass: f64, inertia: Matrix3<f64>) -> Self {
        let inertia_inv = inertia.try_inverse().unwrap_or(Matrix3::identity());
        Self {
            mass,
            inertia,
            inertia_inv,
            center_of_mass: Vector3::zeros(),
            linear_damping: 0.0,
            angular_damping: 0.0,
            use_gravity: true,
            forces: ForceAccumulator::default(),
        }
    }

    /// Point mass with a unit-sphere inertia scaled by mass
    pub fn point_mass(mass: f64) -> Self {
        Self::new(mass, Matrix3::identity() * mass)
    }

    /// Solid box inertia from full extents along body X/Y/Z
    pub fn solid_box(mass: f64, extents: Vector3<f64>) -> Self {
        let factor = mass / 12.0;
        let (lx, ly, lz) = (extents.x, extents.y, extents.z);
        let inertia = Matrix3::from_diagonal(&Vector3::new(
            factor * (ly * ly + lz * lz),
            factor * (lx * lx + lz * lz),
            factor * (lx * lx + ly * ly),
        ));
        Self::new(mass, inertia)
    }

    pub fn with_center_of_mass(mut self, offset: Vector3<f64>) -> Self {
        self.center_of_mass = offset;
        self
    }

    pub fn with_damping(mut self, linear: f64, angular: f64) -> Self {
        self.linear_damping = linear;
        self.angular_damping = angular;
        self
    }

    pub fn with_gravity(mut self, use_gravity: bool) -> Self {
        self.use_gravity = use_gravity;
        self
    }

    /// World-space centre of mass for the given pose
    pub fn world_center_of_mass(&self, spatial: &SpatialComponent) -> Vector3<f64> {
        spatial.body_to_world_point(&self.center_of_mass)
    }

    /// Clear the accumulator and anchor it at the current centre of mass
    pub fn clear_forces(&mut self, spatial: &SpatialComponent) {
        let com = self.world_center_of_mass(spatial);
        self.forces.reset(com);
    }
}

/// Marker for a vehicle whose state was rejected by the integrator.
/// Halted vehicles are skipped by every flight system.
#[derive(Component, Debug, Clone, Default)]
pub struct Halted {
    pub reason: String,
}

/// Marker recording that a configuration problem was already reported
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ConfigurationWarned;

/// Steady external force through the centre of mass, e.g. a crosswind push
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantForce {
    /// World frame [N]
    pub force: Vector3<f64>,
    pub category: ForceCategory,
    pub label: String,
}

impl Default for ConstantForce {
    fn default() -> Self {
        Self {
            force: Vector3::zeros(),
            category: ForceCategory::Aerodynamic,
            label: "wind".to_string(),
        }
    }
}

impl ConstantForce {
    pub fn new(force: Vector3<f64>, label: impl Into<String>) -> Self {
        Self {
            force,
            label: label.into(),
            ..Default::default()
        }
    }
}
