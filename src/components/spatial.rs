use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Component for storing spatial state of an entity.
///
/// Body axes: forward = +X, up = +Y, right = +Z.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position of the body origin in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity of the centre of mass in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in body frame [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    /// Create a new spatial component with initial values
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    /// Create a new spatial component at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn forward(&self) -> Vector3<f64> {
        self.attitude * Vector3::x()
    }

    pub fn up(&self) -> Vector3<f64> {
        self.attitude * Vector3::y()
    }

    pub fn right(&self) -> Vector3<f64> {
        self.attitude * Vector3::z()
    }

    /// Angular velocity expressed in the world frame
    pub fn angular_velocity_world(&self) -> Vector3<f64> {
        self.attitude * self.angular_velocity
    }

    /// Transform a body-frame offset into a world-space point
    pub fn body_to_world_point(&self, offset: &Vector3<f64>) -> Vector3<f64> {
        self.position + self.attitude * offset
    }

    /// World-space velocity of a material point: `v + ω x r` with `r` measured from
    /// the centre of mass.
    pub fn point_velocity(&self, point: &Vector3<f64>, center_of_mass: &Vector3<f64>) -> Vector3<f64> {
        let r = point - center_of_mass;
        self.velocity + self.angular_velocity_world().cross(&r)
    }

    /// Velocity expressed in the body frame
    pub fn velocity_body(&self) -> Vector3<f64> {
        self.attitude.inverse_transform_vector(&self.velocity)
    }
}

/// Placement of a part (wing control point, engine nozzle) on a body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mount {
    /// Offset from the body origin, body frame [m]
    pub offset: Vector3<f64>,
    /// Part orientation relative to the body. The part's +X/+Y/+Z are its
    /// forward (chord, thrust axis), up and right (span) axes.
    pub orientation: UnitQuaternion<f64>,
}

impl Default for Mount {
    fn default() -> Self {
        Self {
            offset: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
        }
    }
}

impl Mount {
    pub fn at(offset: Vector3<f64>) -> Self {
        Self {
            offset,
            ..Default::default()
        }
    }

    pub fn world_position(&self, spatial: &SpatialComponent) -> Vector3<f64> {
        spatial.body_to_world_point(&self.offset)
    }

    pub fn world_attitude(&self, spatial: &SpatialComponent) -> UnitQuaternion<f64> {
        spatial.attitude * self.orientation
    }

    /// World-frame (forward, up, right) axes of the part
    pub fn world_axes(&self, spatial: &SpatialComponent) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
        let q = self.world_attitude(spatial);
        (q * Vector3::x(), q * Vector3::y(), q * Vector3::z())
    }
}
