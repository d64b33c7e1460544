use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Configuration for the physics system
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed tick length [s]; every model and the integrator use this as `dt`
    pub timestep: f64,
    /// Most ticks a single `advance` call may run before dropping the backlog
    pub max_substeps: u32,
    pub gravity: Vector3<f64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 50.0, // 50 Hz
            max_substeps: 8,
            gravity: Vector3::new(0.0, -9.81, 0.0),
        }
    }
}

impl PhysicsConfig {
    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_gravity(mut self, gravity: Vector3<f64>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Replace settings the scheduler cannot run with the defaults, logging each one
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut config = self;

        if !(config.timestep.is_finite() && config.timestep > 0.0) {
            warn!(
                "Invalid timestep {}, falling back to {}",
                config.timestep, defaults.timestep
            );
            config.timestep = defaults.timestep;
        }
        if config.max_substeps == 0 {
            warn!("max_substeps must be at least 1, falling back to {}", defaults.max_substeps);
            config.max_substeps = defaults.max_substeps;
        }
        if !config.gravity.iter().all(|g| g.is_finite()) {
            warn!("Non-finite gravity {:?}, falling back to standard gravity", config.gravity);
            config.gravity = defaults.gravity;
        }
        config
    }
}
