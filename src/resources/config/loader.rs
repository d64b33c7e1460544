use std::path::Path;

use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::physics::PhysicsConfig;
use super::vehicles::{InitialState, LauncherConfig, VehicleConfig};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid simulation configuration: {0}")]
    ValidationError(String),
}

/// A complete scenario: physics settings plus the vehicles and launchers to spawn
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub vehicles: Vec<VehicleConfig>,
    pub launchers: Vec<LauncherConfig>,
}

impl SimulationConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a scenario, choosing the parser from the file extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let source = std::fs::read_to_string(path)?;
        let config = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&source)?,
            "json" => Self::from_json_str(&source)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };

        info!(
            "Loaded {} vehicles and {} launchers from {}",
            config.vehicles.len(),
            config.launchers.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;
        if !(physics.timestep.is_finite() && physics.timestep > 0.0) {
            return Err(invalid("physics", "timestep must be positive"));
        }
        if physics.max_substeps == 0 {
            return Err(invalid("physics", "max_substeps must be at least 1"));
        }
        if !physics.gravity.iter().all(|g| g.is_finite()) {
            return Err(invalid("physics", "gravity must be finite"));
        }

        for vehicle in &self.vehicles {
            validate_vehicle(vehicle)?;
        }
        for launcher in &self.launchers {
            let l = &launcher.launcher;
            let name = &launcher.name;
            check_initial(name, &launcher.initial)?;
            check_positive(name, "round_mass", l.round_mass)?;
            check_non_negative(name, "muzzle_speed", l.muzzle_speed)?;
            check_positive(name, "preview_time_step", l.preview_time_step)?;
            check_non_negative(name, "round_drag.area", l.round_drag.area)?;
            check_non_negative(name, "round_drag.drag_coefficient", l.round_drag.drag_coefficient)?;
            check_non_negative(name, "round_drag.air_density", l.round_drag.air_density)?;
        }
        Ok(())
    }
}

fn invalid(name: &str, reason: &str) -> ConfigError {
    ConfigError::ValidationError(format!("{}: {}", name, reason))
}

fn check_positive(name: &str, field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(name, &format!("{} must be positive, got {}", field, value)))
    }
}

fn check_non_negative(name: &str, field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(name, &format!("{} must be non-negative, got {}", field, value)))
    }
}

/// Box extents feed the inertia tensor; a zero extent would make it singular
fn check_extents(name: &str, extents: &Vector3<f64>) -> Result<(), ConfigError> {
    for (axis, value) in ["x", "y", "z"].iter().zip(extents.iter()) {
        check_positive(name, &format!("extents.{}", axis), *value)?;
    }
    Ok(())
}

fn check_initial(name: &str, initial: &InitialState) -> Result<(), ConfigError> {
    let finite = initial.position.iter().chain(initial.velocity.iter()).all(|x| x.is_finite())
        && [initial.yaw_deg, initial.pitch_deg, initial.roll_deg]
            .iter()
            .all(|x| x.is_finite());
    if finite {
        Ok(())
    } else {
        Err(invalid(name, "initial state must be finite"))
    }
}

fn validate_vehicle(vehicle: &VehicleConfig) -> Result<(), ConfigError> {
    let name = vehicle.name();
    check_initial(name, vehicle.initial())?;

    match vehicle {
        VehicleConfig::Projectile { config, .. } => {
            check_positive(name, "mass", config.mass)?;
            check_non_negative(name, "radius", config.radius)?;
            check_non_negative(name, "drag_coefficient", config.drag_coefficient)?;
            check_non_negative(name, "air_density", config.air_density)?;
        }
        VehicleConfig::Glider { config, .. } => {
            check_positive(name, "mass", config.mass)?;
            check_extents(name, &config.extents)?;
            let wing = &config.wing;
            check_non_negative(name, "wing.area", wing.area)?;
            check_positive(name, "wing.aspect_ratio", wing.aspect_ratio)?;
            check_non_negative(name, "wing.cd0", wing.cd0)?;
            check_non_negative(name, "wing.air_density", wing.air_density)?;
        }
        VehicleConfig::Aircraft { config, .. } => {
            check_positive(name, "mass", config.mass)?;
            check_extents(name, &config.extents)?;
            check_non_negative(name, "angular_damping", config.angular_damping)?;
            check_non_negative(name, "engine.max_thrust", config.engine.max_thrust)?;
            check_non_negative(name, "engine.throttle_rate", config.engine.throttle_rate)?;
            check_non_negative(name, "aero.drag_coefficient", config.aero.drag_coefficient)?;
            check_non_negative(name, "aero.side_slip_gain", config.aero.side_slip_gain)?;
            if !(0.0..=1.0).contains(&config.initial_throttle) {
                return Err(invalid(name, "initial_throttle must be within [0, 1]"));
            }
        }
        VehicleConfig::Jet { config, .. } => {
            check_positive(name, "mass", config.mass)?;
            check_extents(name, &config.extents)?;
            check_non_negative(name, "dry_thrust", config.dry_thrust)?;
            check_non_negative(name, "afterburner_thrust", config.afterburner_thrust)?;
            check_non_negative(name, "throttle_rate", config.throttle_rate)?;
            check_non_negative(name, "throttle_step", config.throttle_step)?;
        }
        VehicleConfig::Quadrotor { config, .. } => {
            // Non-positive masses are floored rather than rejected
            if !config.mass.is_finite() {
                return Err(invalid(name, "mass must be finite"));
            }
            check_extents(name, &config.extents)?;
            let quad = &config.quadrotor;
            check_non_negative(name, "max_throttle", quad.max_throttle)?;
            check_non_negative(name, "kp", quad.kp)?;
            check_non_negative(name, "kd", quad.kd)?;
            if let Some(limit) = quad.max_torque {
                check_non_negative(name, "max_torque", limit)?;
            }
        }
    }
    Ok(())
}
