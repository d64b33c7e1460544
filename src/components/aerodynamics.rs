use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::Mount;

/// Oswald span efficiency used for the induced-drag polynomial
pub const OSWALD_EFFICIENCY: f64 = 0.85;

/// Sea-level air density [kg/m^3]
pub const SEA_LEVEL_DENSITY: f64 = 1.225;

/// Isotropic quadratic drag for point-mass projectiles
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadraticDrag {
    pub drag_coefficient: f64,
    /// Cross-sectional area [m^2]
    pub area: f64,
    pub air_density: f64,
    /// Ambient wind in world frame [m/s]
    pub wind: Vector3<f64>,
}

impl Default for QuadraticDrag {
    fn default() -> Self {
        Self::sphere(0.1, 0.47, SEA_LEVEL_DENSITY, Vector3::zeros())
    }
}

impl QuadraticDrag {
    /// Drag for a sphere of the given radius, area `π r²`
    pub fn sphere(radius: f64, drag_coefficient: f64, air_density: f64, wind: Vector3<f64>) -> Self {
        Self {
            drag_coefficient,
            area: std::f64::consts::PI * radius * radius,
            air_density,
            wind,
        }
    }
}

/// A single lifting surface with a linear lift slope and induced drag
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wing {
    /// Control point and chord/up/span axes. `None` disables the wing.
    pub mount: Option<Mount>,
    /// Planform area S [m^2]
    pub area: f64,
    /// AR = b^2 / S
    pub aspect_ratio: f64,
    /// Zero-lift drag coefficient
    pub cd0: f64,
    /// Lift-curve slope [1/rad]
    pub cl_alpha: f64,
    pub air_density: f64,
}

impl Default for Wing {
    fn default() -> Self {
        Self {
            mount: Some(Mount::default()),
            area: 1.5,
            aspect_ratio: 8.0,
            cd0: 0.02,
            cl_alpha: 5.5,
            air_density: 1.25,
        }
    }
}

/// Powered-aircraft aerodynamics: throttle-scaled lift, quadratic drag,
/// side-slip damping and a velocity-alignment correction.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftAero {
    /// Lift at full throttle [N]
    pub base_lift: f64,
    /// Drag per squared speed [N s^2/m^2]
    pub drag_coefficient: f64,
    /// Force per m/s of lateral slip [N s/m]
    pub side_slip_gain: f64,
    /// Alignment acceleration per m/s of speed [1/s]
    pub alignment_gain: f64,
    /// Speed above which the alignment correction acts [m/s]
    pub alignment_min_speed: f64,
    /// Below this speed no aerodynamic force is produced [m/s]
    pub min_speed: f64,
}

impl Default for AircraftAero {
    fn default() -> Self {
        Self {
            base_lift: 120_000.0,
            drag_coefficient: 0.2,
            side_slip_gain: 5000.0,
            alignment_gain: 2.0,
            alignment_min_speed: 10.0,
            min_speed: 1.0,
        }
    }
}

/// Values derived by an aerodynamic model during the last tick
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AeroSample {
    /// Direction of the relative airflow over the surface (unit)
    pub flow_direction: Vector3<f64>,
    pub airspeed: f64,
    /// Angle of attack [rad]
    pub alpha: f64,
    pub dynamic_pressure: f64,
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    /// Lift magnitude [N]
    pub lift: f64,
    /// Drag magnitude [N]
    pub drag: f64,
}
