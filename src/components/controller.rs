use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Clamp a stick value to [-1, 1]; non-finite input reads as centred
fn stick(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Per-tick input snapshot for a powered aircraft.
///
/// All values are stick positions in [-1, 1], already debounced by the host.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftControls {
    /// Throttle lever movement: positive opens, negative closes
    pub throttle: f64,
    /// Positive raises the nose
    pub pitch: f64,
    /// Positive banks right
    pub roll: f64,
    /// Positive yaws the nose right
    pub yaw: f64,
}

impl AircraftControls {
    pub fn sanitized(&self) -> Self {
        Self {
            throttle: stick(self.throttle),
            pitch: stick(self.pitch),
            roll: stick(self.roll),
            yaw: stick(self.yaw),
        }
    }
}

/// Stick gains for the powered aircraft.
///
/// Each tick a stick deflection changes the angular velocity directly, independent
/// of the inertia tensor: `stick * stick_scale * sensitivity` for pitch and roll,
/// `stick * sensitivity` for yaw.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightControls {
    /// [rad/s] per tick at full stick, before `stick_scale`
    pub pitch_sensitivity: f64,
    pub roll_sensitivity: f64,
    /// [rad/s] per tick at full stick
    pub yaw_sensitivity: f64,
    /// Pitch and roll stick attenuation
    pub stick_scale: f64,
    /// Stick magnitudes at or below this are ignored
    pub dead_zone: f64,
}

impl Default for FlightControls {
    fn default() -> Self {
        Self {
            pitch_sensitivity: 2.5,
            roll_sensitivity: 2.5,
            yaw_sensitivity: 0.25,
            stick_scale: 0.01,
            dead_zone: 0.01,
        }
    }
}

/// Per-tick input snapshot for a jet engine.
///
/// Hold flags are levels; step and toggle flags are edge events consumed by the tick
/// that reads them.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JetControls {
    pub throttle_up_held: bool,
    pub throttle_down_held: bool,
    pub step_up: bool,
    pub step_down: bool,
    pub toggle_afterburner: bool,
}

impl JetControls {
    /// Take the edge events, leaving the hold levels in place
    pub fn take_events(&mut self) -> JetControls {
        let events = *self;
        self.step_up = false;
        self.step_down = false;
        self.toggle_afterburner = false;
        events
    }
}

/// Quadrotor flight envelope and attitude-loop gains
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quadrotor {
    /// Width of the throttle band around the hover thrust, and the thrust ceiling [N]
    pub max_throttle: f64,
    pub max_pitch_deg: f64,
    pub max_roll_deg: f64,
    /// Desired-yaw change at full yaw stick [deg/s]
    pub yaw_rate_deg: f64,
    /// Proportional gain [N m/rad]
    pub kp: f64,
    /// Derivative gain [N m s/rad]
    pub kd: f64,
    /// Optional cap on the corrective torque magnitude [N m]
    pub max_torque: Option<f64>,
}

impl Default for Quadrotor {
    fn default() -> Self {
        Self {
            max_throttle: 30.0,
            max_pitch_deg: 20.0,
            max_roll_deg: 20.0,
            yaw_rate_deg: 90.0,
            kp: 8.0,
            kd: 2.5,
            max_torque: None,
        }
    }
}

/// Per-tick input snapshot for a quadrotor
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuadrotorControls {
    /// Positive tilts the nose down (accelerate forward)
    pub pitch: f64,
    /// Positive banks right
    pub roll: f64,
    /// 0 holds hover, +1 / -1 are the top / bottom of the throttle band
    pub throttle: f64,
    /// Yaw-rate command; positive turns the nose right
    pub yaw_rate: f64,
}

impl QuadrotorControls {
    pub fn sanitized(&self) -> Self {
        Self {
            pitch: stick(self.pitch),
            roll: stick(self.roll),
            throttle: stick(self.throttle),
            yaw_rate: stick(self.yaw_rate),
        }
    }
}

/// Persisted heading the attitude loop holds. Only yaw-rate commands change it.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttitudeHold {
    /// Desired yaw about world up [rad]
    pub desired_yaw: f64,
}

impl AttitudeHold {
    /// Hold the heading the body currently points at
    pub fn from_attitude(attitude: &UnitQuaternion<f64>) -> Self {
        let forward = attitude * Vector3::x();
        let desired_yaw = if forward.x.abs() + forward.z.abs() > f64::EPSILON {
            (-forward.z).atan2(forward.x)
        } else {
            0.0
        };
        Self { desired_yaw }
    }
}
