use bevy::prelude::*;
use nalgebra::{Matrix3, Vector3};

use crate::components::{AircraftControls, FlightControls, Halted, PhysicsComponent, SpatialComponent};
use crate::physics::ForceCategory;
use crate::resources::PhysicsConfig;

/// Stick torques for a powered aircraft, world frame [N m]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlTorques {
    pub pitch: Vector3<f64>,
    pub roll: Vector3<f64>,
    pub yaw: Vector3<f64>,
}

fn outside_dead_zone(stick: f64, dead_zone: f64) -> f64 {
    if stick.abs() > dead_zone {
        stick
    } else {
        0.0
    }
}

/// Angular-velocity change per tick demanded by each stick, body frame [rad/s].
///
/// Positive pitch raises the nose (about body right), positive roll banks right
/// (about body forward), positive yaw swings the nose right (negative about body up).
/// Returned as `(pitch, roll, yaw)`.
pub fn calculate_rate_changes(
    controls: &AircraftControls,
    gains: &FlightControls,
) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
    let controls = controls.sanitized();
    let pitch = outside_dead_zone(controls.pitch, gains.dead_zone)
        * gains.stick_scale
        * gains.pitch_sensitivity;
    let roll = outside_dead_zone(controls.roll, gains.dead_zone)
        * gains.stick_scale
        * gains.roll_sensitivity;
    let yaw = outside_dead_zone(controls.yaw, gains.dead_zone) * gains.yaw_sensitivity;

    (Vector3::z() * pitch, Vector3::x() * roll, -Vector3::y() * yaw)
}

/// Torques that produce the stick rate changes over one tick of length `dt`.
///
/// `τ = q (I Δω) / dt`, so the integrator's `I⁻¹ τ dt` recovers `Δω` whatever the
/// inertia. A non-positive `dt` yields no torque.
pub fn calculate_control_torques(
    controls: &AircraftControls,
    gains: &FlightControls,
    spatial: &SpatialComponent,
    inertia: &Matrix3<f64>,
    dt: f64,
) -> ControlTorques {
    if !(dt.is_finite() && dt > 0.0) {
        return ControlTorques::default();
    }

    let (pitch, roll, yaw) = calculate_rate_changes(controls, gains);
    let to_world = |delta_omega: Vector3<f64>| spatial.attitude * (inertia * delta_omega) / dt;

    ControlTorques {
        pitch: to_world(pitch),
        roll: to_world(roll),
        yaw: to_world(yaw),
    }
}

pub fn flight_controls_system(
    mut query: Query<
        (&AircraftControls, &FlightControls, &SpatialComponent, &mut PhysicsComponent),
        Without<Halted>,
    >,
    config: Res<PhysicsConfig>,
) {
    let dt = config.timestep;
    for (controls, gains, spatial, mut physics) in query.iter_mut() {
        let torques = calculate_control_torques(controls, gains, spatial, &physics.inertia, dt);

        for (label, torque) in [
            ("pitch_control", torques.pitch),
            ("roll_control", torques.roll),
            ("yaw_control", torques.yaw),
        ] {
            if torque != Vector3::zeros() {
                physics.forces.add_torque(torque, ForceCategory::Control, label);
            }
        }
    }
}
