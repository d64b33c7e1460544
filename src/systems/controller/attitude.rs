use bevy::prelude::*;
use nalgebra::{Quaternion, UnitQuaternion, Vector3};

use crate::components::{
    AttitudeHold, Halted, PhysicsComponent, Quadrotor, QuadrotorControls, SpatialComponent,
};
use crate::physics::ForceCategory;
use crate::resources::PhysicsConfig;

/// Desired orientation for one tick, consumed by [`attitude_torque`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttitudeCommand {
    pub desired: UnitQuaternion<f64>,
}

impl AttitudeCommand {
    /// Heading from the persisted hold, tilt from the sticks.
    ///
    /// Rotation order is yaw (world up), then pitch (body right, positive stick tilts
    /// the nose down), then roll (body forward, positive stick banks right).
    pub fn from_controls(quad: &Quadrotor, controls: &QuadrotorControls, hold: &AttitudeHold) -> Self {
        let controls = controls.sanitized();
        let pitch = -controls.pitch * quad.max_pitch_deg.to_radians();
        let roll = controls.roll * quad.max_roll_deg.to_radians();

        let desired = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), hold.desired_yaw)
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), pitch)
            * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), roll);

        Self { desired }
    }
}

/// Advance the held heading by the yaw-rate command. Positive commands turn the nose
/// right, which is a negative rotation about world up.
pub fn integrate_desired_yaw(hold: &mut AttitudeHold, quad: &Quadrotor, yaw_rate: f64, dt: f64) {
    let yaw_rate = if yaw_rate.is_finite() {
        yaw_rate.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    hold.desired_yaw -= yaw_rate * quad.yaw_rate_deg.to_radians() * dt;
}

/// Pick the hemisphere with a non-negative scalar part.
///
/// `q` and `-q` encode the same rotation; without this the controller may take the
/// long way round.
pub fn shortest_rotation(q: Quaternion<f64>) -> Quaternion<f64> {
    if q.w < 0.0 {
        -q
    } else {
        q
    }
}

/// Angle [rad] in `[0, π]` and unit axis of the rotation taking `current` to `desired`,
/// world frame. The axis is zero when the angle is zero.
pub fn attitude_error(
    desired: &UnitQuaternion<f64>,
    current: &UnitQuaternion<f64>,
) -> (f64, Vector3<f64>) {
    let error = shortest_rotation((desired * current.inverse()).into_inner());
    let imag = error.imag();
    let sin_half = imag.norm();

    if sin_half <= f64::EPSILON {
        return (0.0, Vector3::zeros());
    }

    let angle = 2.0 * sin_half.atan2(error.w);
    (angle, imag / sin_half)
}

/// PD torque `Kp θ axis - Kd ω`, world frame, optionally capped at `max_torque`
pub fn attitude_torque(
    quad: &Quadrotor,
    command: &AttitudeCommand,
    current: &UnitQuaternion<f64>,
    angular_velocity_world: &Vector3<f64>,
) -> Vector3<f64> {
    let (angle, axis) = attitude_error(&command.desired, current);
    let torque = axis * (quad.kp * angle) - angular_velocity_world * quad.kd;

    match quad.max_torque {
        Some(limit) if limit >= 0.0 && torque.norm() > limit => torque.normalize() * limit,
        _ => torque,
    }
}

/// Collective thrust [N] for a throttle stick in [-1, 1].
///
/// The band of width `max_throttle` is centred on the hover thrust `|g| m`; the result
/// is clamped to `[0, max_throttle]`. A centred stick holds hover.
pub fn hover_thrust(quad: &Quadrotor, mass: f64, gravity: f64, throttle: f64) -> f64 {
    let hover = gravity.abs() * mass;
    let low = hover - 0.5 * quad.max_throttle;
    let high = hover + 0.5 * quad.max_throttle;
    let t = (throttle.clamp(-1.0, 1.0) + 1.0) * 0.5;

    (low + (high - low) * t).clamp(0.0, quad.max_throttle.max(0.0))
}

pub fn attitude_hold_system(
    mut query: Query<(&Quadrotor, &QuadrotorControls, &mut AttitudeHold), Without<Halted>>,
    config: Res<PhysicsConfig>,
) {
    let dt = config.timestep;
    for (quad, controls, mut hold) in query.iter_mut() {
        integrate_desired_yaw(&mut hold, quad, controls.yaw_rate, dt);
    }
}

/// Corrective torque and collective thrust for every quadrotor
pub fn quadrotor_control_system(
    mut query: Query<
        (
            &Quadrotor,
            &QuadrotorControls,
            &AttitudeHold,
            &SpatialComponent,
            &mut PhysicsComponent,
        ),
        Without<Halted>,
    >,
    config: Res<PhysicsConfig>,
) {
    let gravity = config.gravity.norm();

    for (quad, controls, hold, spatial, mut physics) in query.iter_mut() {
        let command = AttitudeCommand::from_controls(quad, controls, hold);
        let torque = attitude_torque(
            quad,
            &command,
            &spatial.attitude,
            &spatial.angular_velocity_world(),
        );
        let thrust = hover_thrust(quad, physics.mass, gravity, controls.sanitized().throttle);

        let acc = &mut physics.forces;
        acc.add_torque(torque, ForceCategory::Control, "attitude_control");
        acc.add_force(spatial.up() * thrust, ForceCategory::Propulsive, "rotor_thrust");
    }
}
