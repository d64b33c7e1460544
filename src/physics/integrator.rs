use nalgebra::{Quaternion, UnitQuaternion, Vector3};

use crate::components::{PhysicsComponent, SpatialComponent};
use crate::physics::error::{PhysicsError, Result};

fn all_finite(v: &Vector3<f64>) -> bool {
    v.iter().all(|x| x.is_finite())
}

/// Damping law of the host engine: `v *= 1 / (1 + c dt)`
fn damping_factor(coefficient: f64, dt: f64) -> f64 {
    1.0 / (1.0 + coefficient.max(0.0) * dt)
}

/// Reject states that would poison every later tick.
pub fn validate_state(physics: &PhysicsComponent, spatial: &SpatialComponent) -> Result<()> {
    if !(physics.mass.is_finite() && physics.mass > 0.0) {
        return Err(PhysicsError::InvalidState(format!(
            "mass must be positive and finite, got {}",
            physics.mass
        )));
    }
    if !physics.inertia_inv.iter().all(|x| x.is_finite()) {
        return Err(PhysicsError::InvalidState(
            "inverse inertia contains non-finite values".to_string(),
        ));
    }
    if !all_finite(&spatial.position) {
        return Err(PhysicsError::InvalidState(format!(
            "non-finite position {:?}",
            spatial.position
        )));
    }
    if !all_finite(&spatial.velocity) {
        return Err(PhysicsError::InvalidState(format!(
            "non-finite velocity {:?}",
            spatial.velocity
        )));
    }
    if !all_finite(&spatial.angular_velocity) {
        return Err(PhysicsError::InvalidState(format!(
            "non-finite angular velocity {:?}",
            spatial.angular_velocity
        )));
    }
    if !spatial.attitude.coords.iter().all(|x| x.is_finite()) {
        return Err(PhysicsError::InvalidState(
            "non-finite attitude quaternion".to_string(),
        ));
    }
    Ok(())
}

/// Advance one rigid body by `dt` with semi-implicit Euler.
///
/// Velocity is updated before position. `net_force` and `net_torque` are world-frame,
/// torque about the centre of mass. Angular velocity is kept in the body frame and the
/// attitude is advanced by `q' = normalize(q + 0.5 q ⊗ (0, ω') dt)`.
///
/// Returns the new state; the inputs are left untouched.
pub fn integrate(
    spatial: &SpatialComponent,
    physics: &PhysicsComponent,
    net_force: &Vector3<f64>,
    net_torque: &Vector3<f64>,
    dt: f64,
) -> Result<SpatialComponent> {
    validate_state(physics, spatial)?;
    if !(dt.is_finite() && dt >= 0.0) {
        return Err(PhysicsError::InvalidState(format!(
            "timestep must be finite and non-negative, got {}",
            dt
        )));
    }
    if !all_finite(net_force) || !all_finite(net_torque) {
        return Err(PhysicsError::InvalidState(format!(
            "non-finite load: force {:?}, torque {:?}",
            net_force, net_torque
        )));
    }

    // Linear
    let acceleration = net_force / physics.mass;
    let velocity = (spatial.velocity + acceleration * dt)
        * damping_factor(physics.linear_damping, dt);

    // Angular, body frame
    let torque_body = spatial.attitude.inverse_transform_vector(net_torque);
    let angular_acceleration = physics.inertia_inv * torque_body;
    let angular_velocity = (spatial.angular_velocity + angular_acceleration * dt)
        * damping_factor(physics.angular_damping, dt);

    // Attitude
    let q = spatial.attitude.into_inner();
    let omega = Quaternion::from_parts(0.0, angular_velocity);
    let q_dot = q * omega * 0.5;
    let attitude = UnitQuaternion::new_normalize(q + q_dot * dt);

    // The centre of mass moves with the linear velocity; the origin follows the rotation
    let com = spatial.position + spatial.attitude * physics.center_of_mass;
    let com_next = com + velocity * dt;
    let position = com_next - attitude * physics.center_of_mass;

    Ok(SpatialComponent {
        position,
        velocity,
        attitude,
        angular_velocity,
    })
}
