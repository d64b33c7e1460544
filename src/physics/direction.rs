use nalgebra::Vector3;

use crate::physics::error::{PhysicsError, Result};

/// Unit vector along `v`.
///
/// Fails with [`PhysicsError::DegenerateInput`] for zero-length or non-finite input;
/// callers substitute their own fallback direction.
pub fn unit_direction(v: &Vector3<f64>, what: &str) -> Result<Vector3<f64>> {
    if !v.iter().all(|x| x.is_finite()) {
        return Err(PhysicsError::DegenerateInput(format!(
            "{} is not finite: {:?}",
            what, v
        )));
    }
    v.try_normalize(f64::EPSILON)
        .ok_or_else(|| PhysicsError::DegenerateInput(format!("{} has zero length", what)))
}
