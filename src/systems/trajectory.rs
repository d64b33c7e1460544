use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{Launcher, SpatialComponent, TrajectoryPreview, MAX_ELEVATION_DEG};
use crate::resources::PhysicsConfig;

/// Closed-form vacuum trajectory `p(t) = p0 + v0 t + ½ g t²` sampled at `t = i Δt`.
///
/// At least two samples are always produced. The sequence is recomputed from scratch
/// on every call, so there is no accumulated error.
pub fn predict_vacuum_trajectory(
    start: &Vector3<f64>,
    velocity: &Vector3<f64>,
    gravity: &Vector3<f64>,
    time_step: f64,
    count: usize,
) -> Vec<Vector3<f64>> {
    (0..count.max(2))
        .map(|i| {
            let t = i as f64 * time_step;
            start + velocity * t + gravity * (0.5 * t * t)
        })
        .collect()
}

/// Muzzle velocity in the plane spanned by `forward` and `up`.
///
/// Elevation is measured from `forward` toward `up` and clamped to [0, 85] degrees.
pub fn launch_velocity(
    forward: &Vector3<f64>,
    up: &Vector3<f64>,
    muzzle_speed: f64,
    elevation_deg: f64,
) -> Vector3<f64> {
    let elevation = if elevation_deg.is_finite() {
        elevation_deg.clamp(0.0, MAX_ELEVATION_DEG).to_radians()
    } else {
        0.0
    };
    forward * (muzzle_speed * elevation.cos()) + up * (muzzle_speed * elevation.sin())
}

/// Regenerate every launcher's preview; runs once per frame, not per tick
pub fn trajectory_preview_system(
    mut query: Query<(&Launcher, &SpatialComponent, &mut TrajectoryPreview)>,
    config: Res<PhysicsConfig>,
) {
    for (launcher, spatial, mut preview) in query.iter_mut() {
        let (start, velocity) = launcher.launch_state(spatial);
        preview.samples = predict_vacuum_trajectory(
            &start,
            &velocity,
            &config.gravity,
            launcher.preview_time_step,
            launcher.preview_samples,
        );
    }
}
