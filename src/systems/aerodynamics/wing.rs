use std::f64::consts::PI;

use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AeroSample, ConfigurationWarned, Halted, PhysicsComponent, SpatialComponent, Wing,
    OSWALD_EFFICIENCY,
};
use crate::physics::{unit_direction, ForceCategory, PhysicsError};

/// Resultant wing load and the values it was derived from
#[derive(Debug, Clone, PartialEq)]
pub struct WingLoad {
    /// Lift plus drag, world frame [N]
    pub force: Vector3<f64>,
    /// World-space control point the load acts through
    pub point: Vector3<f64>,
    pub sample: AeroSample,
}

/// Linear lift curve, no stall
pub fn lift_coefficient(cl_alpha: f64, alpha: f64) -> f64 {
    cl_alpha * alpha
}

/// Zero-lift drag plus induced drag `Cl² / (π AR e)`
pub fn drag_coefficient(cd0: f64, cl: f64, aspect_ratio: f64) -> f64 {
    cd0 + cl * cl / (PI * aspect_ratio * OSWALD_EFFICIENCY)
}

/// Relative airflow direction at a point moving with `point_velocity`.
///
/// A stationary point has no airflow; the chord-aligned direction `-chord` is
/// substituted so the angle of attack reads zero.
pub fn flow_direction(point_velocity: &Vector3<f64>, chord: &Vector3<f64>) -> Vector3<f64> {
    unit_direction(point_velocity, "airflow")
        .map(|v| -v)
        .unwrap_or(-chord)
}

/// Angle between the chord line and the oncoming air, positive when the air
/// strikes the lower surface.
pub fn angle_of_attack(flow: &Vector3<f64>, chord: &Vector3<f64>, up: &Vector3<f64>) -> f64 {
    flow.dot(up).atan2(-flow.dot(chord))
}

/// Lift and drag of a wing whose control point moves with `point_velocity`.
///
/// `chord`, `up` and `span` are the wing's world-frame unit axes. Lift acts
/// perpendicular to the flow in the flow/span plane, drag along the flow (opposing
/// the motion).
pub fn calculate_wing_aero(
    wing: &Wing,
    point_velocity: &Vector3<f64>,
    chord: &Vector3<f64>,
    up: &Vector3<f64>,
    span: &Vector3<f64>,
) -> (Vector3<f64>, AeroSample) {
    let airspeed = point_velocity.norm();
    let flow = flow_direction(point_velocity, chord);
    let alpha = angle_of_attack(&flow, chord, up);

    let cl = lift_coefficient(wing.cl_alpha, alpha);
    let cd = drag_coefficient(wing.cd0, cl, wing.aspect_ratio);

    let dynamic_pressure = 0.5 * wing.air_density * airspeed * airspeed;
    let lift = dynamic_pressure * wing.area * cl;
    let drag = dynamic_pressure * wing.area * cd;

    let sample = AeroSample {
        flow_direction: flow,
        airspeed,
        alpha,
        dynamic_pressure,
        lift_coefficient: cl,
        drag_coefficient: cd,
        lift,
        drag,
    };

    if airspeed == 0.0 {
        return (Vector3::zeros(), sample);
    }

    // Flow along the span produces no lift direction; fall back to wing up
    let lift_direction = unit_direction(&flow.cross(span), "lift direction").unwrap_or(*up);
    let force = lift_direction * lift + flow * drag;

    (force, sample)
}

/// Wing load for a body in its current state.
///
/// Fails with [`PhysicsError::Configuration`] when the wing has no mount.
pub fn calculate_wing_forces(
    wing: &Wing,
    spatial: &SpatialComponent,
    center_of_mass: &Vector3<f64>,
) -> Result<WingLoad, PhysicsError> {
    let mount = wing
        .mount
        .as_ref()
        .ok_or_else(|| PhysicsError::Configuration("wing has no control point".to_string()))?;

    let point = mount.world_position(spatial);
    let (chord, up, span) = mount.world_axes(spatial);
    let point_velocity = spatial.point_velocity(&point, center_of_mass);

    let (force, sample) = calculate_wing_aero(wing, &point_velocity, &chord, &up, &span);

    Ok(WingLoad {
        force,
        point,
        sample,
    })
}

/// Wing lift and drag at the control point; the lever arm yields the pitching torque
pub fn wing_aero_system(
    mut commands: Commands,
    mut query: Query<
        (
            Entity,
            &Wing,
            &SpatialComponent,
            &mut PhysicsComponent,
            Option<&mut AeroSample>,
            Has<ConfigurationWarned>,
        ),
        Without<Halted>,
    >,
) {
    for (entity, wing, spatial, mut physics, sample, warned) in query.iter_mut() {
        let center_of_mass = physics.forces.center_of_mass();

        match calculate_wing_forces(wing, spatial, &center_of_mass) {
            Ok(load) => {
                physics.forces.add_force_at_point(
                    load.force,
                    load.point,
                    ForceCategory::Aerodynamic,
                    "wing",
                );
                if let Some(mut sample) = sample {
                    *sample = load.sample;
                }
            }
            Err(err) => {
                if !warned {
                    warn!("Wing on {:?} disabled: {}", entity, err);
                    commands.entity(entity).insert(ConfigurationWarned);
                }
            }
        }
    }
}
