use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{AircraftAero, Halted, PhysicsComponent, PropulsionState, SpatialComponent};
use crate::physics::ForceCategory;

/// Separate contributions of the powered-aircraft model, all world frame [N]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AircraftAeroForces {
    pub lift: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub side_slip: Vector3<f64>,
    /// Pseudo-force turning the velocity vector toward the nose
    pub alignment: Vector3<f64>,
}

impl AircraftAeroForces {
    pub fn total(&self) -> Vector3<f64> {
        self.lift + self.drag + self.side_slip + self.alignment
    }
}

/// Throttle-scaled lift, quadratic drag, side-slip damping and velocity alignment.
///
/// Lift ignores airspeed and angle of attack. Below `min_speed` the model produces
/// nothing; the alignment term additionally needs `alignment_min_speed`.
pub fn calculate_aircraft_aero(
    aero: &AircraftAero,
    spatial: &SpatialComponent,
    throttle: f64,
    mass: f64,
) -> AircraftAeroForces {
    let velocity = spatial.velocity;
    let speed = velocity.norm();

    if !(speed >= aero.min_speed) || speed == 0.0 {
        return AircraftAeroForces::default();
    }

    let forward = spatial.forward();
    let up = spatial.up();
    let right = spatial.right();
    let direction = velocity / speed;

    let lift = up * (aero.base_lift * throttle.clamp(0.0, 1.0));
    let drag = -direction * (aero.drag_coefficient * speed * speed);
    let side_slip = -right * (velocity.dot(&right) * aero.side_slip_gain);

    let alignment = if speed > aero.alignment_min_speed {
        (forward - direction) * (aero.alignment_gain * speed * mass)
    } else {
        Vector3::zeros()
    };

    AircraftAeroForces {
        lift,
        drag,
        side_slip,
        alignment,
    }
}

pub fn aircraft_aero_system(
    mut query: Query<
        (&AircraftAero, &PropulsionState, &SpatialComponent, &mut PhysicsComponent),
        Without<Halted>,
    >,
) {
    for (aero, propulsion, spatial, mut physics) in query.iter_mut() {
        let forces = calculate_aircraft_aero(aero, spatial, propulsion.throttle, physics.mass);
        if forces == AircraftAeroForces::default() {
            continue;
        }

        let acc = &mut physics.forces;
        acc.add_force(forces.lift, ForceCategory::Aerodynamic, "lift");
        acc.add_force(forces.drag, ForceCategory::Aerodynamic, "drag");
        acc.add_force(forces.side_slip, ForceCategory::Aerodynamic, "side_slip");
        acc.add_force(
            forces.alignment,
            ForceCategory::Stabilization,
            "velocity_alignment",
        );
    }
}
