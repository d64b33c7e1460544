use bevy::prelude::*;

use crate::resources::PhysicsConfig;
use crate::systems::{
    aircraft_aero_system, attitude_hold_system, constant_force_system, flight_controls_system,
    force_reset_system, jet_controls_system, jet_thrust_system, physics_integrator_system,
    piston_thrust_system, piston_throttle_system, quadratic_drag_system,
    quadrotor_control_system, trajectory_preview_system, transform_sync_system,
    wing_aero_system,
};

/// Per-tick flight stages, run strictly in declaration order
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    /// Clear accumulators, add gravity
    Reset,
    /// Apply the input snapshots
    Controls,
    Aerodynamics,
    Propulsion,
    Integration,
    /// Copy state to the presentation layer
    Publish,
}

/// Installs the flight stages on `FixedUpdate` and the trajectory preview on `Update`
pub struct FlightPhysicsPlugin {
    pub config: PhysicsConfig,
}

impl Default for FlightPhysicsPlugin {
    fn default() -> Self {
        Self {
            config: PhysicsConfig::default(),
        }
    }
}

impl FlightPhysicsPlugin {
    /// Unusable settings (non-positive timestep, zero substeps, non-finite gravity)
    /// are replaced by the defaults.
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }
}

impl Plugin for FlightPhysicsPlugin {
    fn build(&self, app: &mut App) {
        // `config` is public, so it may have bypassed `new`
        let config = self.config.clone().sanitized();
        let timestep = config.timestep;
        app.insert_resource(config)
            .insert_resource(Time::<Fixed>::from_seconds(timestep));

        app.configure_sets(
            FixedUpdate,
            (
                FlightSet::Reset,
                FlightSet::Controls,
                FlightSet::Aerodynamics,
                FlightSet::Propulsion,
                FlightSet::Integration,
                FlightSet::Publish,
            )
                .chain(),
        );

        // Chained inside each set so contributions are always summed in the same order
        app.add_systems(
            FixedUpdate,
            (
                force_reset_system.in_set(FlightSet::Reset),
                (
                    piston_throttle_system,
                    jet_controls_system,
                    flight_controls_system,
                    attitude_hold_system,
                    quadrotor_control_system,
                )
                    .chain()
                    .in_set(FlightSet::Controls),
                (
                    quadratic_drag_system,
                    wing_aero_system,
                    aircraft_aero_system,
                    constant_force_system,
                )
                    .chain()
                    .in_set(FlightSet::Aerodynamics),
                (piston_thrust_system, jet_thrust_system)
                    .chain()
                    .in_set(FlightSet::Propulsion),
                physics_integrator_system.in_set(FlightSet::Integration),
                transform_sync_system.in_set(FlightSet::Publish),
            ),
        );

        app.add_systems(Update, trajectory_preview_system);
    }
}
