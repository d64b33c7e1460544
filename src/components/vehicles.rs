use bevy::prelude::*;

use crate::components::{
    AeroSample, AircraftAero, AircraftControls, AttitudeHold, FlightControls, JetControls,
    JetEngine, PhysicsComponent, PistonEngine, PropulsionState, QuadraticDrag, Quadrotor,
    QuadrotorControls, SpatialComponent, Wing,
};

/// Kinematic state plus mass properties; every vehicle carries one
#[derive(Bundle, Clone, Default)]
pub struct RigidBodyBundle {
    pub spatial: SpatialComponent,
    pub physics: PhysicsComponent,
}

impl RigidBodyBundle {
    pub fn new(spatial: SpatialComponent, physics: PhysicsComponent) -> Self {
        Self { spatial, physics }
    }
}

/// Free projectile under gravity and quadratic drag
#[derive(Bundle, Clone)]
pub struct ProjectileBundle {
    pub body: RigidBodyBundle,
    pub drag: QuadraticDrag,
    pub name: Name,
}

/// Unpowered glider with a single wing
#[derive(Bundle, Clone)]
pub struct GliderBundle {
    pub body: RigidBodyBundle,
    pub wing: Wing,
    pub sample: AeroSample,
    pub name: Name,
}

/// Powered aircraft with a piston engine
#[derive(Bundle, Clone)]
pub struct AircraftBundle {
    pub body: RigidBodyBundle,
    pub aero: AircraftAero,
    pub engine: PistonEngine,
    pub propulsion: PropulsionState,
    pub controls: AircraftControls,
    pub flight_controls: FlightControls,
    pub name: Name,
}

/// Jet-thrust vehicle
#[derive(Bundle, Clone)]
pub struct JetBundle {
    pub body: RigidBodyBundle,
    pub engine: JetEngine,
    pub propulsion: PropulsionState,
    pub controls: JetControls,
    pub name: Name,
}

/// Attitude-stabilised quadrotor
#[derive(Bundle, Clone)]
pub struct QuadrotorBundle {
    pub body: RigidBodyBundle,
    pub quadrotor: Quadrotor,
    pub hold: AttitudeHold,
    pub controls: QuadrotorControls,
    pub name: Name,
}
