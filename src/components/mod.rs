pub mod aerodynamics;
pub mod controller;
pub mod physics;
pub mod propulsion;
pub mod spatial;
pub mod trajectory;
pub mod vehicles;

pub use aerodynamics::{AeroSample, AircraftAero, QuadraticDrag, Wing, OSWALD_EFFICIENCY};
pub use controller::{
    AircraftControls, AttitudeHold, FlightControls, JetControls, Quadrotor, QuadrotorControls,
};
pub use physics::{ConfigurationWarned, ConstantForce, Halted, PhysicsComponent};
pub use propulsion::{JetEngine, PistonEngine, PropulsionState, ThrustMode};
pub use spatial::{Mount, SpatialComponent};
pub use trajectory::{Launcher, TrajectoryPreview, MAX_ELEVATION_DEG};
pub use vehicles::{
    AircraftBundle, GliderBundle, JetBundle, ProjectileBundle, QuadrotorBundle, RigidBodyBundle,
};
