pub mod aerodynamics;
pub mod controller;
pub mod physics;
pub mod propulsion;
pub mod trajectory;

pub use aerodynamics::{aircraft_aero_system, quadratic_drag_system, wing_aero_system};
pub use controller::{attitude_hold_system, flight_controls_system, quadrotor_control_system};
pub use physics::{
    constant_force_system, force_reset_system, physics_integrator_system, transform_sync_system,
};
pub use propulsion::{
    jet_controls_system, jet_thrust_system, piston_thrust_system, piston_throttle_system,
};
pub use trajectory::{launch_velocity, predict_vacuum_trajectory, trajectory_preview_system};
