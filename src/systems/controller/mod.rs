mod attitude;
mod flight_controls;

pub use attitude::{
    attitude_error, attitude_hold_system, attitude_torque, hover_thrust, integrate_desired_yaw,
    quadrotor_control_system, shortest_rotation, AttitudeCommand,
};
pub use flight_controls::{
    calculate_control_torques, calculate_rate_changes, flight_controls_system, ControlTorques,
};
