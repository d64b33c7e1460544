mod jet;
mod piston;

pub use jet::{calculate_jet_thrust, jet_controls_system, jet_thrust_system, update_jet_state};
pub use piston::{
    calculate_piston_thrust, piston_thrust_system, piston_throttle_system, update_piston_throttle,
};
