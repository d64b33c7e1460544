mod aircraft;
mod drag;
mod wing;

pub use aircraft::{aircraft_aero_system, calculate_aircraft_aero, AircraftAeroForces};
pub use drag::{calculate_quadratic_drag, quadratic_drag_system};
pub use wing::{
    angle_of_attack, calculate_wing_aero, calculate_wing_forces, drag_coefficient,
    flow_direction, lift_coefficient, wing_aero_system, WingLoad,
};
