mod force_calculator;
mod integrator;

pub use force_calculator::{constant_force_system, force_reset_system, gravity_force};
pub use integrator::{physics_integrator_system, to_transform, transform_sync_system};
