pub mod direction;
pub mod error;
pub mod forces;
pub mod integrator;

pub use direction::unit_direction;
pub use error::PhysicsError;
pub use forces::{ForceAccumulator, ForceCategory, ForceRecord};
pub use integrator::{integrate, validate_state};
