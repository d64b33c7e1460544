pub mod components;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod systems;

pub mod prelude {
    pub use crate::components::*;
    pub use crate::physics::{
        integrate, validate_state, ForceAccumulator, ForceCategory, ForceRecord, PhysicsError,
    };
    pub use crate::plugins::{FlightPhysicsPlugin, FlightSet, FlightSimulation};
    pub use crate::resources::*;
    pub use crate::systems::{launch_velocity, predict_vacuum_trajectory};
}
