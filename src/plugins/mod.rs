mod physics;
mod simulation;

pub use physics::{FlightPhysicsPlugin, FlightSet};
pub use simulation::FlightSimulation;
