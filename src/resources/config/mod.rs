pub mod loader;
pub mod physics;
pub mod vehicles;

pub use loader::{ConfigError, SimulationConfig};
pub use physics::PhysicsConfig;
pub use vehicles::{
    AircraftConfig, GliderConfig, InitialState, JetConfig, LauncherConfig, ProjectileConfig,
    QuadrotorConfig, VehicleConfig, MIN_QUADROTOR_MASS,
};
