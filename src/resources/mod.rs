pub mod config;

pub use config::{
    AircraftConfig, ConfigError, GliderConfig, InitialState, JetConfig, LauncherConfig,
    PhysicsConfig, ProjectileConfig, QuadrotorConfig, SimulationConfig, VehicleConfig,
};
