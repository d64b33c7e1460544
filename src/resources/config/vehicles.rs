use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::{
    AeroSample, AircraftAero, AircraftBundle, AircraftControls, AttitudeHold, FlightControls,
    GliderBundle, JetBundle, JetControls, JetEngine, Launcher, Mount, PhysicsComponent,
    PistonEngine, ProjectileBundle, PropulsionState, QuadraticDrag, Quadrotor, QuadrotorBundle,
    QuadrotorControls, RigidBodyBundle, SpatialComponent, ThrustMode, TrajectoryPreview, Wing,
};

/// Lightest quadrotor the controller accepts [kg]
pub const MIN_QUADROTOR_MASS: f64 = 0.01;

/// Pose and motion a vehicle starts with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialState {
    pub position: Vector3<f64>,
    /// World frame [m/s]
    pub velocity: Vector3<f64>,
    /// Heading about world up [deg]; positive turns the nose left
    pub yaw_deg: f64,
    /// Nose-up positive [deg]
    pub pitch_deg: f64,
    /// Right-bank positive [deg]
    pub roll_deg: f64,
}

impl Default for InitialState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            yaw_deg: 0.0,
            pitch_deg: 0.0,
            roll_deg: 0.0,
        }
    }
}

impl InitialState {
    pub fn attitude(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.yaw_deg.to_radians())
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.pitch_deg.to_radians())
            * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.roll_deg.to_radians())
    }

    pub fn spatial(&self) -> SpatialComponent {
        SpatialComponent::new(
            self.position,
            self.velocity,
            self.attitude(),
            Vector3::zeros(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    pub drag_coefficient: f64,
    pub air_density: f64,
    pub wind: Vector3<f64>,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            name: "projectile".to_string(),
            mass: 1.0,
            radius: 0.1,
            drag_coefficient: 0.47,
            air_density: 1.225,
            wind: Vector3::zeros(),
        }
    }
}

impl ProjectileConfig {
    pub fn drag(&self) -> QuadraticDrag {
        QuadraticDrag::sphere(self.radius, self.drag_coefficient, self.air_density, self.wind)
    }

    pub fn bundle(&self, initial: &InitialState) -> ProjectileBundle {
        ProjectileBundle {
            body: RigidBodyBundle::new(initial.spatial(), PhysicsComponent::point_mass(self.mass)),
            drag: self.drag(),
            name: Name::new(self.name.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GliderConfig {
    pub name: String,
    pub mass: f64,
    /// Full extents along body X/Y/Z for the box inertia [m]
    pub extents: Vector3<f64>,
    pub wing: Wing,
}

impl Default for GliderConfig {
    fn default() -> Self {
        Self {
            name: "glider".to_string(),
            mass: 5.0,
            extents: Vector3::new(1.5, 0.2, 2.0),
            wing: Wing::default(),
        }
    }
}

impl GliderConfig {
    pub fn bundle(&self, initial: &InitialState) -> GliderBundle {
        GliderBundle {
            body: RigidBodyBundle::new(
                initial.spatial(),
                PhysicsComponent::solid_box(self.mass, self.extents),
            ),
            wing: self.wing.clone(),
            sample: AeroSample::default(),
            name: Name::new(self.name.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftConfig {
    pub name: String,
    pub mass: f64,
    pub extents: Vector3<f64>,
    /// Body frame [m]
    pub center_of_mass: Vector3<f64>,
    pub angular_damping: f64,
    pub initial_throttle: f64,
    pub engine: PistonEngine,
    pub aero: AircraftAero,
    pub controls: FlightControls,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            name: "aircraft".to_string(),
            mass: 10_000.0,
            extents: Vector3::new(15.0, 3.0, 12.0),
            center_of_mass: Vector3::zeros(),
            angular_damping: 1.5,
            initial_throttle: 0.7,
            engine: PistonEngine::default(),
            aero: AircraftAero::default(),
            controls: FlightControls::default(),
        }
    }
}

impl AircraftConfig {
    pub fn bundle(&self, initial: &InitialState) -> AircraftBundle {
        let physics = PhysicsComponent::solid_box(self.mass, self.extents)
            .with_center_of_mass(self.center_of_mass)
            .with_damping(0.0, self.angular_damping);

        AircraftBundle {
            body: RigidBodyBundle::new(initial.spatial(), physics),
            aero: self.aero.clone(),
            engine: self.engine.clone(),
            propulsion: PropulsionState::with_throttle(self.initial_throttle),
            controls: AircraftControls::default(),
            flight_controls: self.controls.clone(),
            name: Name::new(self.name.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JetConfig {
    pub name: String,
    pub mass: f64,
    pub extents: Vector3<f64>,
    pub nozzle: Option<Mount>,
    pub dry_thrust: f64,
    pub afterburner_thrust: f64,
    pub throttle_rate: f64,
    pub throttle_step: f64,
    pub thrust_mode: ThrustMode,
}

impl Default for JetConfig {
    fn default() -> Self {
        let engine = JetEngine::default();
        Self {
            name: "jet".to_string(),
            mass: 12_000.0,
            extents: Vector3::new(15.0, 3.0, 10.0),
            nozzle: Some(Mount::at(Vector3::new(-7.0, 0.0, 0.0))),
            dry_thrust: engine.dry_thrust,
            afterburner_thrust: engine.afterburner_thrust,
            throttle_rate: engine.throttle_rate,
            throttle_step: engine.throttle_step,
            thrust_mode: engine.thrust_mode,
        }
    }
}

impl JetConfig {
    pub fn engine(&self) -> JetEngine {
        JetEngine {
            nozzle: self.nozzle.clone(),
            dry_thrust: self.dry_thrust,
            afterburner_thrust: self.afterburner_thrust,
            throttle_rate: self.throttle_rate,
            throttle_step: self.throttle_step,
            thrust_mode: self.thrust_mode,
        }
    }

    pub fn bundle(&self, initial: &InitialState) -> JetBundle {
        JetBundle {
            body: RigidBodyBundle::new(
                initial.spatial(),
                PhysicsComponent::solid_box(self.mass, self.extents),
            ),
            engine: self.engine(),
            propulsion: PropulsionState::default(),
            controls: JetControls::default(),
            name: Name::new(self.name.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadrotorConfig {
    pub name: String,
    /// Floored at [`MIN_QUADROTOR_MASS`]
    pub mass: f64,
    pub extents: Vector3<f64>,
    pub quadrotor: Quadrotor,
}

impl Default for QuadrotorConfig {
    fn default() -> Self {
        Self {
            name: "quadrotor".to_string(),
            mass: 1.5,
            extents: Vector3::new(0.5, 0.1, 0.5),
            quadrotor: Quadrotor::default(),
        }
    }
}

impl QuadrotorConfig {
    pub fn bundle(&self, initial: &InitialState) -> QuadrotorBundle {
        let mass = self.mass.max(MIN_QUADROTOR_MASS);
        let spatial = initial.spatial();
        let hold = AttitudeHold::from_attitude(&spatial.attitude);

        QuadrotorBundle {
            body: RigidBodyBundle::new(spatial, PhysicsComponent::solid_box(mass, self.extents)),
            quadrotor: self.quadrotor.clone(),
            hold,
            controls: QuadrotorControls::default(),
            name: Name::new(self.name.clone()),
        }
    }
}

/// One vehicle of any archetype, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VehicleConfig {
    Projectile {
        #[serde(default)]
        initial: InitialState,
        #[serde(flatten)]
        config: ProjectileConfig,
    },
    Glider {
        #[serde(default)]
        initial: InitialState,
        #[serde(flatten)]
        config: GliderConfig,
    },
    Aircraft {
        #[serde(default)]
        initial: InitialState,
        #[serde(flatten)]
        config: AircraftConfig,
    },
    Jet {
        #[serde(default)]
        initial: InitialState,
        #[serde(flatten)]
        config: JetConfig,
    },
    Quadrotor {
        #[serde(default)]
        initial: InitialState,
        #[serde(flatten)]
        config: QuadrotorConfig,
    },
}

impl VehicleConfig {
    pub fn name(&self) -> &str {
        match self {
            VehicleConfig::Projectile { config, .. } => &config.name,
            VehicleConfig::Glider { config, .. } => &config.name,
            VehicleConfig::Aircraft { config, .. } => &config.name,
            VehicleConfig::Jet { config, .. } => &config.name,
            VehicleConfig::Quadrotor { config, .. } => &config.name,
        }
    }

    pub fn initial(&self) -> &InitialState {
        match self {
            VehicleConfig::Projectile { initial, .. }
            | VehicleConfig::Glider { initial, .. }
            | VehicleConfig::Aircraft { initial, .. }
            | VehicleConfig::Jet { initial, .. }
            | VehicleConfig::Quadrotor { initial, .. } => initial,
        }
    }

    /// Spawn the vehicle's bundle and return its entity
    pub fn spawn_into(&self, world: &mut World) -> Entity {
        match self {
            VehicleConfig::Projectile { initial, config } => world.spawn(config.bundle(initial)).id(),
            VehicleConfig::Glider { initial, config } => world.spawn(config.bundle(initial)).id(),
            VehicleConfig::Aircraft { initial, config } => world.spawn(config.bundle(initial)).id(),
            VehicleConfig::Jet { initial, config } => world.spawn(config.bundle(initial)).id(),
            VehicleConfig::Quadrotor { initial, config } => world.spawn(config.bundle(initial)).id(),
        }
    }
}

/// A fixed launcher with its trajectory preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub name: String,
    pub initial: InitialState,
    pub launcher: Launcher,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            name: "launcher".to_string(),
            initial: InitialState::default(),
            launcher: Launcher::default(),
        }
    }
}

impl LauncherConfig {
    pub fn spawn_into(&self, world: &mut World) -> Entity {
        world
            .spawn((
                self.initial.spatial(),
                self.launcher.clone(),
                TrajectoryPreview::default(),
                Name::new(self.name.clone()),
            ))
            .id()
    }
}
