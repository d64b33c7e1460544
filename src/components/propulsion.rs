use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::Mount;

/// Throttle and thrust bookkeeping shared by every engine type
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropulsionState {
    /// Current throttle setting [0-1]
    pub throttle: f64,
    pub afterburner: bool,
    /// Thrust applied on the last tick [N], diagnostic only
    pub last_thrust: f64,
}

impl PropulsionState {
    pub fn with_throttle(throttle: f64) -> Self {
        Self {
            throttle: throttle.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    pub fn set_throttle(&mut self, throttle: f64) {
        self.throttle = if throttle.is_finite() {
            throttle.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }
}

/// Piston-style engine: throttle ramps at a fixed rate, thrust along body forward
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PistonEngine {
    /// Thrust at full throttle [N]
    pub max_thrust: f64,
    /// Throttle change per second at full input [1/s]
    pub throttle_rate: f64,
}

impl Default for PistonEngine {
    fn default() -> Self {
        Self {
            max_thrust: 200_000.0,
            throttle_rate: 1.0,
        }
    }
}

/// How the jet turns its thrust rating into a load each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrustMode {
    /// The rating is applied as an impulse [N s] every tick, independent of `dt`
    #[default]
    Impulse,
    /// The rating is a continuous force [N]
    Continuous,
}

/// Jet engine with held/stepped throttle and an afterburner toggle
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JetEngine {
    /// Nozzle position and thrust axis (mount forward). `None` disables the engine.
    pub nozzle: Option<Mount>,
    pub dry_thrust: f64,
    pub afterburner_thrust: f64,
    /// Throttle change per second while a hold control is pressed [1/s]
    pub throttle_rate: f64,
    /// Throttle change per discrete step command
    pub throttle_step: f64,
    pub thrust_mode: ThrustMode,
}

impl Default for JetEngine {
    fn default() -> Self {
        Self {
            nozzle: Some(Mount::default()),
            dry_thrust: 79_000.0,
            afterburner_thrust: 129_000.0,
            throttle_rate: 1.0,
            throttle_step: 0.05,
            thrust_mode: ThrustMode::Impulse,
        }
    }
}

impl JetEngine {
    /// Rating selected by the afterburner flag
    pub fn max_thrust(&self, afterburner: bool) -> f64 {
        if afterburner {
            self.afterburner_thrust
        } else {
            self.dry_thrust
        }
    }
}
