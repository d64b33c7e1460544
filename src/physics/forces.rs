use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Represents the different sources of force that can act on a body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Propulsive,
    Gravitational,
    /// Pilot or autopilot torques
    Control,
    /// Non-physical corrections such as velocity alignment
    Stabilization,
    Custom(String),
}

/// A single labelled contribution made during the current tick.
///
/// Forces and torques are world-frame. `point` is the world-space application point;
/// contributions applied at the centre of mass carry the centre of mass itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForceRecord {
    pub label: String,
    pub force: Vector3<f64>,
    /// Total torque about the centre of mass, including the lever-arm term
    pub torque: Vector3<f64>,
    pub point: Vector3<f64>,
    pub category: ForceCategory,
}

/// Collects forces and torques for one body during one tick.
///
/// The accumulator is reset at the start of every tick, filled by the models and
/// consumed once by the integrator. Records stay readable until the next reset so an
/// external visualiser can draw them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForceAccumulator {
    records: Vec<ForceRecord>,
    center_of_mass: Vector3<f64>,
    net_force: Vector3<f64>,
    net_torque: Vector3<f64>,
}

impl ForceAccumulator {
    pub fn new(center_of_mass: Vector3<f64>) -> Self {
        Self {
            center_of_mass,
            ..Default::default()
        }
    }

    /// Drop every contribution, keeping the current centre of mass.
    pub fn clear(&mut self) {
        self.records.clear();
        self.net_force = Vector3::zeros();
        self.net_torque = Vector3::zeros();
    }

    /// Clear and re-anchor at the body's current world centre of mass.
    pub fn reset(&mut self, center_of_mass: Vector3<f64>) {
        self.clear();
        self.center_of_mass = center_of_mass;
    }

    pub fn center_of_mass(&self) -> Vector3<f64> {
        self.center_of_mass
    }

    /// Add a force and pure torque acting through an arbitrary world point.
    ///
    /// The lever-arm torque `(point - com) x force` is folded into the stored torque.
    pub fn add(
        &mut self,
        force: Vector3<f64>,
        torque: Vector3<f64>,
        point: Vector3<f64>,
        category: ForceCategory,
        label: impl Into<String>,
    ) {
        let arm = point - self.center_of_mass;
        let total_torque = torque + arm.cross(&force);

        self.net_force += force;
        self.net_torque += total_torque;
        self.records.push(ForceRecord {
            label: label.into(),
            force,
            torque: total_torque,
            point,
            category,
        });
    }

    /// Add a force acting through the centre of mass
    pub fn add_force(
        &mut self,
        force: Vector3<f64>,
        category: ForceCategory,
        label: impl Into<String>,
    ) {
        let com = self.center_of_mass;
        self.add(force, Vector3::zeros(), com, category, label);
    }

    /// Add a force acting at a world point
    pub fn add_force_at_point(
        &mut self,
        force: Vector3<f64>,
        point: Vector3<f64>,
        category: ForceCategory,
        label: impl Into<String>,
    ) {
        self.add(force, Vector3::zeros(), point, category, label);
    }

    /// Add a pure torque
    pub fn add_torque(
        &mut self,
        torque: Vector3<f64>,
        category: ForceCategory,
        label: impl Into<String>,
    ) {
        let com = self.center_of_mass;
        self.add(Vector3::zeros(), torque, com, category, label);
    }

    pub fn net_force(&self) -> Vector3<f64> {
        self.net_force
    }

    pub fn net_torque(&self) -> Vector3<f64> {
        self.net_torque
    }

    pub fn records(&self) -> &[ForceRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Summed force of every record carrying `label`
    pub fn force_by_label(&self, label: &str) -> Option<Vector3<f64>> {
        let mut matched = self.records.iter().filter(|r| r.label == label).peekable();
        matched.peek()?;
        Some(matched.map(|r| r.force).sum())
    }

    /// Summed force of a given category
    pub fn force_by_category(&self, category: &ForceCategory) -> Vector3<f64> {
        self.records
            .iter()
            .filter(|r| &r.category == category)
            .map(|r| r.force)
            .sum()
    }

    /// The resultant as a single record, for "total force" overlays
    pub fn net_record(&self) -> ForceRecord {
        ForceRecord {
            label: "net".to_string(),
            force: self.net_force,
            torque: self.net_torque,
            point: self.center_of_mass,
            category: ForceCategory::Custom("net".to_string()),
        }
    }
}
