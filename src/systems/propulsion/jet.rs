use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    ConfigurationWarned, Halted, JetControls, JetEngine, PhysicsComponent, PropulsionState,
    SpatialComponent, ThrustMode,
};
use crate::physics::{ForceCategory, PhysicsError};
use crate::resources::PhysicsConfig;

/// Apply one tick of jet controls.
///
/// Held controls move the throttle continuously at `throttle_rate`; step commands move
/// it by `throttle_step`; the toggle flips the afterburner. The throttle is clamped to
/// [0, 1] after every adjustment.
pub fn update_jet_state(
    state: &mut PropulsionState,
    engine: &JetEngine,
    controls: &JetControls,
    dt: f64,
) {
    let ramp = engine.throttle_rate * dt;

    if controls.throttle_up_held {
        state.set_throttle(state.throttle + ramp);
    }
    if controls.throttle_down_held {
        state.set_throttle(state.throttle - ramp);
    }
    if controls.step_up {
        state.set_throttle(state.throttle + engine.throttle_step);
    }
    if controls.step_down {
        state.set_throttle(state.throttle - engine.throttle_step);
    }
    if controls.toggle_afterburner {
        state.afterburner = !state.afterburner;
    }
}

/// Thrust as `(force, application point)` in world frame.
///
/// The rating is `throttle * (afterburner ? afterburner_thrust : dry_thrust)` along the
/// nozzle's forward axis. In [`ThrustMode::Impulse`] the rating is an impulse delivered
/// each tick, so the equivalent force is `rating / dt`.
pub fn calculate_jet_thrust(
    engine: &JetEngine,
    state: &PropulsionState,
    spatial: &SpatialComponent,
    dt: f64,
) -> Result<(Vector3<f64>, Vector3<f64>), PhysicsError> {
    let nozzle = engine
        .nozzle
        .as_ref()
        .ok_or_else(|| PhysicsError::Configuration("jet engine has no nozzle".to_string()))?;

    let point = nozzle.world_position(spatial);
    let (axis, _, _) = nozzle.world_axes(spatial);
    let rating = state.throttle * engine.max_thrust(state.afterburner);

    let magnitude = match engine.thrust_mode {
        ThrustMode::Continuous => rating,
        ThrustMode::Impulse if dt > 0.0 => rating / dt,
        ThrustMode::Impulse => 0.0,
    };

    Ok((axis * magnitude, point))
}

pub fn jet_controls_system(
    mut query: Query<(Entity, &mut JetControls, &JetEngine, &mut PropulsionState), Without<Halted>>,
    config: Res<PhysicsConfig>,
) {
    let dt = config.timestep;
    for (entity, mut controls, engine, mut state) in query.iter_mut() {
        let events = controls.take_events();
        let was_afterburner = state.afterburner;

        update_jet_state(&mut state, engine, &events, dt);

        if events.step_up || events.step_down {
            debug!("{:?} throttle stepped to {:.2}", entity, state.throttle);
        }
        if state.afterburner != was_afterburner {
            debug!("{:?} afterburner {}", entity, if state.afterburner { "on" } else { "off" });
        }
    }
}

pub fn jet_thrust_system(
    mut commands: Commands,
    mut query: Query<
        (
            Entity,
            &JetEngine,
            &mut PropulsionState,
            &SpatialComponent,
            &mut PhysicsComponent,
            Has<ConfigurationWarned>,
        ),
        Without<Halted>,
    >,
    config: Res<PhysicsConfig>,
) {
    let dt = config.timestep;
    for (entity, engine, mut state, spatial, mut physics, warned) in query.iter_mut() {
        state.last_thrust = state.throttle * engine.max_thrust(state.afterburner);

        // Nozzle is checked at idle too
        match calculate_jet_thrust(engine, &state, spatial, dt) {
            Ok((force, point)) => {
                if state.throttle > 0.0 {
                    physics.forces.add_force_at_point(
                        force,
                        point,
                        ForceCategory::Propulsive,
                        "jet_thrust",
                    );
                }
            }
            Err(err) => {
                if !warned {
                    warn!("Jet engine on {:?} disabled: {}", entity, err);
                    commands.entity(entity).insert(ConfigurationWarned);
                }
            }
        }
    }
}
