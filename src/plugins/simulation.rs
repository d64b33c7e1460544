use bevy::ecs::schedule::ExecutorKind;
use bevy::prelude::*;

use crate::plugins::FlightPhysicsPlugin;
use crate::resources::{PhysicsConfig, SimulationConfig};

/// Explicit fixed-step driver for hosts that own their frame loop.
///
/// Frame time is accumulated and converted into whole ticks of
/// [`PhysicsConfig::timestep`]; each tick runs the `FixedUpdate` schedule once on a
/// single thread. At most `max_substeps` ticks run per [`advance`](Self::advance)
/// call; any further backlog is dropped.
pub struct FlightSimulation {
    app: App,
    accumulator: f64,
    ticks: u64,
}

impl Default for FlightSimulation {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

impl FlightSimulation {
    /// Settings the scheduler cannot run are replaced by the defaults, see
    /// [`FlightPhysicsPlugin::new`].
    pub fn new(config: PhysicsConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(FlightPhysicsPlugin::new(config));
        app.edit_schedule(FixedUpdate, |schedule| {
            schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        })
        .edit_schedule(Update, |schedule| {
            schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        });

        let rate = 1.0 / app.world().resource::<PhysicsConfig>().timestep;
        info!("Flight simulation ready, fixed tick {:.1} Hz", rate);
        Self {
            app,
            accumulator: 0.0,
            ticks: 0,
        }
    }

    /// Build a driver and spawn every vehicle and launcher of a scenario.
    ///
    /// Returns the spawned entities, vehicles first, in file order.
    pub fn from_config(config: &SimulationConfig) -> (Self, Vec<Entity>) {
        let mut sim = Self::new(config.physics.clone());
        let world = sim.world_mut();

        let mut entities: Vec<Entity> = config
            .vehicles
            .iter()
            .map(|vehicle| vehicle.spawn_into(world))
            .collect();
        entities.extend(config.launchers.iter().map(|l| l.spawn_into(world)));

        info!("Spawned {} entities", entities.len());
        (sim, entities)
    }

    pub fn config(&self) -> &PhysicsConfig {
        self.app.world().resource::<PhysicsConfig>()
    }

    pub fn timestep(&self) -> f64 {
        self.config().timestep
    }

    pub fn spawn(&mut self, bundle: impl Bundle) -> Entity {
        self.app.world_mut().spawn(bundle).id()
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.app.world().get::<T>(entity)
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<Mut<'_, T>> {
        self.app.world_mut().get_mut::<T>(entity)
    }

    /// Ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated time [s]
    pub fn elapsed(&self) -> f64 {
        self.ticks as f64 * self.timestep()
    }

    /// Run exactly one fixed tick
    pub fn tick(&mut self) {
        self.app.world_mut().run_schedule(FixedUpdate);
        self.ticks += 1;
    }

    /// Run `count` ticks back to back
    pub fn run_ticks(&mut self, count: u32) {
        for _ in 0..count {
            self.tick();
        }
    }

    /// Feed elapsed frame time; returns the number of ticks run
    pub fn advance(&mut self, frame_dt: f64) -> u32 {
        if !(frame_dt.is_finite() && frame_dt > 0.0) {
            return 0;
        }

        let timestep = self.timestep();
        let max_substeps = self.config().max_substeps.max(1);
        self.accumulator += frame_dt;

        let mut steps = 0;
        while self.accumulator >= timestep && steps < max_substeps {
            self.tick();
            self.accumulator -= timestep;
            steps += 1;
        }

        if self.accumulator >= timestep {
            debug!(
                "Dropping {:.3}s of simulation backlog",
                self.accumulator - self.accumulator % timestep
            );
            self.accumulator %= timestep;
        }
        steps
    }

    /// Run the per-frame schedule (trajectory previews)
    pub fn frame(&mut self) {
        self.app.world_mut().run_schedule(Update);
    }
}
