//! # TestCanal — headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` for driving the simulation
//! without a window or renderer. The clock runs on a manual-duration update
//! strategy, so each `tick()` advances simulation time by exactly one fixed
//! timestep and every scenario is deterministic on any machine.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::automation::AutomationState;
use crate::commands::{ActionQueue, ActionResult, ActionResultLog, ActionSource, CanalAction};
use crate::demand::FarmerDemand;
use crate::gates::{GateRegistry, GATE_COUNT};
use crate::rain::RainState;
use crate::sim_time::{CanalClock, FIXED_TIMESTEP};
use crate::status::CanalStatus;
use crate::water_level::WaterLevelState;
use crate::{SimulationPlugin, TickCounter};

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Queue actions with `act()`, advance with `tick()`, then query and assert
/// on the resulting state.
pub struct TestCanal {
    app: App,
}

impl Default for TestCanal {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCanal {
    // -----------------------------------------------------------------------
    // Constructor
    // -----------------------------------------------------------------------

    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);

        // Every update advances the clock by exactly one fixed timestep,
        // independent of wall time.
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FIXED_TIMESTEP));

        // Run one update so Startup systems execute. The first update only
        // initializes the clock; no fixed tick runs yet.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // World setup (builder pattern)
    // -----------------------------------------------------------------------

    /// Set the water level directly, bypassing the drain model.
    pub fn with_water_level(mut self, level: f32) -> Self {
        self.app
            .world_mut()
            .resource_mut::<WaterLevelState>()
            .current = level;
        self
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Queue an action as the operator; it executes on the next tick.
    pub fn act(&mut self, action: CanalAction) {
        let tick = self.app.world().resource::<TickCounter>().0;
        self.app
            .world_mut()
            .resource_mut::<ActionQueue>()
            .push(tick, ActionSource::Operator, action);
    }

    /// Queue an action and run a single tick so it executes.
    pub fn act_and_tick(&mut self, action: CanalAction) {
        self.act(action);
        self.tick(1);
    }

    /// Run N fixed-update ticks (100 ms of simulation time each).
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Access the ECS world mutably (schedule runs, ad-hoc setup).
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn gates(&self) -> &GateRegistry {
        self.app.world().resource::<GateRegistry>()
    }

    pub fn water(&self) -> &WaterLevelState {
        self.app.world().resource::<WaterLevelState>()
    }

    pub fn rain(&self) -> &RainState {
        self.app.world().resource::<RainState>()
    }

    pub fn automation(&self) -> &AutomationState {
        self.app.world().resource::<AutomationState>()
    }

    pub fn demand(&self) -> &FarmerDemand {
        self.app.world().resource::<FarmerDemand>()
    }

    pub fn clock(&self) -> &CanalClock {
        self.app.world().resource::<CanalClock>()
    }

    pub fn status(&self) -> &CanalStatus {
        self.app.world().resource::<CanalStatus>()
    }

    /// Get a reference to any resource.
    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    /// The result of the most recently executed action, if any.
    pub fn last_result(&self) -> Option<&ActionResult> {
        self.resource::<ActionResultLog>()
            .last_n(1)
            .first()
            .map(|(_, result)| result)
    }

    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    /// Assert the per-gate open pattern.
    pub fn assert_gates(&self, expected: [bool; GATE_COUNT]) {
        let actual = self.gates().open_flags();
        assert_eq!(
            actual, expected,
            "Expected gate pattern {expected:?}, got {actual:?}"
        );
    }

    pub fn assert_all_closed(&self) {
        assert!(
            self.gates().all_closed(),
            "Expected all gates closed, got {:?}",
            self.gates().open_flags()
        );
    }

    /// Assert the water level lies within `[min, max]` (inclusive).
    pub fn assert_water_between(&self, min: f32, max: f32) {
        let level = self.water().current;
        assert!(
            level >= min && level <= max,
            "Expected water level in [{min}, {max}], got {level}"
        );
    }
}
