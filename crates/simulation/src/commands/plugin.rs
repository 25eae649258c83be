//! Plugin that wires up the command subsystem: queue, executor, and log.

use bevy::prelude::*;

use super::executor::execute_queued_actions;
use super::result_log::ActionResultLog;
use super::ActionQueue;
use crate::sim_time::advance_canal_clock;
use crate::SimulationSet;

/// Registers the action queue, result log, and executor system.
pub struct CanalActionsPlugin;

impl Plugin for CanalActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionQueue>();
        app.init_resource::<ActionResultLog>();

        // The executor reads the canal clock (automation activation stamps),
        // so it runs after the clock has advanced for this tick.
        app.add_systems(
            FixedUpdate,
            execute_queued_actions
                .after(advance_canal_clock)
                .in_set(SimulationSet::PreSim),
        );
    }
}
