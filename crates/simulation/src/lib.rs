use bevy::prelude::*;

pub mod automation;
pub mod commands;
pub mod demand;
pub mod gates;
pub mod notifications;
pub mod rain;
pub mod sim_time;
pub mod simulation_invariants;
pub mod simulation_sets;
pub mod status;
pub mod water_level;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use simulation_sets::SimulationSet;

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Global tick counter incremented each FixedUpdate. Queued actions are
/// stamped with it and notification auto-dismissal ages against it.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

pub fn tick_counter(mut tick: ResMut<TickCounter>) {
    tick.0 = tick.0.wrapping_add(1);
}

// ---------------------------------------------------------------------------
// Top-level plugin
// ---------------------------------------------------------------------------

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Core resources and schedule layout that don't belong to any feature.
        app.insert_resource(Time::<Fixed>::from_duration(sim_time::FIXED_TIMESTEP))
            .init_resource::<TickCounter>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::PreSim,
                    SimulationSet::Simulation,
                    SimulationSet::PostSim,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, tick_counter.in_set(SimulationSet::PreSim));

        // Clock and command surface.
        app.add_plugins((sim_time::SimTimePlugin, commands::CanalActionsPlugin));

        // Canal state: gates, water, rain, demand, automation.
        app.add_plugins((
            gates::GatesPlugin,
            water_level::WaterLevelPlugin,
            rain::RainPlugin,
            demand::DemandPlugin,
            automation::AutomationPlugin,
        ));

        // Reporting: notifications, status aggregation, invariant validation.
        app.add_plugins((
            notifications::NotificationsPlugin,
            status::StatusPlugin,
            simulation_invariants::SimulationInvariantsPlugin,
        ));
    }
}
