//! Scenario-level integration tests driven through the `TestCanal` harness.

mod automation_schedule;
mod demand_staircase;
mod rain_lockout;
mod simulation_phases;
mod status_surface;
mod water_bounds;
