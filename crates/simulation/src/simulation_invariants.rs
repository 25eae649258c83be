//! Runtime invariant validation for core simulation state.
//!
//! These systems run at the end of every tick and log warnings when an
//! invariant violation is detected. Violations are repaired in place (gates
//! force-closed, level clamped) so the presentation sink never observes an
//! inconsistent state, and counted for integration-test assertions.
//!
//! Validated invariants:
//! 1. **Rain lockout**: while rain is active, every gate is closed.
//! 2. **Water bounds**: the level stays within `[0, MAX_LEVEL]`.

use bevy::prelude::*;

use crate::gates::{GateRegistry, GATE_COUNT};
use crate::rain::RainState;
use crate::water_level::{WaterLevelState, MAX_LEVEL};
use crate::SimulationSet;

// ---------------------------------------------------------------------------
// Violation counters
// ---------------------------------------------------------------------------

/// Counts invariant violations detected since startup. Integration tests
/// assert these stay at zero across whole scenarios.
#[derive(Resource, Default, Debug)]
pub struct InvariantViolations {
    /// Gates found open while the rain lockout was active.
    pub rain_lockout: u32,
    /// Water level excursions outside `[0, MAX_LEVEL]`.
    pub water_bounds: u32,
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Checks that no gate is open while rain is active. Violating gates are
/// force-closed with a warning.
pub fn validate_rain_lockout(
    rain: Res<RainState>,
    mut gates: ResMut<GateRegistry>,
    mut violations: ResMut<InvariantViolations>,
) {
    if !rain.is_raining {
        return;
    }
    for index in 0..GATE_COUNT {
        if gates.is_open(index) {
            warn!(
                "Invariant violation: gate {} open during rain lockout. Closing.",
                index
            );
            gates.set_open(index, false);
            violations.rain_lockout += 1;
        }
    }
}

/// Checks that the water level stayed within bounds. Out-of-range levels are
/// clamped with a warning.
pub fn validate_water_bounds(
    mut water: ResMut<WaterLevelState>,
    mut violations: ResMut<InvariantViolations>,
) {
    if !(0.0..=MAX_LEVEL).contains(&water.current) {
        warn!(
            "Invariant violation: water level {} outside [0, {}]. Clamping.",
            water.current, MAX_LEVEL
        );
        water.current = water.current.clamp(0.0, MAX_LEVEL);
        violations.water_bounds += 1;
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct SimulationInvariantsPlugin;

impl Plugin for SimulationInvariantsPlugin {
    fn build(&self, app: &mut App) {
        // Validators run before the status rebuild so sinks only ever see
        // repaired state.
        app.init_resource::<InvariantViolations>().add_systems(
            FixedUpdate,
            (validate_rain_lockout, validate_water_bounds)
                .before(crate::status::update_status)
                .in_set(SimulationSet::PostSim),
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
