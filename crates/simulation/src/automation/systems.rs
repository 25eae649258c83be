use bevy::prelude::*;

use super::types::{gates_for_prediction, predict, AutomationState};
use crate::gates::GateRegistry;
use crate::rain::RainState;
use crate::sim_time::CanalClock;
use crate::SimulationSet;

// =============================================================================
// Systems
// =============================================================================

/// System: while engaged, sample the oscillator and drive the gates.
///
/// Under rain the forecast is suppressed, not computed: `last_prediction`
/// keeps its pre-lockout value and the status reads Blocked. The phase keeps
/// advancing underneath (it is derived from the activation timestamp), so a
/// rain interruption neither pauses nor resets the schedule.
pub fn update_automation(
    clock: Res<CanalClock>,
    rain: Res<RainState>,
    mut automation: ResMut<AutomationState>,
    mut gates: ResMut<GateRegistry>,
) {
    if !automation.active || rain.is_raining {
        return;
    }

    let elapsed = clock.elapsed - automation.started_at;
    let prediction = predict(elapsed);
    automation.last_prediction = prediction;
    gates.apply_pattern(gates_for_prediction(prediction));
}

// =============================================================================
// Plugin
// =============================================================================

pub struct AutomationPlugin;

impl Plugin for AutomationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AutomationState>().add_systems(
            FixedUpdate,
            update_automation
                .after(crate::water_level::update_water_level)
                .in_set(SimulationSet::Simulation),
        );
    }
}
