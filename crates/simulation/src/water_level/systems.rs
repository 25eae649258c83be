use bevy::prelude::*;

use super::types::{
    tier_from_level, WaterLevelState, WaterLevelTierEvent, DRAIN_RATE_PER_GATE,
    HIGH_WATER_THRESHOLD, LOW_WATER_THRESHOLD, MAX_LEVEL, RESUPPLY_RATE,
};
use crate::gates::GateRegistry;
use crate::SimulationSet;

// =============================================================================
// Pure update
// =============================================================================

/// Advance the water level by one timestep.
///
/// Drain from open gates, then evaluate the resupply hysteresis (engage below
/// the low threshold, disengage only above the high threshold), then apply
/// resupply and clamp. Total over its whole domain: any `dt >= 0` and any
/// open-gate count yield a level in `[0.0, MAX_LEVEL]`.
pub fn step_water_level(
    current: f32,
    is_resupplying: bool,
    open_gate_count: u32,
    dt: f32,
) -> (f32, bool) {
    let mut level = current;
    if open_gate_count > 0 {
        level -= DRAIN_RATE_PER_GATE * open_gate_count as f32 * dt;
    }

    let mut resupplying = is_resupplying;
    if level < LOW_WATER_THRESHOLD {
        resupplying = true;
    } else if level > HIGH_WATER_THRESHOLD {
        resupplying = false;
    }

    if resupplying {
        level += RESUPPLY_RATE * dt;
    }

    (level.clamp(0.0, MAX_LEVEL), resupplying)
}

// =============================================================================
// Systems
// =============================================================================

/// System: integrate drain/resupply once per fixed tick and fire
/// `WaterLevelTierEvent` when the sensor display tier changes.
pub fn update_water_level(
    time: Res<Time>,
    gates: Res<GateRegistry>,
    mut water: ResMut<WaterLevelState>,
    mut tier_events: EventWriter<WaterLevelTierEvent>,
) {
    let (level, resupplying) = step_water_level(
        water.current,
        water.is_resupplying,
        gates.open_count(),
        time.delta_secs(),
    );
    water.current = level;
    water.is_resupplying = resupplying;

    let old_tier = water.tier;
    let new_tier = tier_from_level(level);
    water.tier = new_tier;
    if old_tier != new_tier {
        tier_events.send(WaterLevelTierEvent {
            old_tier,
            new_tier,
            level,
        });
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct WaterLevelPlugin;

impl Plugin for WaterLevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WaterLevelState>()
            .add_event::<WaterLevelTierEvent>()
            .add_systems(
                FixedUpdate,
                update_water_level.in_set(SimulationSet::Simulation),
            );
    }
}
