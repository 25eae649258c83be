//! Per-tick aggregation of everything a presentation sink reads.
//!
//! The sink (renderer, TUI, logger) consumes [`CanalStatus`] once per tick
//! and never feeds anything back into the simulation.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::automation::{AutomationState, AutomationStatus};
use crate::demand::FarmerDemand;
use crate::gates::{section_color, GateRegistry, GATE_COUNT};
use crate::rain::RainState;
use crate::water_level::{WaterLevelState, WaterLevelTier};
use crate::SimulationSet;

// =============================================================================
// Types
// =============================================================================

/// Display snapshot of one gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateReadout {
    pub is_open: bool,
    pub target_height: f32,
    pub tilt: f32,
    /// Section display color (linear RGB).
    pub color: [f32; 3],
}

/// Read surface for presentation sinks, rebuilt every tick in PostSim.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanalStatus {
    pub gates: [GateReadout; GATE_COUNT],
    /// Water level as a fraction of the full channel.
    pub water_level_fraction: f32,
    pub water_tier: WaterLevelTier,
    /// Sensor indicator color for the current tier (linear RGB).
    pub water_indicator_color: [f32; 3],
    pub is_resupplying: bool,
    pub is_raining: bool,
    /// Background color matching the rain flag (linear RGB).
    pub sky_color: [f32; 3],
    /// Current farmer-demand count for the "(N active)" label.
    pub active_farmers: u32,
    pub automation: AutomationStatus,
}

impl Default for CanalStatus {
    fn default() -> Self {
        let gates = [0_usize, 1, 2].map(|index| GateReadout {
            is_open: false,
            target_height: crate::gates::GATE_CLOSED_HEIGHT,
            tilt: 0.0,
            color: section_color(index),
        });
        let water = WaterLevelState::default();
        let rain = RainState::default();
        Self {
            gates,
            water_level_fraction: water.level_fraction(),
            water_tier: water.tier,
            water_indicator_color: water.tier.indicator_color(),
            is_resupplying: water.is_resupplying,
            is_raining: rain.is_raining,
            sky_color: rain.sky_color(),
            active_farmers: 0,
            automation: AutomationStatus::Inactive,
        }
    }
}

// =============================================================================
// Systems
// =============================================================================

/// System: rebuild the status snapshot from simulation state.
pub fn update_status(
    gates: Res<GateRegistry>,
    water: Res<WaterLevelState>,
    rain: Res<RainState>,
    demand: Res<FarmerDemand>,
    automation: Res<AutomationState>,
    mut status: ResMut<CanalStatus>,
) {
    for (index, gate) in gates.gates.iter().enumerate() {
        status.gates[index] = GateReadout {
            is_open: gate.is_open,
            target_height: gate.target_height,
            tilt: gate.tilt,
            color: section_color(index),
        };
    }
    status.water_level_fraction = water.level_fraction();
    status.water_tier = water.tier;
    status.water_indicator_color = water.tier.indicator_color();
    status.is_resupplying = water.is_resupplying;
    status.is_raining = rain.is_raining;
    status.sky_color = rain.sky_color();
    status.active_farmers = demand.active_count;
    status.automation = automation.status(rain.is_raining);
}

// =============================================================================
// Plugin
// =============================================================================

pub struct StatusPlugin;

impl Plugin for StatusPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CanalStatus>()
            .add_systems(FixedUpdate, update_status.in_set(SimulationSet::PostSim));
    }
}

// =============================================================================
// Tests
// =============================================================================
