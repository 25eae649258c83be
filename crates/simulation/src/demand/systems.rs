use bevy::prelude::*;

use super::types::{gates_for_active_count, FarmerDemand};
use crate::gates::GateRegistry;

// =============================================================================
// Demand evaluation
// =============================================================================

/// Re-evaluate the manual staircase and drive the gates to match.
///
/// Callers must hold off while the rain lockout is active: under rain the
/// staircase is not evaluated at all and every gate stays closed until the
/// lockout clears.
pub fn apply_demand(demand: &FarmerDemand, gates: &mut GateRegistry) {
    gates.apply_pattern(gates_for_active_count(demand.active_count));
}

// =============================================================================
// Plugin
// =============================================================================

pub struct DemandPlugin;

impl Plugin for DemandPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FarmerDemand>();
    }
}
