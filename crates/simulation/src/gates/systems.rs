use bevy::prelude::*;

use super::types::GateRegistry;

// =============================================================================
// Plugin
// =============================================================================

/// Registers the gate registry. The registry has no system of its own: the
/// command executor (PreSim) and the automation controller (Simulation) write
/// it, and the invariant validator (PostSim) repairs it.
pub struct GatesPlugin;

impl Plugin for GatesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GateRegistry>();
    }
}
