use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::gates::GATE_COUNT;

/// Number of farmers currently requesting water (the external checkbox
/// count). Adopted through the `SetDemand` command; rejected while the
/// scripted controller is engaged.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmerDemand {
    pub active_count: u32,
}

/// Deterministic staircase from active farmer count to per-gate open flags.
///
/// Gate 0 serves the first three farmers, gate 1 the next three, gate 2 the
/// rest. The breakpoints are the only structure; there is no interpolation.
pub fn gates_for_active_count(active_count: u32) -> [bool; GATE_COUNT] {
    [active_count > 0, active_count > 3, active_count > 6]
}
