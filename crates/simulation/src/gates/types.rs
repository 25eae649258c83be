use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Number of independently controllable sluice gates (one per channel section).
pub const GATE_COUNT: usize = 3;

/// Target height of a fully closed gate (canal floor datum, metres).
pub const GATE_CLOSED_HEIGHT: f32 = 0.0;

/// Target height of a fully open gate (metres above the floor datum).
pub const GATE_OPEN_HEIGHT: f32 = 1.0;

/// Cosmetic leaf tilt applied while a gate is open (radians).
pub const GATE_OPEN_TILT_RAD: f32 = 0.1;

/// Display color for a channel section (linear RGB): red, green, blue.
pub fn section_color(index: usize) -> [f32; 3] {
    match index {
        0 => [1.0, 0.0, 0.0],
        1 => [0.0, 1.0, 0.0],
        _ => [0.0, 0.0, 1.0],
    }
}

// =============================================================================
// Types
// =============================================================================

/// State of a single sluice gate actuator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateState {
    /// Channel section this gate serves (0..GATE_COUNT).
    pub index: usize,
    pub is_open: bool,
    /// Height the actuator drives toward (the open or closed constant).
    pub target_height: f32,
    /// Cosmetic leaf tilt; non-zero only while open.
    pub tilt: f32,
}

impl GateState {
    fn closed(index: usize) -> Self {
        Self {
            index,
            is_open: false,
            target_height: GATE_CLOSED_HEIGHT,
            tilt: 0.0,
        }
    }
}

/// Ordered registry of the three gate actuators.
///
/// Mutated only through the command executor and the automation controller;
/// the rain-lockout invariant (rain active ⇒ all gates closed) is enforced at
/// those entry points and validated each tick in PostSim.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateRegistry {
    pub gates: [GateState; GATE_COUNT],
}

impl Default for GateRegistry {
    fn default() -> Self {
        Self {
            gates: [
                GateState::closed(0),
                GateState::closed(1),
                GateState::closed(2),
            ],
        }
    }
}

impl GateRegistry {
    /// Drive one gate to its open or closed position.
    ///
    /// Plain assignment, so repeated calls with the same arguments are
    /// idempotent. Callers are responsible for the rain lockout check;
    /// `index` must be within `0..GATE_COUNT`.
    pub fn set_open(&mut self, index: usize, open: bool) {
        let gate = &mut self.gates[index];
        gate.is_open = open;
        gate.target_height = if open {
            GATE_OPEN_HEIGHT
        } else {
            GATE_CLOSED_HEIGHT
        };
        gate.tilt = if open { GATE_OPEN_TILT_RAD } else { 0.0 };
    }

    /// Drive every gate to the same position.
    pub fn set_all(&mut self, open: bool) {
        for index in 0..GATE_COUNT {
            self.set_open(index, open);
        }
    }

    /// Apply a per-gate open/closed pattern (staircase output).
    pub fn apply_pattern(&mut self, pattern: [bool; GATE_COUNT]) {
        for (index, open) in pattern.into_iter().enumerate() {
            self.set_open(index, open);
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.gates[index].is_open
    }

    /// Number of currently open gates (drives the water-level drain rate).
    pub fn open_count(&self) -> u32 {
        self.gates.iter().filter(|gate| gate.is_open).count() as u32
    }

    /// Per-gate open flags in section order.
    pub fn open_flags(&self) -> [bool; GATE_COUNT] {
        [
            self.gates[0].is_open,
            self.gates[1].is_open,
            self.gates[2].is_open,
        ]
    }

    pub fn all_closed(&self) -> bool {
        self.gates.iter().all(|gate| !gate.is_open)
    }
}
