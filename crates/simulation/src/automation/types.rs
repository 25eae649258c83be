use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::demand::gates_for_active_count;
use crate::gates::GATE_COUNT;

// =============================================================================
// Constants
// =============================================================================

/// Seconds of elapsed time per radian of oscillator phase. The forecast
/// period works out to `10π` seconds.
pub(crate) const PHASE_SECONDS_PER_RADIAN: f32 = 5.0;

// =============================================================================
// Types
// =============================================================================

/// Scripted demand-forecast state.
#[derive(Resource, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AutomationState {
    /// Whether the scripted controller is engaged.
    pub active: bool,
    /// Canal-clock timestamp recorded at activation. Phase is always
    /// computed from this instant: a rain lockout masks the output but never
    /// pauses or rewinds the oscillator.
    pub started_at: f32,
    /// Most recent forecast (0-100). Retained across a rain lockout.
    pub last_prediction: u8,
}

impl AutomationState {
    /// Presentation status for the current rain flag.
    pub fn status(&self, raining: bool) -> AutomationStatus {
        if !self.active {
            AutomationStatus::Inactive
        } else if raining {
            AutomationStatus::Blocked
        } else {
            AutomationStatus::Active {
                prediction: self.last_prediction,
                severity: DemandSeverity::from_prediction(self.last_prediction),
            }
        }
    }
}

/// Demand severity bucket for a forecast percentage, matching the staircase
/// bands: one gate, two gates, all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemandSeverity {
    /// Forecast <= 30: at most gate 0 runs.
    Low,
    /// Forecast 31-60: gates 0 and 1 run.
    Moderate,
    /// Forecast > 60: all three gates run.
    High,
}

impl DemandSeverity {
    pub fn from_prediction(prediction: u8) -> Self {
        if prediction > 60 {
            DemandSeverity::High
        } else if prediction > 30 {
            DemandSeverity::Moderate
        } else {
            DemandSeverity::Low
        }
    }

    /// Human-readable name for the status display.
    pub fn name(self) -> &'static str {
        match self {
            DemandSeverity::Low => "Low",
            DemandSeverity::Moderate => "Moderate",
            DemandSeverity::High => "High",
        }
    }
}

/// Automation status surfaced to the presentation sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AutomationStatus {
    /// Controller disengaged; manual demand drives the gates.
    #[default]
    Inactive,
    /// Controller engaged and driving the gates.
    Active {
        prediction: u8,
        severity: DemandSeverity,
    },
    /// Controller engaged but suppressed by the rain lockout.
    Blocked,
}

// =============================================================================
// Forecast
// =============================================================================

/// Deterministic demand forecast for an elapsed time since activation.
///
/// `round(100 · (0.5 + 0.5 · sin(elapsed/5 − π/2)))`: 0 at activation, 100
/// at the half period `5π`, full period `10π` seconds. The sine bounds the
/// result to `[0, 100]` by construction, so the cast is total.
pub fn predict(elapsed_since_activation: f32) -> u8 {
    let phase = elapsed_since_activation / PHASE_SECONDS_PER_RADIAN - FRAC_PI_2;
    (100.0 * (0.5 + 0.5 * phase.sin())).round() as u8
}

/// Map a forecast percentage onto the manual staircase at 10 points per
/// farmer, so both control paths share one breakpoint table: 0 closes
/// everything, (0, 30] runs gate 0, (30, 60] gates 0-1, above 60 all three.
pub fn gates_for_prediction(prediction: u8) -> [bool; GATE_COUNT] {
    gates_for_active_count(u32::from(prediction).div_ceil(10))
}
