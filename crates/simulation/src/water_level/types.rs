use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Level fraction drained per open gate per second.
pub(crate) const DRAIN_RATE_PER_GATE: f32 = 0.05;

/// Level fraction replenished per second while resupply is engaged.
pub(crate) const RESUPPLY_RATE: f32 = 0.2;

/// Level below which resupply engages.
pub(crate) const LOW_WATER_THRESHOLD: f32 = 0.2;

/// Level above which resupply disengages. Distinct from the low threshold so
/// the pump does not chatter at a single boundary.
pub(crate) const HIGH_WATER_THRESHOLD: f32 = 0.65;

/// Full-channel water level. The level doubles as the fraction the
/// presentation sink consumes.
pub const MAX_LEVEL: f32 = 1.0;

// =============================================================================
// Types
// =============================================================================

/// Sensor display tier derived from the current level.
///
/// The tier boundaries reuse the resupply hysteresis thresholds: below the
/// low threshold the sensor reads Low, above the high threshold Full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WaterLevelTier {
    /// Level below the low threshold: resupply territory.
    Low,
    /// Level inside the normal operating band.
    #[default]
    Normal,
    /// Level above the high threshold: channel close to full.
    Full,
}

impl WaterLevelTier {
    /// Human-readable name for the sensor display.
    pub fn name(self) -> &'static str {
        match self {
            WaterLevelTier::Low => "Low",
            WaterLevelTier::Normal => "Normal",
            WaterLevelTier::Full => "Full",
        }
    }

    /// Indicator color for the sensor display (linear RGB):
    /// amber / green / red.
    pub fn indicator_color(self) -> [f32; 3] {
        match self {
            WaterLevelTier::Low => [1.0, 0.757, 0.027],
            WaterLevelTier::Normal => [0.298, 0.686, 0.314],
            WaterLevelTier::Full => [0.957, 0.263, 0.212],
        }
    }
}

/// Classify a water level into its sensor display tier.
pub fn tier_from_level(level: f32) -> WaterLevelTier {
    if level < LOW_WATER_THRESHOLD {
        WaterLevelTier::Low
    } else if level > HIGH_WATER_THRESHOLD {
        WaterLevelTier::Full
    } else {
        WaterLevelTier::Normal
    }
}

/// Event fired when the sensor display tier changes.
#[derive(Event, Debug, Clone)]
pub struct WaterLevelTierEvent {
    pub old_tier: WaterLevelTier,
    pub new_tier: WaterLevelTier,
    /// Level at the moment the event fired.
    pub level: f32,
}

/// Channel water level resource, updated once per fixed tick.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct WaterLevelState {
    /// Current level, clamped to `[0.0, MAX_LEVEL]` after every update.
    pub current: f32,
    /// Whether resupply is engaged (the hysteresis state).
    pub is_resupplying: bool,
    /// Current sensor display tier.
    pub tier: WaterLevelTier,
}

impl Default for WaterLevelState {
    fn default() -> Self {
        Self {
            current: MAX_LEVEL,
            is_resupplying: false,
            tier: tier_from_level(MAX_LEVEL),
        }
    }
}

impl WaterLevelState {
    /// Current level as a fraction of the full channel (0.0 to 1.0).
    pub fn level_fraction(&self) -> f32 {
        self.current / MAX_LEVEL
    }
}
