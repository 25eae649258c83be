//! Channel water-level model: per-tick drain from open gates, resupply with
//! hysteresis, and the sensor display tier.

pub mod systems;
pub mod types;


pub use systems::{step_water_level, update_water_level, WaterLevelPlugin};
pub use types::{
    tier_from_level, WaterLevelState, WaterLevelTier, WaterLevelTierEvent, MAX_LEVEL,
};
