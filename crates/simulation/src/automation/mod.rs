//! Scripted automation: a deterministic sine-wave demand forecast that
//! drives the gates through the same staircase as manual demand.

pub mod systems;
pub mod types;


pub use systems::{update_automation, AutomationPlugin};
pub use types::{
    gates_for_prediction, predict, AutomationState, AutomationStatus, DemandSeverity,
};
