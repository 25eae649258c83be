//! Manual farmer-demand input and the staircase mapping it to gate states.

pub mod systems;
pub mod types;


pub use systems::{apply_demand, DemandPlugin};
pub use types::{gates_for_active_count, FarmerDemand};
