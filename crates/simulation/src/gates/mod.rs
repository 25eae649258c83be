//! Sluice gate actuators: open/closed state and target positions for the
//! three channel sections.

pub mod systems;
pub mod types;


pub use systems::GatesPlugin;
pub use types::{
    section_color, GateRegistry, GateState, GATE_CLOSED_HEIGHT, GATE_COUNT, GATE_OPEN_HEIGHT,
    GATE_OPEN_TILT_RAD,
};
