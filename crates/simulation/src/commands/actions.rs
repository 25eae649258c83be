use serde::{Deserialize, Serialize};

/// A control-surface command. These five entry points are the only way a
/// front end mutates simulation state; everything else is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanalAction {
    /// Flip the rain flag. Turning rain on force-closes every gate; turning
    /// it off re-evaluates manual farmer demand.
    ToggleRain,
    /// Engage or disengage the scripted gate controller.
    ToggleAutomation,
    /// Manually drive one gate.
    SetGate { index: usize, open: bool },
    /// Manually drive all three gates at once.
    SetAllGates { open: bool },
    /// Adopt a new farmer-demand checkbox count.
    SetDemand { active_count: u32 },
}
