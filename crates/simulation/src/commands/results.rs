use serde::{Deserialize, Serialize};

/// Outcome of one executed action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionResult {
    Success,
    /// The action succeeded but produced a warning the caller should see
    /// (e.g. demand stored while the rain lockout keeps gates closed).
    SuccessWithWarning(String),
    Error(ActionError),
}

impl ActionResult {
    /// Returns `true` for both `Success` and `SuccessWithWarning`.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            ActionResult::Success | ActionResult::SuccessWithWarning(_)
        )
    }

    /// Extract the warning string if present.
    pub fn warning(&self) -> Option<&str> {
        match self {
            ActionResult::SuccessWithWarning(warning) => Some(warning.as_str()),
            _ => None,
        }
    }
}

/// Non-fatal rejection reasons. Every rejection leaves the simulation in a
/// consistent state; nothing here aborts the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionError {
    /// A gate-opening request arrived while the rain lockout is active.
    RainLockout,
    /// Manual demand input arrived while the scripted controller is engaged.
    AutomationEngaged,
    /// Gate index outside the registry.
    GateIndexOutOfRange,
}
