//! Action executor system — drains the [`ActionQueue`] each fixed-update
//! tick and applies every queued [`CanalAction`] to the world, recording
//! results in the [`ActionResultLog`].
//!
//! Each action variant has a dedicated, minimal execution function that
//! validates inputs, mutates the canal resources, and returns an
//! [`ActionResult`]. The two user-visible rejection conditions (gate opening
//! under rain, manual demand under automation) are reported here, never
//! raised as errors deeper in the simulation.

use bevy::prelude::*;

use crate::automation::AutomationState;
use crate::demand::{apply_demand, FarmerDemand};
use crate::gates::{GateRegistry, GATE_COUNT};
use crate::notifications::{NotificationEvent, NotificationPriority};
use crate::rain::{RainChangedEvent, RainState};
use crate::sim_time::CanalClock;

use super::result_log::ActionResultLog;
use super::{ActionError, ActionQueue, ActionResult, CanalAction};

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Drains all pending actions from the queue and executes them in order.
#[allow(clippy::too_many_arguments)]
pub fn execute_queued_actions(
    mut queue: ResMut<ActionQueue>,
    mut log: ResMut<ActionResultLog>,
    mut gates: ResMut<GateRegistry>,
    mut rain: ResMut<RainState>,
    mut automation: ResMut<AutomationState>,
    mut demand: ResMut<FarmerDemand>,
    clock: Res<CanalClock>,
    mut rain_events: EventWriter<RainChangedEvent>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    let actions = queue.drain();
    for queued in actions {
        let result = execute_single(
            &queued.action,
            &mut gates,
            &mut rain,
            &mut automation,
            &mut demand,
            &clock,
            &mut rain_events,
            &mut notifications,
        );
        log.push(queued.action, result);
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn execute_single(
    action: &CanalAction,
    gates: &mut GateRegistry,
    rain: &mut RainState,
    automation: &mut AutomationState,
    demand: &mut FarmerDemand,
    clock: &CanalClock,
    rain_events: &mut EventWriter<RainChangedEvent>,
    notifications: &mut EventWriter<NotificationEvent>,
) -> ActionResult {
    match action {
        CanalAction::ToggleRain => {
            execute_toggle_rain(gates, rain, automation, demand, rain_events, notifications)
        }
        CanalAction::ToggleAutomation => {
            execute_toggle_automation(automation, clock, notifications)
        }
        CanalAction::SetGate { index, open } => execute_set_gate(*index, *open, gates, rain),
        CanalAction::SetAllGates { open } => {
            execute_set_all_gates(*open, gates, rain, notifications)
        }
        CanalAction::SetDemand { active_count } => {
            execute_set_demand(*active_count, gates, demand, rain, automation, notifications)
        }
    }
}

// ---------------------------------------------------------------------------
// Execution functions
// ---------------------------------------------------------------------------

/// Flip the rain flag. Turning rain on force-closes every gate. Turning it
/// off re-evaluates manual farmer demand, unless the scripted controller is
/// engaged (it reasserts its own staircase on the next tick).
fn execute_toggle_rain(
    gates: &mut GateRegistry,
    rain: &mut RainState,
    automation: &AutomationState,
    demand: &FarmerDemand,
    rain_events: &mut EventWriter<RainChangedEvent>,
    notifications: &mut EventWriter<NotificationEvent>,
) -> ActionResult {
    rain.is_raining = !rain.is_raining;
    rain_events.send(RainChangedEvent {
        is_raining: rain.is_raining,
    });

    if rain.is_raining {
        gates.set_all(false);
        notifications.send(NotificationEvent {
            text: "Rain detected: all gates closed, opening locked out".to_string(),
            priority: NotificationPriority::Warning,
        });
    } else {
        notifications.send(NotificationEvent {
            text: "Rain stopped: gate control released".to_string(),
            priority: NotificationPriority::Info,
        });
        if !automation.active {
            apply_demand(demand, gates);
        }
    }
    ActionResult::Success
}

/// Engage or disengage the scripted controller. Engaging records the
/// activation timestamp the oscillator phase is computed from and disables
/// manual demand input; disengaging re-enables it. The gates keep their last
/// commanded pattern until the next command or controller tick.
fn execute_toggle_automation(
    automation: &mut AutomationState,
    clock: &CanalClock,
    notifications: &mut EventWriter<NotificationEvent>,
) -> ActionResult {
    automation.active = !automation.active;
    if automation.active {
        automation.started_at = clock.elapsed;
        automation.last_prediction = 0;
        notifications.send(NotificationEvent {
            text: "Automation engaged: gates follow the scripted forecast".to_string(),
            priority: NotificationPriority::Info,
        });
    } else {
        notifications.send(NotificationEvent {
            text: "Automation disengaged: manual demand input re-enabled".to_string(),
            priority: NotificationPriority::Info,
        });
    }
    ActionResult::Success
}

/// Drive a single gate. An opening request under rain is rejected; closing
/// is always allowed.
fn execute_set_gate(
    index: usize,
    open: bool,
    gates: &mut GateRegistry,
    rain: &RainState,
) -> ActionResult {
    if index >= GATE_COUNT {
        return ActionResult::Error(ActionError::GateIndexOutOfRange);
    }
    if rain.is_raining && open {
        return ActionResult::Error(ActionError::RainLockout);
    }
    gates.set_open(index, open);
    ActionResult::Success
}

/// Drive all three gates. A rain-blocked opening attempt rejects the whole
/// call and raises a user-visible warning.
fn execute_set_all_gates(
    open: bool,
    gates: &mut GateRegistry,
    rain: &RainState,
    notifications: &mut EventWriter<NotificationEvent>,
) -> ActionResult {
    if rain.is_raining && open {
        notifications.send(NotificationEvent {
            text: "Gate opening blocked by rain".to_string(),
            priority: NotificationPriority::Warning,
        });
        return ActionResult::Error(ActionError::RainLockout);
    }
    gates.set_all(open);
    ActionResult::Success
}

/// Adopt a new farmer-demand count and re-evaluate the staircase.
///
/// Rejected while the scripted controller is engaged; the stored count
/// keeps its previous value. Under rain the count is adopted but evaluation
/// is deferred until the lockout clears.
fn execute_set_demand(
    active_count: u32,
    gates: &mut GateRegistry,
    demand: &mut FarmerDemand,
    rain: &RainState,
    automation: &AutomationState,
    notifications: &mut EventWriter<NotificationEvent>,
) -> ActionResult {
    if automation.active {
        notifications.send(NotificationEvent {
            text: "Manual demand ignored while automation is engaged".to_string(),
            priority: NotificationPriority::Attention,
        });
        return ActionResult::Error(ActionError::AutomationEngaged);
    }

    demand.active_count = active_count;
    if rain.is_raining {
        return ActionResult::SuccessWithWarning(
            "Demand stored; gates stay closed while rain is active".to_string(),
        );
    }
    apply_demand(demand, gates);
    ActionResult::Success
}
