use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::CanalAction;

/// Origin of a queued action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionSource {
    /// A human at the control surface.
    Operator,
    /// A scripted driver (demo scenario, test harness).
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedAction {
    /// Tick at which the action was queued.
    pub tick: u64,
    pub source: ActionSource,
    pub action: CanalAction,
}

/// FIFO queue of pending actions, drained by the executor each tick.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionQueue {
    pending: Vec<QueuedAction>,
}

impl ActionQueue {
    pub fn push(&mut self, tick: u64, source: ActionSource, action: CanalAction) {
        self.pending.push(QueuedAction {
            tick,
            source,
            action,
        });
    }

    pub fn drain(&mut self) -> Vec<QueuedAction> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
