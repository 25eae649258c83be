//! Command surface: the queue, executor, and result log through which any
//! front end (CLI, GUI, test harness) drives the simulation.

pub mod actions;
pub mod executor;
pub mod plugin;
pub mod queue;
pub mod result_log;
pub mod results;

pub use actions::CanalAction;
pub use executor::execute_queued_actions;
pub use plugin::CanalActionsPlugin;
pub use queue::{ActionQueue, ActionSource, QueuedAction};
pub use result_log::ActionResultLog;
pub use results::{ActionError, ActionResult};
