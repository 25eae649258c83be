//! Deterministic simulation ordering via `SystemSet` phases.
//!
//! These sets establish a contract for system execution order within the
//! `FixedUpdate` schedule. Plugins place their systems into the appropriate
//! set so that inter-plugin ordering is explicit and testable rather than
//! relying on implicit timing assumptions.
//!
//! ```text
//! PreSim  →  Simulation  →  PostSim
//! ```
//!
//! * **PreSim** – Tick counter, canal clock, queued command execution. These
//!   set up the per-tick state the core simulation reads.
//! * **Simulation** – Water level integration, then the automation
//!   oscillator driving the gate registry.
//! * **PostSim** – Invariant validation, status aggregation, and
//!   notification collection. These only read (or repair) simulation state,
//!   so a presentation sink can safely consume their output after the tick.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
///
/// Configured as a chain: `PreSim` → `Simulation` → `PostSim`. Individual
/// plugins use `.in_set(SimulationSet::X)` when registering their systems,
/// retaining the ability to add fine-grained `.after()` / `.before()`
/// constraints within the same phase.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Pre-simulation setup: tick counter, canal clock, command executor.
    PreSim,
    /// Core simulation: water level update, automation oscillator.
    Simulation,
    /// Post-simulation reporting: invariants, status, notifications.
    PostSim,
}
