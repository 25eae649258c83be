use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::SimulationSet;

/// Fixed simulation timestep: 100 ms (10 Hz).
pub const FIXED_TIMESTEP: Duration = Duration::from_millis(100);

/// Monotonic simulation clock.
///
/// `elapsed` accumulates the fixed-timestep delta every tick and is never
/// paused or rewound. The automation oscillator derives its phase from this
/// clock; a rain lockout masks the oscillator's *output* but the clock keeps
/// running underneath it.
#[derive(Resource, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CanalClock {
    /// Seconds of simulation time since startup.
    pub elapsed: f32,
}

pub fn advance_canal_clock(time: Res<Time>, mut clock: ResMut<CanalClock>) {
    clock.elapsed += time.delta_secs();
}

pub struct SimTimePlugin;

impl Plugin for SimTimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CanalClock>().add_systems(
            FixedUpdate,
            advance_canal_clock.in_set(SimulationSet::PreSim),
        );
    }
}
