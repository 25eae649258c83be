use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Clear-sky background color for the presentation sink (linear RGB).
const CLEAR_SKY_COLOR: [f32; 3] = [0.529, 0.808, 0.922];

/// Storm background color while rain is active.
const STORM_SKY_COLOR: [f32; 3] = [0.2, 0.2, 0.2];

/// Process-wide rain flag.
///
/// Flipped only by the `ToggleRain` command. While set, every gate-opening
/// request is rejected and all gates stay closed; the flag also gates the
/// sink's rain particle visibility. Lives from init to teardown of the
/// session, nothing persisted.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RainState {
    pub is_raining: bool,
}

impl RainState {
    /// Background color for the presentation sink.
    pub fn sky_color(&self) -> [f32; 3] {
        if self.is_raining {
            STORM_SKY_COLOR
        } else {
            CLEAR_SKY_COLOR
        }
    }
}

/// Event fired when the rain flag flips.
#[derive(Event, Debug, Clone, Copy)]
pub struct RainChangedEvent {
    pub is_raining: bool,
}

pub struct RainPlugin;

impl Plugin for RainPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RainState>()
            .add_event::<RainChangedEvent>();
    }
}
