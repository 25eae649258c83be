use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use simulation::commands::{ActionQueue, ActionSource, CanalAction};
use simulation::sim_time::FIXED_TIMESTEP;
use simulation::status::CanalStatus;
use simulation::{SimulationPlugin, TickCounter};

fn main() {
    let mut app = App::new();

    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(FIXED_TIMESTEP)))
        .add_plugins(LogPlugin::default())
        .add_plugins(SimulationPlugin);

    // Scripted demo: walk the control surface through manual demand, a rain
    // lockout, and an automation session, then exit.
    app.insert_resource(DemoScript::default());
    app.add_systems(Update, (drive_demo_script, report_status));

    app.run();
}

// ---------------------------------------------------------------------------
// Demo script
// ---------------------------------------------------------------------------

/// Tick-stamped command sequence the demo queues as it plays out.
#[derive(Resource)]
struct DemoScript {
    cursor: usize,
    steps: Vec<(u64, CanalAction)>,
    /// Tick at which the demo exits (a little after the last step).
    end_tick: u64,
}

impl Default for DemoScript {
    fn default() -> Self {
        let steps = vec![
            (20, CanalAction::SetDemand { active_count: 2 }),
            (60, CanalAction::SetDemand { active_count: 5 }),
            (100, CanalAction::SetDemand { active_count: 8 }),
            // Rain interrupts: everything closes, the demand change below is
            // stored but not applied until the rain stops.
            (140, CanalAction::ToggleRain),
            (160, CanalAction::SetDemand { active_count: 4 }),
            (200, CanalAction::ToggleRain),
            // Hand control to the scripted forecast for half a period.
            (240, CanalAction::ToggleAutomation),
            (420, CanalAction::ToggleAutomation),
            (440, CanalAction::SetAllGates { open: false }),
        ];
        let end_tick = 460;
        Self {
            cursor: 0,
            steps,
            end_tick,
        }
    }
}

/// Queue scripted actions as their tick comes up; exit once the script ends.
fn drive_demo_script(
    tick: Res<TickCounter>,
    mut script: ResMut<DemoScript>,
    mut queue: ResMut<ActionQueue>,
    mut exit: EventWriter<AppExit>,
) {
    while script.cursor < script.steps.len() {
        let (at, action) = script.steps[script.cursor];
        if tick.0 < at {
            break;
        }
        info!("demo: queueing {:?}", action);
        queue.push(tick.0, ActionSource::Script, action);
        script.cursor += 1;
    }

    if tick.0 >= script.end_tick {
        info!("demo: script complete, exiting");
        exit.send(AppExit::Success);
    }
}

// ---------------------------------------------------------------------------
// Status reporter
// ---------------------------------------------------------------------------

/// Log the presentation surface once a second (every 10th tick).
fn report_status(tick: Res<TickCounter>, status: Res<CanalStatus>) {
    if tick.0 == 0 || !tick.0.is_multiple_of(10) {
        return;
    }
    let gates: String = status
        .gates
        .iter()
        .map(|gate| if gate.is_open { 'O' } else { '-' })
        .collect();
    info!(
        "tick {:>4} | gates {} | water {:>5.2} {:?}{} | rain {} | automation {:?}",
        tick.0,
        gates,
        status.water_level_fraction,
        status.water_tier,
        if status.is_resupplying {
            " (resupplying)"
        } else {
            ""
        },
        if status.is_raining { "yes" } else { "no" },
        status.automation,
    );
}
