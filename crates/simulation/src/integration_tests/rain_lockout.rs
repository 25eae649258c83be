use crate::commands::CanalAction;
use crate::simulation_invariants::InvariantViolations;
use crate::test_harness::TestCanal;

#[test]
fn rain_closes_gates_regardless_of_prior_state() {
    // Every possible prior pattern must collapse to all-closed the moment
    // rain starts.
    for pattern in 0..8_u32 {
        let mut canal = TestCanal::new();
        for index in 0..3 {
            if pattern & (1 << index) != 0 {
                canal.act(CanalAction::SetGate { index, open: true });
            }
        }
        canal.tick(1);
        canal.act_and_tick(CanalAction::ToggleRain);
        canal.assert_all_closed();
    }
}

#[test]
fn gates_stay_closed_for_the_duration_of_rain() {
    let mut canal = TestCanal::new();
    canal.act_and_tick(CanalAction::SetAllGates { open: true });
    canal.act_and_tick(CanalAction::ToggleRain);

    // Repeated opening attempts across a long lockout never stick.
    for _ in 0..20 {
        canal.act(CanalAction::SetAllGates { open: true });
        canal.act(CanalAction::SetGate {
            index: 0,
            open: true,
        });
        canal.tick(5);
        canal.assert_all_closed();
    }
}

#[test]
fn lockout_scenario_never_trips_invariant_checks() {
    let mut canal = TestCanal::new();
    canal.act_and_tick(CanalAction::SetDemand { active_count: 9 });
    canal.act_and_tick(CanalAction::ToggleRain);
    canal.tick(50);
    canal.act_and_tick(CanalAction::ToggleRain);
    canal.tick(50);

    let violations = canal.resource::<InvariantViolations>();
    assert_eq!(violations.rain_lockout, 0);
    assert_eq!(violations.water_bounds, 0);
}

#[test]
fn set_gate_twice_is_idempotent() {
    let mut canal = TestCanal::new();
    canal.act_and_tick(CanalAction::SetGate {
        index: 2,
        open: true,
    });
    let once = canal.gates().clone();

    canal.act_and_tick(CanalAction::SetGate {
        index: 2,
        open: true,
    });
    assert_eq!(*canal.gates(), once);
}
