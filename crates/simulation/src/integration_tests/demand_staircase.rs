use crate::commands::CanalAction;
use crate::test_harness::TestCanal;

#[test]
fn four_farmers_open_first_two_gates() {
    let mut canal = TestCanal::new();
    canal.act_and_tick(CanalAction::SetDemand { active_count: 4 });
    canal.assert_gates([true, true, false]);
}

#[test]
fn staircase_bands_drive_expected_patterns() {
    let cases: [(u32, [bool; 3]); 6] = [
        (0, [false, false, false]),
        (1, [true, false, false]),
        (3, [true, false, false]),
        (4, [true, true, false]),
        (6, [true, true, false]),
        (7, [true, true, true]),
    ];
    for (count, expected) in cases {
        let mut canal = TestCanal::new();
        canal.act_and_tick(CanalAction::SetDemand {
            active_count: count,
        });
        canal.assert_gates(expected);
    }
}

#[test]
fn lowering_demand_closes_gates_again() {
    let mut canal = TestCanal::new();
    canal.act_and_tick(CanalAction::SetDemand { active_count: 8 });
    canal.assert_gates([true, true, true]);

    canal.act_and_tick(CanalAction::SetDemand { active_count: 2 });
    canal.assert_gates([true, false, false]);

    canal.act_and_tick(CanalAction::SetDemand { active_count: 0 });
    canal.assert_all_closed();
}

#[test]
fn demand_survives_an_automation_session() {
    // Demand set before automation is restored as the active input after
    // automation disengages and rain re-evaluation runs.
    let mut canal = TestCanal::new();
    canal.act_and_tick(CanalAction::SetDemand { active_count: 5 });
    canal.act_and_tick(CanalAction::ToggleAutomation);
    canal.tick(40);
    canal.act_and_tick(CanalAction::ToggleAutomation);

    // The stored count is untouched; a rain pulse re-runs its staircase.
    assert_eq!(canal.demand().active_count, 5);
    canal.act_and_tick(CanalAction::ToggleRain);
    canal.act_and_tick(CanalAction::ToggleRain);
    canal.assert_gates([true, true, false]);
}
