use crate::commands::CanalAction;
use crate::simulation_invariants::InvariantViolations;
use crate::test_harness::TestCanal;
use crate::water_level::MAX_LEVEL;

#[test]
fn long_drain_cycle_stays_in_bounds() {
    // Three gates open for 400 ticks: the level falls into the hysteresis
    // band, the pump engages, and the two rates settle into a slow climb.
    // The level must never leave [0, MAX_LEVEL] at any observation point.
    let mut canal = TestCanal::new();
    canal.act_and_tick(CanalAction::SetAllGates { open: true });
    for _ in 0..400 {
        canal.tick(1);
        canal.assert_water_between(0.0, MAX_LEVEL);
    }

    let violations = canal.resource::<InvariantViolations>();
    assert_eq!(violations.water_bounds, 0);
}

#[test]
fn pump_engages_once_and_recovers_the_band() {
    let mut canal = TestCanal::new();
    canal.act_and_tick(CanalAction::SetAllGates { open: true });

    // Drain phase: 3 gates at 0.05/s each is 0.015 per tick, so the level
    // crosses the low threshold around tick 54.
    canal.tick(60);
    assert!(canal.water().is_resupplying);

    // Close the gates: pure resupply at 0.2/s clears the high threshold in
    // under 3 seconds and the pump disengages.
    canal.act_and_tick(CanalAction::SetAllGates { open: false });
    canal.tick(30);
    assert!(!canal.water().is_resupplying);
    canal.assert_water_between(0.65, MAX_LEVEL);
}

#[test]
fn resupply_holds_through_the_band_while_draining() {
    // With the pump engaged and all gates open the net rate is +0.005/s·tick,
    // so the level climbs through the band slowly. The pump must stay
    // engaged the entire climb.
    let mut canal = TestCanal::new().with_water_level(0.18);
    canal.act_and_tick(CanalAction::SetAllGates { open: true });
    canal.tick(1);
    assert!(canal.water().is_resupplying);

    for _ in 0..80 {
        canal.tick(1);
        let water = canal.water();
        if water.current <= 0.65 {
            assert!(
                water.is_resupplying,
                "pump disengaged inside the band at level {}",
                water.current
            );
        }
    }
}
