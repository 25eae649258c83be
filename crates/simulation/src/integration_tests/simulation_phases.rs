//! Smoke tests for the schedule layout: the PreSim → Simulation → PostSim
//! chain must build without ambiguity panics and advance per-tick state.

use crate::test_harness::TestCanal;
use crate::TickCounter;

#[test]
fn simulation_set_phases_build_and_tick() {
    // If the phase ordering were misconfigured (circular dependency, missing
    // configure_sets) App construction or the first update would panic.
    let mut canal = TestCanal::new();
    canal.tick(5);

    assert!(canal.resource::<TickCounter>().0 >= 5);
}

#[test]
fn canal_clock_advances_with_fixed_ticks() {
    let mut canal = TestCanal::new();
    canal.tick(10);
    let clock = canal.clock();
    assert!(
        (clock.elapsed - 1.0_f32).abs() < 1e-4,
        "expected ~1.0 s after 10 ticks, got {}",
        clock.elapsed
    );
}

#[test]
fn fresh_canal_starts_quiet() {
    let canal = TestCanal::new();
    canal.assert_all_closed();
    assert!(!canal.rain().is_raining);
    assert!(!canal.automation().active);
    assert_eq!(canal.demand().active_count, 0);
}
