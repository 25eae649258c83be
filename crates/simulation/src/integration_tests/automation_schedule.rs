use crate::automation::{predict, AutomationStatus, DemandSeverity};
use crate::commands::CanalAction;
use crate::test_harness::TestCanal;

#[test]
fn activation_starts_with_zero_forecast_and_closed_gates() {
    let mut canal = TestCanal::new();
    canal.act_and_tick(CanalAction::SetAllGates { open: true });
    canal.act_and_tick(CanalAction::ToggleAutomation);

    // The oscillator starts at its minimum: forecast 0, everything closed.
    assert_eq!(canal.automation().last_prediction, 0);
    canal.assert_all_closed();
}

#[test]
fn forecast_peaks_at_half_period_with_all_gates_open() {
    let mut canal = TestCanal::new();
    canal.act_and_tick(CanalAction::ToggleAutomation);

    // Half period is 5π s ≈ 15.71 s; 158 ticks land within a rounding step
    // of the peak.
    canal.tick(158);
    assert_eq!(canal.automation().last_prediction, 100);
    canal.assert_gates([true, true, true]);

    match canal.status().automation {
        AutomationStatus::Active {
            prediction,
            severity,
        } => {
            assert_eq!(prediction, 100);
            assert_eq!(severity, DemandSeverity::High);
        }
        other => panic!("expected active automation status, got {other:?}"),
    }
}

#[test]
fn forecast_returns_near_zero_after_full_period() {
    let mut canal = TestCanal::new();
    canal.act_and_tick(CanalAction::ToggleAutomation);
    // Full period is 10π s ≈ 31.42 s ≈ 314 ticks.
    canal.tick(314);
    assert!(canal.automation().last_prediction <= 1);
    canal.assert_all_closed();
}

#[test]
fn rain_interruption_does_not_shift_the_phase() {
    let mut canal = TestCanal::new();
    canal.act_and_tick(CanalAction::ToggleAutomation);
    let started_at = canal.automation().started_at;

    canal.tick(30);
    let frozen = canal.automation().last_prediction;

    // Rain masks the output but the oscillator keeps running underneath.
    canal.act_and_tick(CanalAction::ToggleRain);
    canal.tick(50);
    assert_eq!(canal.automation().last_prediction, frozen);
    assert_eq!(canal.status().automation, AutomationStatus::Blocked);
    canal.assert_all_closed();

    canal.act_and_tick(CanalAction::ToggleRain);
    let automation = canal.automation();
    // Same activation timestamp, and the forecast resumes from the phase
    // the full elapsed time implies, not from where it was interrupted.
    assert!((automation.started_at - started_at).abs() < f32::EPSILON);
    let elapsed = canal.clock().elapsed - automation.started_at;
    assert_eq!(automation.last_prediction, predict(elapsed));
    assert_ne!(automation.last_prediction, frozen);
}

#[test]
fn automation_drives_gates_through_the_forecast_bands() {
    let mut canal = TestCanal::new();
    canal.act_and_tick(CanalAction::ToggleAutomation);

    // Walk one full period and check the gate pattern always matches the
    // staircase for the current forecast.
    for _ in 0..315 {
        canal.tick(1);
        let prediction = canal.automation().last_prediction;
        let expected = crate::automation::gates_for_prediction(prediction);
        canal.assert_gates(expected);
    }
}

#[test]
fn reengaging_automation_restarts_the_schedule() {
    let mut canal = TestCanal::new();
    canal.act_and_tick(CanalAction::ToggleAutomation);
    canal.tick(100);
    canal.act_and_tick(CanalAction::ToggleAutomation);
    canal.tick(17);

    canal.act_and_tick(CanalAction::ToggleAutomation);
    // Fresh activation: forecast restarts from the minimum.
    assert_eq!(canal.automation().last_prediction, 0);
    canal.tick(1);
    assert!(canal.automation().last_prediction <= 1);
}
