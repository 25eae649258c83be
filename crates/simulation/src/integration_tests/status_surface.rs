use crate::automation::AutomationStatus;
use crate::commands::CanalAction;
use crate::gates::GATE_OPEN_HEIGHT;
use crate::test_harness::TestCanal;
use crate::water_level::WaterLevelTier;

#[test]
fn status_mirrors_gate_registry() {
    let mut canal = TestCanal::new();
    canal.act_and_tick(CanalAction::SetDemand { active_count: 4 });

    let status = canal.status();
    assert!(status.gates[0].is_open);
    assert!(status.gates[1].is_open);
    assert!(!status.gates[2].is_open);
    assert!((status.gates[0].target_height - GATE_OPEN_HEIGHT).abs() < f32::EPSILON);
    assert!(status.gates[0].tilt > 0.0);
    assert!((status.gates[2].tilt - 0.0_f32).abs() < f32::EPSILON);
    assert_eq!(status.active_farmers, 4);
}

#[test]
fn status_tracks_rain_and_sky() {
    let mut canal = TestCanal::new();
    let clear_sky = canal.status().sky_color;

    canal.act_and_tick(CanalAction::ToggleRain);
    let status = canal.status();
    assert!(status.is_raining);
    assert_ne!(status.sky_color, clear_sky);
}

#[test]
fn status_tracks_water_tier_and_indicator() {
    let mut canal = TestCanal::new().with_water_level(0.1);
    canal.tick(1);

    let status = canal.status();
    assert_eq!(status.water_tier, WaterLevelTier::Low);
    assert_eq!(
        status.water_indicator_color,
        WaterLevelTier::Low.indicator_color()
    );
    assert!(status.is_resupplying);
    assert!(status.water_level_fraction < 0.2_f32);
}

#[test]
fn status_reports_automation_blocked_under_rain() {
    let mut canal = TestCanal::new();
    canal.act_and_tick(CanalAction::ToggleAutomation);
    canal.tick(10);
    assert!(matches!(
        canal.status().automation,
        AutomationStatus::Active { .. }
    ));

    canal.act_and_tick(CanalAction::ToggleRain);
    assert_eq!(canal.status().automation, AutomationStatus::Blocked);

    canal.act_and_tick(CanalAction::ToggleRain);
    assert!(matches!(
        canal.status().automation,
        AutomationStatus::Active { .. }
    ));
}
