//! Notification system with priority tiers and auto-dismiss.
//!
//! Simulation systems emit [`NotificationEvent`]s (rain lockout warnings,
//! control-mode changes) which are collected into the [`NotificationLog`]
//! for the presentation sink. Emergency notifications persist until
//! dismissed; lower-priority notifications auto-dismiss after a per-priority
//! tick window.

use bevy::prelude::*;

use crate::sim_time::CanalClock;
use crate::{SimulationSet, TickCounter};

// =============================================================================
// Priority levels
// =============================================================================

/// Notification priority, from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NotificationPriority {
    /// Faults that demand immediate operator attention. Persist until
    /// dismissed.
    Emergency,
    /// Significant warnings (rain lockout, rejected gate commands).
    Warning,
    /// Noteworthy situations (conflicting control input).
    Attention,
    /// General information (control mode changes).
    Info,
}

impl NotificationPriority {
    /// Auto-dismiss duration in simulation ticks. `None` means persist until
    /// dismissed.
    pub fn auto_dismiss_ticks(&self) -> Option<u64> {
        match self {
            NotificationPriority::Emergency => None,
            NotificationPriority::Warning => Some(300), // ~30 s at 10 Hz
            NotificationPriority::Attention => Some(200), // ~20 s
            NotificationPriority::Info => Some(100),    // ~10 s
        }
    }

    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            NotificationPriority::Emergency => "EMERGENCY",
            NotificationPriority::Warning => "WARNING",
            NotificationPriority::Attention => "ATTENTION",
            NotificationPriority::Info => "INFO",
        }
    }
}

// =============================================================================
// Notification
// =============================================================================

/// A single notification with text, priority, and timing.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique ID for this notification.
    pub id: u64,
    /// Human-readable notification text.
    pub text: String,
    /// Priority level (determines label, color, and auto-dismiss).
    pub priority: NotificationPriority,
    /// Simulation time when the notification was created.
    pub created_at: f32,
    /// Tick when the notification was created (drives auto-dismiss).
    pub created_tick: u64,
    /// Whether the notification has been dismissed.
    pub dismissed: bool,
}

/// Event emitted by simulation systems to create a notification.
#[derive(Event, Debug, Clone)]
pub struct NotificationEvent {
    pub text: String,
    pub priority: NotificationPriority,
}

// =============================================================================
// Log
// =============================================================================

/// Resource collecting active notifications for the presentation sink.
#[derive(Resource, Debug, Default)]
pub struct NotificationLog {
    pub notifications: Vec<Notification>,
    next_id: u64,
}

impl NotificationLog {
    /// Append a notification, returning its ID.
    pub fn push(
        &mut self,
        text: String,
        priority: NotificationPriority,
        created_at: f32,
        created_tick: u64,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notifications.push(Notification {
            id,
            text,
            priority,
            created_at,
            created_tick,
            dismissed: false,
        });
        id
    }

    /// Mark a notification as dismissed. Unknown IDs are ignored.
    pub fn dismiss(&mut self, id: u64) {
        if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
            notification.dismissed = true;
        }
    }

    /// Iterate over notifications that are still visible.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| !n.dismissed)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }
}

// =============================================================================
// Systems
// =============================================================================

/// System: drain notification events into the log.
pub fn collect_notifications(
    mut events: EventReader<NotificationEvent>,
    mut log: ResMut<NotificationLog>,
    clock: Res<CanalClock>,
    tick: Res<TickCounter>,
) {
    for event in events.read() {
        log.push(event.text.clone(), event.priority, clock.elapsed, tick.0);
    }
}

/// System: dismiss notifications older than their priority window and drop
/// dismissed entries so the log does not grow without bound.
pub fn auto_dismiss_notifications(mut log: ResMut<NotificationLog>, tick: Res<TickCounter>) {
    let now = tick.0;
    let stale = log.notifications.iter().any(|notification| {
        notification.dismissed
            || notification
                .priority
                .auto_dismiss_ticks()
                .is_some_and(|window| now.saturating_sub(notification.created_tick) >= window)
    });
    if !stale {
        return;
    }
    log.notifications.retain(|notification| {
        !notification.dismissed
            && notification
                .priority
                .auto_dismiss_ticks()
                .is_none_or(|window| now.saturating_sub(notification.created_tick) < window)
    });
}

// =============================================================================
// Plugin
// =============================================================================

pub struct NotificationsPlugin;

impl Plugin for NotificationsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NotificationLog>()
            .add_event::<NotificationEvent>()
            .add_systems(
                FixedUpdate,
                (collect_notifications, auto_dismiss_notifications)
                    .chain()
                    .in_set(SimulationSet::PostSim),
            );
    }
}

// =============================================================================
// Tests
// =============================================================================
