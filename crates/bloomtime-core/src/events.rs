use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::progress::BadgeId;
use crate::task::TaskStatus;

/// Every state change in the system produces an Event.
/// The CLI prints them; a GUI would subscribe to them. Badge and completion
/// events double as the notification boundary for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TaskStarted {
        task_id: String,
        title: String,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    TaskPaused {
        task_id: String,
        elapsed_secs: u32,
        at: DateTime<Utc>,
    },
    TaskResumed {
        task_id: String,
        elapsed_secs: u32,
        at: DateTime<Utc>,
    },
    /// Emitted exactly once per task, whether completion was automatic
    /// (tick-triggered) or manual.
    TaskCompleted {
        task_id: String,
        title: String,
        auto: bool,
        points_awarded: u32,
        at: DateTime<Utc>,
    },
    BadgeEarned {
        badge: BadgeId,
        title: String,
        at: DateTime<Utc>,
    },
    /// Today's completed count reached the configured daily goal.
    DailyGoalReached {
        goal: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        task_id: String,
        title: String,
        status: TaskStatus,
        running: bool,
        elapsed_secs: u32,
        total_secs: u32,
        progress_pct: f64,
        at: DateTime<Utc>,
    },
}
