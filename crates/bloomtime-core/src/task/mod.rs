//! Task types and list queries.
//!
//! A task is the unit of work the timer runs against. Status moves forward
//! only:
//!
//!   PENDING ─────────> IN_PROGRESS ─────────> COMPLETED
//!
//! Pause/resume never change the status -- they only toggle the timer's
//! running flag (see [`crate::timer::TaskTimer`]).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Task status. Transitions are forward-only; `Completed` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not yet started (initial state)
    Pending,
    /// Timer has been started at least once
    InProgress,
    /// Finished (terminal state)
    Completed,
}

impl TaskStatus {
    /// Check if a transition is valid.
    pub fn can_transition_to(&self, to: TaskStatus) -> bool {
        match self {
            TaskStatus::Pending => matches!(to, TaskStatus::InProgress),
            TaskStatus::InProgress => matches!(to, TaskStatus::Completed),
            TaskStatus::Completed => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of task for organizing work.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Study,
    Exercise,
    Reading,
    Other,
}

impl Default for TaskCategory {
    fn default() -> Self {
        TaskCategory::Study
    }
}

/// Cosmetic timer visual attached to a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VisualStyle {
    Flower,
    Sun,
}

impl Default for VisualStyle {
    fn default() -> Self {
        VisualStyle::Flower
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Sort rank: high priority sorts first.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// A timed study task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Task title (non-empty)
    pub title: String,
    /// Countdown budget in minutes (positive)
    pub duration_min: u32,
    /// Task category
    #[serde(default)]
    pub category: TaskCategory,
    /// Cosmetic visual style
    #[serde(default)]
    pub visual: VisualStyle,
    /// Current status
    #[serde(default)]
    pub status: TaskStatus,
    /// Accumulated seconds, never exceeding `duration_min * 60`
    #[serde(default)]
    pub elapsed_secs: u32,
    /// Priority
    #[serde(default)]
    pub priority: Priority,
    /// Optional free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Completion timestamp (None while not completed)
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new pending task.
    ///
    /// # Errors
    /// Rejects empty titles and zero durations.
    pub fn new(title: impl Into<String>, duration_min: u32) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "title".into(),
                message: "title must not be empty".into(),
            });
        }
        if duration_min == 0 {
            return Err(ValidationError::InvalidValue {
                field: "duration_min".into(),
                message: "duration must be a positive number of minutes".into(),
            });
        }
        let now = Utc::now();
        Ok(Task {
            id: format!("task-{}-{}", now.timestamp(), uuid::Uuid::new_v4()),
            title,
            duration_min,
            category: TaskCategory::default(),
            visual: VisualStyle::default(),
            status: TaskStatus::Pending,
            elapsed_secs: 0,
            priority: Priority::default(),
            notes: None,
            created_at: now,
            completed_at: None,
        })
    }

    /// Total countdown budget in seconds.
    pub fn total_secs(&self) -> u32 {
        self.duration_min.saturating_mul(60)
    }

    /// Seconds left before the budget is exhausted.
    pub fn remaining_secs(&self) -> u32 {
        self.total_secs().saturating_sub(self.elapsed_secs)
    }

    /// 0.0 .. 100.0 progress toward completion.
    pub fn progress_pct(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        (f64::from(self.elapsed_secs) / f64::from(total) * 100.0).min(100.0)
    }
}

/// Sort order for task listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Newest,
    Oldest,
    Priority,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Newest
    }
}

/// Filter + sort over a task list.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub status: Option<TaskStatus>,
    pub category: Option<TaskCategory>,
    pub sort: SortOrder,
}

impl TaskQuery {
    /// Apply the query to a task list, returning matching tasks in order.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        let mut out: Vec<Task> = tasks
            .iter()
            .filter(|t| self.status.map_or(true, |s| t.status == s))
            .filter(|t| self.category.map_or(true, |c| t.category == c))
            .cloned()
            .collect();
        match self.sort {
            SortOrder::Newest => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::Oldest => out.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::Priority => {
                out.sort_by(|a, b| {
                    a.priority
                        .rank()
                        .cmp(&b.priority.rank())
                        .then(b.created_at.cmp(&a.created_at))
                });
            }
        }
        out
    }
}

/// Per-status counts over a task list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Count tasks by status.
pub fn summarize(tasks: &[Task]) -> TaskSummary {
    let mut summary = TaskSummary {
        total: tasks.len(),
        ..TaskSummary::default()
    };
    for task in tasks {
        match task.status {
            TaskStatus::Pending => summary.pending += 1,
            TaskStatus::InProgress => summary.in_progress += 1,
            TaskStatus::Completed => summary.completed += 1,
        }
    }
    summary
}

/// Calendar-day indicators: per-status counts for tasks created on a date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayIndicators {
    pub date: NaiveDate,
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Tasks created on the given local calendar date, with status counts.
pub fn indicators_for(tasks: &[Task], date: NaiveDate) -> DayIndicators {
    let day_tasks: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.created_at.with_timezone(&chrono::Local).date_naive() == date)
        .collect();
    let mut ind = DayIndicators {
        date,
        total: day_tasks.len(),
        pending: 0,
        in_progress: 0,
        completed: 0,
    };
    for task in day_tasks {
        match task.status {
            TaskStatus::Pending => ind.pending += 1,
            TaskStatus::InProgress => ind.in_progress += 1,
            TaskStatus::Completed => ind.completed += 1,
        }
    }
    ind
}

/// Tasks created on the given local calendar date.
pub fn tasks_on(tasks: &[Task], date: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.created_at.with_timezone(&chrono::Local).date_naive() == date)
        .cloned()
        .collect()
}
