//! Task timer state machine.
//!
//! The timer owns one task and has no internal threads -- the caller is
//! responsible for driving it, either with one `tick()` per second or by
//! flushing wall-clock time through `sync()`.
//!
//! ## State Transitions
//!
//! ```text
//! pending -> in_progress -> completed
//! ```
//!
//! Pause/resume toggle the `running` flag only; the task status never moves
//! backwards. Automatic completion (the budget runs out during a tick) and
//! manual completion share a single code path, so the completion credit is
//! emitted exactly once per task.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::progress::TASK_REWARD_POINTS;
use crate::task::{Task, TaskStatus};

/// Countdown timer for a single task.
///
/// Serializable so the CLI can persist the active timer between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskTimer {
    task: Task,
    /// Whether ticks currently advance the task. Independent of status.
    running: bool,
    /// Wall-clock position of the last applied second, used by `sync()`.
    #[serde(default)]
    last_synced_at: Option<DateTime<Utc>>,
}

impl TaskTimer {
    pub fn new(task: Task) -> Self {
        Self {
            task,
            running: false,
            last_synced_at: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn into_task(self) -> Task {
        self.task
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn status(&self) -> TaskStatus {
        self.task.status
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            task_id: self.task.id.clone(),
            title: self.task.title.clone(),
            status: self.task.status,
            running: self.running,
            elapsed_secs: self.task.elapsed_secs,
            total_secs: self.task.total_secs(),
            progress_pct: self.task.progress_pct(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start the countdown. Only valid for a pending task.
    pub fn start(&mut self) -> Option<Event> {
        if self.task.status != TaskStatus::Pending {
            return None;
        }
        self.task.status = TaskStatus::InProgress;
        self.running = true;
        self.last_synced_at = Some(Utc::now());
        Some(Event::TaskStarted {
            task_id: self.task.id.clone(),
            title: self.task.title.clone(),
            duration_secs: self.task.total_secs(),
            at: Utc::now(),
        })
    }

    /// Stop ticking without changing status. No-op unless in progress and
    /// running.
    pub fn pause(&mut self) -> Option<Event> {
        if self.task.status != TaskStatus::InProgress || !self.running {
            return None;
        }
        self.running = false;
        self.last_synced_at = None;
        Some(Event::TaskPaused {
            task_id: self.task.id.clone(),
            elapsed_secs: self.task.elapsed_secs,
            at: Utc::now(),
        })
    }

    /// Resume ticking. No-op unless in progress and paused.
    pub fn resume(&mut self) -> Option<Event> {
        if self.task.status != TaskStatus::InProgress || self.running {
            return None;
        }
        self.running = true;
        self.last_synced_at = Some(Utc::now());
        Some(Event::TaskResumed {
            task_id: self.task.id.clone(),
            elapsed_secs: self.task.elapsed_secs,
            at: Utc::now(),
        })
    }

    /// One-second advance. Call once per second while the timer is running.
    /// Returns `Some(Event::TaskCompleted)` when the budget is reached.
    pub fn tick(&mut self) -> Option<Event> {
        self.advance(1)
    }

    /// Advance by `secs` seconds, capped at the task's budget. Used for
    /// wall-clock catch-up; a zero advance is a no-op.
    pub fn advance(&mut self, secs: u32) -> Option<Event> {
        if !self.running || self.task.status != TaskStatus::InProgress || secs == 0 {
            return None;
        }
        let total = self.task.total_secs();
        self.task.elapsed_secs = self.task.elapsed_secs.saturating_add(secs).min(total);
        if self.task.elapsed_secs >= total {
            return self.finish(true);
        }
        None
    }

    /// Flush wall-clock time elapsed since the last sync into the task.
    /// Only whole seconds are applied; the remainder carries over.
    pub fn sync(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if !self.running || self.task.status != TaskStatus::InProgress {
            return None;
        }
        let last = match self.last_synced_at {
            Some(last) => last,
            None => {
                self.last_synced_at = Some(now);
                return None;
            }
        };
        let secs = (now - last).num_seconds().max(0);
        if secs == 0 {
            return None;
        }
        self.last_synced_at = Some(last + Duration::seconds(secs));
        self.advance(secs as u32)
    }

    /// Complete the task manually. Idempotent: a task that is already
    /// completed yields no event, so the completion credit cannot
    /// double-fire. Only valid once the task has been started.
    pub fn complete(&mut self) -> Option<Event> {
        if self.task.status != TaskStatus::InProgress {
            return None;
        }
        self.finish(false)
    }

    fn finish(&mut self, auto: bool) -> Option<Event> {
        self.task.status = TaskStatus::Completed;
        self.task.elapsed_secs = self.task.total_secs();
        self.task.completed_at = Some(Utc::now());
        self.running = false;
        self.last_synced_at = None;
        Some(Event::TaskCompleted {
            task_id: self.task.id.clone(),
            title: self.task.title.clone(),
            auto,
            points_awarded: TASK_REWARD_POINTS,
            at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer(minutes: u32) -> TaskTimer {
        TaskTimer::new(Task::new("test task", minutes).unwrap())
    }

    #[test]
    fn start_pause_resume() {
        let mut t = timer(1);
        assert_eq!(t.status(), TaskStatus::Pending);

        assert!(t.start().is_some());
        assert_eq!(t.status(), TaskStatus::InProgress);
        assert!(t.running());

        assert!(t.pause().is_some());
        assert_eq!(t.status(), TaskStatus::InProgress);
        assert!(!t.running());

        assert!(t.resume().is_some());
        assert!(t.running());
    }

    #[test]
    fn pause_and_resume_are_noops_when_pending() {
        let mut t = timer(1);
        assert!(t.pause().is_none());
        assert!(t.resume().is_none());
        assert_eq!(t.status(), TaskStatus::Pending);
    }

    #[test]
    fn start_twice_is_a_noop() {
        let mut t = timer(1);
        assert!(t.start().is_some());
        assert!(t.start().is_none());
    }

    #[test]
    fn tick_does_nothing_while_paused() {
        let mut t = timer(1);
        t.start();
        t.pause();
        assert!(t.tick().is_none());
        assert_eq!(t.task().elapsed_secs, 0);
    }

    #[test]
    fn sixty_ticks_auto_complete_a_one_minute_task() {
        let mut t = timer(1);
        t.start();
        for _ in 0..59 {
            assert!(t.tick().is_none());
        }
        assert_eq!(t.task().elapsed_secs, 59);

        let event = t.tick().expect("60th tick should complete");
        match event {
            Event::TaskCompleted { auto, points_awarded, .. } => {
                assert!(auto);
                assert_eq!(points_awarded, TASK_REWARD_POINTS);
            }
            other => panic!("expected TaskCompleted, got {other:?}"),
        }
        assert_eq!(t.status(), TaskStatus::Completed);
        assert_eq!(t.task().elapsed_secs, 60);
        assert!(!t.running());
        assert!(t.task().completed_at.is_some());
    }

    #[test]
    fn elapsed_never_exceeds_budget() {
        let mut t = timer(1);
        t.start();
        t.advance(10_000);
        assert_eq!(t.task().elapsed_secs, 60);
        assert_eq!(t.status(), TaskStatus::Completed);
    }

    #[test]
    fn manual_complete_fills_elapsed_and_fires_once() {
        let mut t = timer(5);
        t.start();
        t.tick();

        let event = t.complete().expect("manual complete");
        match event {
            Event::TaskCompleted { auto, .. } => assert!(!auto),
            other => panic!("expected TaskCompleted, got {other:?}"),
        }
        assert_eq!(t.task().elapsed_secs, t.task().total_secs());

        // Already completed: no second credit, ticks are inert.
        assert!(t.complete().is_none());
        assert!(t.tick().is_none());
    }

    #[test]
    fn complete_requires_started_task() {
        let mut t = timer(5);
        assert!(t.complete().is_none());
        assert_eq!(t.status(), TaskStatus::Pending);
    }

    #[test]
    fn sync_applies_whole_wall_clock_seconds() {
        let mut t = timer(2);
        t.start();
        let now = Utc::now();
        assert!(t.sync(now + Duration::seconds(30)).is_none());
        assert_eq!(t.task().elapsed_secs, 30);

        // Completing span triggers the same single completion path.
        let event = t.sync(now + Duration::seconds(500));
        assert!(matches!(event, Some(Event::TaskCompleted { auto: true, .. })));
        assert_eq!(t.task().elapsed_secs, 120);
    }

    #[test]
    fn sync_while_paused_is_inert() {
        let mut t = timer(2);
        t.start();
        t.pause();
        assert!(t.sync(Utc::now() + Duration::seconds(90)).is_none());
        assert_eq!(t.task().elapsed_secs, 0);
    }

    #[test]
    fn snapshot_reports_progress() {
        let mut t = timer(1);
        t.start();
        for _ in 0..30 {
            t.tick();
        }
        match t.snapshot() {
            Event::StateSnapshot {
                elapsed_secs,
                total_secs,
                progress_pct,
                running,
                ..
            } => {
                assert_eq!(elapsed_secs, 30);
                assert_eq!(total_secs, 60);
                assert!((progress_pct - 50.0).abs() < f64::EPSILON);
                assert!(running);
            }
            other => panic!("expected StateSnapshot, got {other:?}"),
        }
    }
}
