//! Progress engine: points, levels, calendar-day streaks and badges.
//!
//! All stat mutations funnel through [`ProgressStore`], which persists after
//! every mutation and evaluates badges against the post-mutation stats, so
//! the earned-badge set always reflects the stats on disk.

mod badge;
mod level;
pub mod unlocks;

pub use badge::{newly_earned, BadgeId, Requirement};
pub use level::{level_for_points, LevelInfo};

use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::storage::Database;

/// Points credited for each completed task.
pub const TASK_REWARD_POINTS: u32 = 10;

fn default_daily_goal() -> u32 {
    3
}

/// Persisted aggregate of the user's progress.
///
/// `total_points` only decreases on an explicit reset; `earned_badges` is
/// append-only; `longest_streak >= current_streak` always holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserStats {
    pub total_points: u32,
    pub tasks_completed: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Last local calendar date with a completed task.
    pub last_completed_date: Option<NaiveDate>,
    pub earned_badges: Vec<BadgeId>,
    /// Target completed tasks per day.
    pub daily_goal: u32,
    /// Tasks completed today; resets when the date rolls over.
    pub today_completed: u32,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_points: 0,
            tasks_completed: 0,
            current_streak: 0,
            longest_streak: 0,
            last_completed_date: None,
            earned_badges: Vec::new(),
            daily_goal: default_daily_goal(),
            today_completed: 0,
        }
    }
}

impl UserStats {
    /// Apply the calendar-day streak rule and completion counters.
    ///
    /// Same day: streak unchanged. Yesterday: streak + 1. Anything else
    /// (a gap, or no prior completion): streak restarts at 1. Only the
    /// date comparison matters, not elapsed real time.
    fn apply_completion(&mut self, today: NaiveDate) {
        let yesterday = today.pred_opt();
        if self.last_completed_date != Some(today) {
            self.current_streak = if self.last_completed_date == yesterday {
                self.current_streak + 1
            } else {
                1
            };
        }
        self.longest_streak = self.longest_streak.max(self.current_streak);

        self.total_points = self.total_points.saturating_add(TASK_REWARD_POINTS);
        self.tasks_completed = self.tasks_completed.saturating_add(1);
        self.today_completed = self.today_completed.saturating_add(1);
        self.last_completed_date = Some(today);
    }

    /// Zero today's count if the stored date is not `today`. Idempotent.
    pub fn roll_over(&mut self, today: NaiveDate) {
        if self.last_completed_date != Some(today) {
            self.today_completed = 0;
        }
    }
}

/// Owns the user stats and the database they persist to. Every mutation
/// saves explicitly; nothing persists as a side effect of reads.
pub struct ProgressStore {
    db: Database,
    stats: UserStats,
}

impl ProgressStore {
    /// Open against the default database.
    pub fn open() -> Result<Self> {
        Self::with_database(Database::open()?)
    }

    /// Open against an existing database, applying the day rollover.
    pub fn with_database(db: Database) -> Result<Self> {
        let mut stats = db.load_stats()?;
        stats.roll_over(Local::now().date_naive());
        Ok(Self { db, stats })
    }

    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    pub fn level(&self) -> LevelInfo {
        level_for_points(self.stats.total_points)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Add points and re-evaluate badges.
    ///
    /// # Errors
    /// Rejects a zero amount.
    pub fn add_points(&mut self, points: u32) -> Result<Vec<Event>> {
        if points == 0 {
            return Err(ValidationError::InvalidValue {
                field: "points".into(),
                message: "points must be positive".into(),
            }
            .into());
        }
        self.stats.total_points = self.stats.total_points.saturating_add(points);
        let mut events = Vec::new();
        self.award_badges(&mut events);
        self.save()?;
        Ok(events)
    }

    /// Credit one completed task using the current local date.
    pub fn complete_task(&mut self) -> Result<Vec<Event>> {
        self.complete_task_on(Local::now().date_naive())
    }

    /// Credit one completed task as of `today`. Applies the streak rule,
    /// adds the fixed reward, bumps counters, then evaluates badges and the
    /// daily goal against the updated stats.
    pub fn complete_task_on(&mut self, today: NaiveDate) -> Result<Vec<Event>> {
        self.stats.roll_over(today);
        self.stats.apply_completion(today);

        let mut events = Vec::new();
        if self.stats.today_completed == self.stats.daily_goal {
            events.push(Event::DailyGoalReached {
                goal: self.stats.daily_goal,
                at: Utc::now(),
            });
        }
        self.award_badges(&mut events);
        self.save()?;
        Ok(events)
    }

    /// Zero today's completed count. Idempotent.
    pub fn reset_daily_progress(&mut self) -> Result<()> {
        self.stats.today_completed = 0;
        self.save()
    }

    /// Overwrite the daily goal.
    ///
    /// # Errors
    /// Rejects a zero goal.
    pub fn set_daily_goal(&mut self, goal: u32) -> Result<()> {
        if goal == 0 {
            return Err(ValidationError::InvalidValue {
                field: "daily_goal".into(),
                message: "daily goal must be positive".into(),
            }
            .into());
        }
        self.stats.daily_goal = goal;
        self.save()
    }

    fn award_badges(&mut self, events: &mut Vec<Event>) {
        for badge in newly_earned(&self.stats) {
            self.stats.earned_badges.push(badge);
            events.push(Event::BadgeEarned {
                badge,
                title: badge.title().to_string(),
                at: Utc::now(),
            });
        }
    }

    fn save(&self) -> Result<()> {
        self.db.save_stats(&self.stats)
    }
}
