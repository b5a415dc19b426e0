//! # BloomTime Core Library
//!
//! Core business logic for BloomTime, a study timer with gamified rewards.
//! All operations are available through this library; the CLI binary is a
//! thin layer over it, and any future GUI is expected to be the same.
//!
//! ## Architecture
//!
//! - **Task Timer**: a per-task countdown state machine driven by `tick()`
//!   calls -- no internal threads
//! - **Progress Store**: points, levels, calendar-day streaks, badges and
//!   the daily goal, persisted after every mutation
//! - **Storage**: SQLite key-value records and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`TaskTimer`]: countdown state machine for a single task
//! - [`ProgressStore`]: owns user stats and funnels every stat mutation
//! - [`Database`]: key-value persistence for tasks, stats and reflections
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod progress;
pub mod reflection;
pub mod storage;
pub mod task;
pub mod timer;

pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use progress::{
    level_for_points, newly_earned, BadgeId, LevelInfo, ProgressStore, Requirement, UserStats,
    TASK_REWARD_POINTS,
};
pub use progress::unlocks::{unlocked_backdrops, unlocked_flowers, Backdrop, FlowerStyle};
pub use reflection::{Mood, Reflection};
pub use storage::{Config, Database};
pub use task::{DayIndicators, Priority, SortOrder, Task, TaskCategory, TaskQuery, TaskStatus,
    TaskSummary, VisualStyle};
pub use timer::TaskTimer;
