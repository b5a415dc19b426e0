//! Integration tests wiring the task timer to the progress store, plus
//! persistence across database reopens.

use chrono::NaiveDate;
use proptest::prelude::*;

use bloomtime_core::{
    BadgeId, Database, Event, ProgressStore, Task, TaskStatus, TaskTimer, UserStats,
    TASK_REWARD_POINTS,
};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

#[test]
fn one_minute_task_credits_progress_exactly_once() {
    let db = Database::open_memory().unwrap();
    let mut store = ProgressStore::with_database(db).unwrap();
    let mut timer = TaskTimer::new(Task::new("Vocabulary review", 1).unwrap());

    timer.start();
    let mut completion = None;
    for _ in 0..60 {
        if let Some(event) = timer.tick() {
            assert!(completion.is_none(), "completion fired more than once");
            completion = Some(event);
        }
    }

    let event = completion.expect("60 ticks should complete a 1-minute task");
    match event {
        Event::TaskCompleted {
            auto,
            points_awarded,
            ..
        } => {
            assert!(auto);
            assert_eq!(points_awarded, TASK_REWARD_POINTS);
        }
        other => panic!("expected TaskCompleted, got {other:?}"),
    }
    assert_eq!(timer.status(), TaskStatus::Completed);
    assert_eq!(timer.task().elapsed_secs, 60);

    store.complete_task_on(date(1)).unwrap();
    assert_eq!(store.stats().total_points, TASK_REWARD_POINTS);
    assert_eq!(store.stats().tasks_completed, 1);
    assert_eq!(store.stats().today_completed, 1);

    // Further ticks and completes on the finished timer yield nothing,
    // so the store cannot be credited a second time for this task.
    assert!(timer.tick().is_none());
    assert!(timer.complete().is_none());
}

#[test]
fn five_completions_earn_the_five_task_badge() {
    let db = Database::open_memory().unwrap();
    let mut store = ProgressStore::with_database(db).unwrap();

    for n in 1..=5u32 {
        let mut timer = TaskTimer::new(Task::new(format!("task {n}"), 1).unwrap());
        timer.start();
        let mut done = false;
        while !done {
            done = timer.tick().is_some();
        }
        store.complete_task_on(date(1)).unwrap();
    }

    assert_eq!(store.stats().tasks_completed, 5);
    assert!(store.stats().earned_badges.contains(&BadgeId::FirstTask));
    assert!(store.stats().earned_badges.contains(&BadgeId::FiveTasks));
    assert!(!store.stats().earned_badges.contains(&BadgeId::TenTasks));
}

#[test]
fn stats_survive_a_database_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bloomtime.db");

    {
        let db = Database::open_at(&path).unwrap();
        let mut store = ProgressStore::with_database(db).unwrap();
        store.complete_task_on(date(1)).unwrap();
        store.complete_task_on(date(2)).unwrap();
        store.set_daily_goal(5).unwrap();
    }

    let db = Database::open_at(&path).unwrap();
    let stats = db.load_stats().unwrap();
    assert_eq!(stats.total_points, 2 * TASK_REWARD_POINTS);
    assert_eq!(stats.tasks_completed, 2);
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.daily_goal, 5);
    assert_eq!(stats.last_completed_date, Some(date(2)));
}

#[test]
fn tasks_survive_a_database_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bloomtime.db");

    let original = {
        let db = Database::open_at(&path).unwrap();
        let mut task = Task::new("Essay outline", 45).unwrap();
        task.notes = Some("intro + 3 arguments".into());
        db.save_tasks(std::slice::from_ref(&task)).unwrap();
        task
    };

    let db = Database::open_at(&path).unwrap();
    assert_eq!(db.load_tasks().unwrap(), vec![original]);
}

#[test]
fn streak_day_by_day_matches_the_calendar_rule() {
    let db = Database::open_memory().unwrap();
    let mut store = ProgressStore::with_database(db).unwrap();

    // Two same-day completions: streak stays at 1.
    store.complete_task_on(date(10)).unwrap();
    store.complete_task_on(date(10)).unwrap();
    assert_eq!(store.stats().current_streak, 1);

    // Next two days: streak climbs.
    store.complete_task_on(date(11)).unwrap();
    store.complete_task_on(date(12)).unwrap();
    assert_eq!(store.stats().current_streak, 3);
    assert_eq!(store.stats().longest_streak, 3);

    // Two-day gap: streak restarts, longest is preserved.
    store.complete_task_on(date(15)).unwrap();
    assert_eq!(store.stats().current_streak, 1);
    assert_eq!(store.stats().longest_streak, 3);
}

proptest! {
    /// Elapsed time stays within the task budget under any command
    /// sequence, and a completed task has consumed its budget exactly.
    #[test]
    fn elapsed_stays_within_budget(
        minutes in 1u32..5,
        ops in prop::collection::vec(0u8..5, 1..200),
    ) {
        let mut timer = TaskTimer::new(Task::new("prop task", minutes).unwrap());
        timer.start();
        for op in ops {
            match op {
                0 => { timer.tick(); }
                1 => { timer.pause(); }
                2 => { timer.resume(); }
                3 => { timer.advance(37); }
                _ => { timer.complete(); }
            }
            let task = timer.task();
            prop_assert!(task.elapsed_secs <= task.total_secs());
            if task.status == TaskStatus::Completed {
                prop_assert_eq!(task.elapsed_secs, task.total_secs());
            }
        }
    }

    /// `longest_streak >= current_streak` after any sequence of completion
    /// dates, in any order of day gaps.
    #[test]
    fn longest_streak_dominates_current(day_offsets in prop::collection::vec(0u32..40, 1..60)) {
        let mut stats_days: Vec<NaiveDate> = day_offsets
            .iter()
            .map(|&off| NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + chrono::Days::new(u64::from(off)))
            .collect();
        stats_days.sort();

        let db = Database::open_memory().unwrap();
        let mut store = ProgressStore::with_database(db).unwrap();
        for day in stats_days {
            store.complete_task_on(day).unwrap();
            prop_assert!(store.stats().longest_streak >= store.stats().current_streak);
            prop_assert!(store.stats().current_streak >= 1);
        }
    }
}

#[test]
fn default_stats_match_documented_defaults() {
    let stats = UserStats::default();
    assert_eq!(stats.total_points, 0);
    assert_eq!(stats.daily_goal, 3);
    assert_eq!(stats.today_completed, 0);
    assert!(stats.earned_badges.is_empty());
    assert!(stats.last_completed_date.is_none());
}
