//! Static badge catalog and the badge evaluator.
//!
//! Badges are a closed set: adding one means adding a variant here and a
//! line in each match, checked at compile time. A badge is earned once and
//! never removed.

use serde::{Deserialize, Serialize};

use super::UserStats;

/// One-time achievements, earned when a stat crosses a fixed threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BadgeId {
    FirstTask,
    FiveTasks,
    TenTasks,
    FiftyTasks,
    HundredTasks,
    #[serde(rename = "streak_3")]
    Streak3,
    #[serde(rename = "streak_7")]
    Streak7,
    #[serde(rename = "streak_30")]
    Streak30,
    #[serde(rename = "points_100")]
    Points100,
    #[serde(rename = "points_500")]
    Points500,
}

/// Which stat a badge compares against, with its threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", tag = "kind", content = "threshold")]
pub enum Requirement {
    Tasks(u32),
    Streak(u32),
    Points(u32),
}

impl Requirement {
    /// Threshold comparison is `>=` on the relevant stat field.
    pub fn satisfied_by(&self, stats: &UserStats) -> bool {
        match *self {
            Requirement::Tasks(n) => stats.tasks_completed >= n,
            Requirement::Streak(n) => stats.current_streak >= n,
            Requirement::Points(n) => stats.total_points >= n,
        }
    }
}

impl BadgeId {
    pub const ALL: [BadgeId; 10] = [
        BadgeId::FirstTask,
        BadgeId::FiveTasks,
        BadgeId::TenTasks,
        BadgeId::FiftyTasks,
        BadgeId::HundredTasks,
        BadgeId::Streak3,
        BadgeId::Streak7,
        BadgeId::Streak30,
        BadgeId::Points100,
        BadgeId::Points500,
    ];

    pub fn requirement(self) -> Requirement {
        match self {
            BadgeId::FirstTask => Requirement::Tasks(1),
            BadgeId::FiveTasks => Requirement::Tasks(5),
            BadgeId::TenTasks => Requirement::Tasks(10),
            BadgeId::FiftyTasks => Requirement::Tasks(50),
            BadgeId::HundredTasks => Requirement::Tasks(100),
            BadgeId::Streak3 => Requirement::Streak(3),
            BadgeId::Streak7 => Requirement::Streak(7),
            BadgeId::Streak30 => Requirement::Streak(30),
            BadgeId::Points100 => Requirement::Points(100),
            BadgeId::Points500 => Requirement::Points(500),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            BadgeId::FirstTask => "First Step",
            BadgeId::FiveTasks => "Persistent",
            BadgeId::TenTasks => "Hardworking",
            BadgeId::FiftyTasks => "Champion",
            BadgeId::HundredTasks => "Legend",
            BadgeId::Streak3 => "Consistent",
            BadgeId::Streak7 => "Committed",
            BadgeId::Streak30 => "Unstoppable",
            BadgeId::Points100 => "Point Collector",
            BadgeId::Points500 => "Point Master",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            BadgeId::FirstTask => "🌱",
            BadgeId::FiveTasks => "⭐",
            BadgeId::TenTasks => "🌟",
            BadgeId::FiftyTasks => "🏆",
            BadgeId::HundredTasks => "👑",
            BadgeId::Streak3 => "🔥",
            BadgeId::Streak7 => "💪",
            BadgeId::Streak30 => "🚀",
            BadgeId::Points100 => "💎",
            BadgeId::Points500 => "💰",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BadgeId::FirstTask => "Complete your first task",
            BadgeId::FiveTasks => "Complete 5 tasks",
            BadgeId::TenTasks => "Complete 10 tasks",
            BadgeId::FiftyTasks => "Complete 50 tasks",
            BadgeId::HundredTasks => "Complete 100 tasks",
            BadgeId::Streak3 => "3 day streak",
            BadgeId::Streak7 => "7 day streak",
            BadgeId::Streak30 => "30 day streak",
            BadgeId::Points100 => "Collect 100 points",
            BadgeId::Points500 => "Collect 500 points",
        }
    }
}

/// Pure evaluator: badges whose requirement is now satisfied and which the
/// user has not yet earned. Each badge is independent, so evaluation order
/// does not affect the result.
pub fn newly_earned(stats: &UserStats) -> Vec<BadgeId> {
    BadgeId::ALL
        .into_iter()
        .filter(|badge| !stats.earned_badges.contains(badge))
        .filter(|badge| badge.requirement().satisfied_by(stats))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_stats_earn_nothing() {
        assert!(newly_earned(&UserStats::default()).is_empty());
    }

    #[test]
    fn first_task_earns_first_badge_only() {
        let stats = UserStats {
            tasks_completed: 1,
            ..UserStats::default()
        };
        assert_eq!(newly_earned(&stats), vec![BadgeId::FirstTask]);
    }

    #[test]
    fn five_tasks_badge_requires_exactly_five() {
        let mut stats = UserStats {
            tasks_completed: 4,
            earned_badges: vec![BadgeId::FirstTask],
            ..UserStats::default()
        };
        assert!(newly_earned(&stats).is_empty());

        stats.tasks_completed = 5;
        assert_eq!(newly_earned(&stats), vec![BadgeId::FiveTasks]);
    }

    #[test]
    fn earned_badges_are_excluded() {
        let stats = UserStats {
            tasks_completed: 12,
            earned_badges: vec![BadgeId::FirstTask, BadgeId::FiveTasks, BadgeId::TenTasks],
            ..UserStats::default()
        };
        assert!(newly_earned(&stats).is_empty());
    }

    #[test]
    fn streak_and_points_requirements() {
        let stats = UserStats {
            current_streak: 7,
            total_points: 100,
            ..UserStats::default()
        };
        let earned = newly_earned(&stats);
        assert!(earned.contains(&BadgeId::Streak3));
        assert!(earned.contains(&BadgeId::Streak7));
        assert!(earned.contains(&BadgeId::Points100));
        assert!(!earned.contains(&BadgeId::Streak30));
        assert!(!earned.contains(&BadgeId::Points500));
    }

    #[test]
    fn badge_ids_serialize_to_catalog_names() {
        assert_eq!(
            serde_json::to_string(&BadgeId::Streak3).unwrap(),
            "\"streak_3\""
        );
        assert_eq!(
            serde_json::to_string(&BadgeId::Points500).unwrap(),
            "\"points_500\""
        );
        assert_eq!(
            serde_json::to_string(&BadgeId::FirstTask).unwrap(),
            "\"first_task\""
        );
    }
}
