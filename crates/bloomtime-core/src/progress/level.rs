//! Level calculator: cumulative points mapped onto an ordered threshold
//! table.

use serde::Serialize;

/// Ascending (threshold, title) pairs. Level N is 1-based index N-1.
const LEVELS: [(u32, &str); 8] = [
    (0, "Beginner"),
    (50, "Learner"),
    (150, "Advanced"),
    (300, "Expert"),
    (500, "Professional"),
    (800, "Master"),
    (1200, "Genius"),
    (2000, "Legend"),
];

/// Gap to the hypothetical next level once past the last threshold.
const OVERFLOW_GAP: u32 = 500;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct LevelInfo {
    /// 1-based level number.
    pub level: u32,
    pub title: &'static str,
    /// Progress toward the next level, clamped to 0..=100.
    pub progress_pct: f64,
}

/// Highest level whose threshold is `<= points`, with progress toward the
/// next threshold.
pub fn level_for_points(points: u32) -> LevelInfo {
    let index = LEVELS
        .iter()
        .rposition(|&(threshold, _)| points >= threshold)
        .unwrap_or(0);
    let (current, title) = LEVELS[index];
    let next = LEVELS
        .get(index + 1)
        .map_or(current + OVERFLOW_GAP, |&(threshold, _)| threshold);

    let span = next - current;
    let progress_pct = if span == 0 {
        0.0
    } else {
        (f64::from(points - current) / f64::from(span) * 100.0).clamp(0.0, 100.0)
    };

    LevelInfo {
        level: (index + 1) as u32,
        title,
        progress_pct,
    }
}
