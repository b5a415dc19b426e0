//! End-of-day reflections.
//!
//! A short mood-plus-note record captured once per calendar day, stored as a
//! persisted list. Saving again on the same day replaces that day's entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How the day felt, coarsest to brightest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Down,
    Meh,
    Okay,
    Happy,
    Thrilled,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Down, Mood::Meh, Mood::Okay, Mood::Happy, Mood::Thrilled];

    /// 1..=5 scale.
    pub fn score(self) -> u8 {
        match self {
            Mood::Down => 1,
            Mood::Meh => 2,
            Mood::Okay => 3,
            Mood::Happy => 4,
            Mood::Thrilled => 5,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Mood::Down => "😔",
            Mood::Meh => "😐",
            Mood::Okay => "🙂",
            Mood::Happy => "😊",
            Mood::Thrilled => "🤩",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reflection {
    pub date: NaiveDate,
    pub mood: Mood,
    #[serde(default)]
    pub note: String,
    /// Snapshot of today's completed count at the time of writing.
    pub tasks_completed: u32,
}

/// Insert or replace the entry for the reflection's date, keeping the list
/// ordered by date.
pub fn upsert(list: &mut Vec<Reflection>, reflection: Reflection) {
    match list.iter_mut().find(|r| r.date == reflection.date) {
        Some(existing) => *existing = reflection,
        None => {
            list.push(reflection);
            list.sort_by_key(|r| r.date);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn on(d: u32, mood: Mood) -> Reflection {
        Reflection {
            date: NaiveDate::from_ymd_opt(2026, 3, d).unwrap(),
            mood,
            note: String::new(),
            tasks_completed: 0,
        }
    }

    #[test]
    fn upsert_replaces_same_day_entry() {
        let mut list = Vec::new();
        upsert(&mut list, on(1, Mood::Meh));
        upsert(&mut list, on(1, Mood::Happy));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].mood, Mood::Happy);
    }

    #[test]
    fn upsert_keeps_date_order() {
        let mut list = Vec::new();
        upsert(&mut list, on(5, Mood::Okay));
        upsert(&mut list, on(2, Mood::Down));
        let days: Vec<u32> = list.iter().map(|r| r.date.day0() + 1).collect();
        assert_eq!(days, vec![2, 5]);
    }
}
