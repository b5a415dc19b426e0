//! Progress statistics commands.

use clap::Subcommand;

use bloomtime_core::ProgressStore;

use super::{print_events, CliResult};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Print user stats with the derived level
    Show,
    /// Set the daily goal (tasks per day)
    Goal {
        /// Target completed tasks per day
        goal: u32,
    },
    /// Zero today's completed count
    ResetToday,
    /// Award bonus points
    Award {
        /// Points to add
        points: u32,
    },
}

pub fn run(action: StatsAction) -> CliResult {
    let mut store = ProgressStore::open()?;

    match action {
        StatsAction::Show => {
            let out = serde_json::json!({
                "stats": store.stats(),
                "level": store.level(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        StatsAction::Goal { goal } => {
            store.set_daily_goal(goal)?;
            println!("{}", serde_json::to_string_pretty(store.stats())?);
        }
        StatsAction::ResetToday => {
            store.reset_daily_progress()?;
            println!("{}", serde_json::to_string_pretty(store.stats())?);
        }
        StatsAction::Award { points } => {
            let events = store.add_points(points)?;
            println!("{}", serde_json::to_string_pretty(store.stats())?);
            print_events(&events)?;
        }
    }

    Ok(())
}
