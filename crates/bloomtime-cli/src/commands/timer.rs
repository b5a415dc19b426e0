//! Active timer inspection.

use chrono::Utc;
use clap::Subcommand;

use bloomtime_core::Database;

use super::{print_events, settle_completion, CliResult};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Flush wall-clock time into the active task and print its state
    Status,
}

pub fn run(action: TimerAction) -> CliResult {
    let db = Database::open()?;

    match action {
        TimerAction::Status => {
            let Some(mut timer) = db.load_active_timer()? else {
                println!("{}", serde_json::json!({ "type": "NoActiveTimer" }));
                return Ok(());
            };

            let completion = timer.sync(Utc::now());
            println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);

            match completion {
                Some(event) => {
                    let credits = settle_completion(&db, &timer)?;
                    print_events(&std::iter::once(event).chain(credits).collect::<Vec<_>>())?;
                }
                None => {
                    db.save_active_timer(&timer)?;
                }
            }
        }
    }

    Ok(())
}
