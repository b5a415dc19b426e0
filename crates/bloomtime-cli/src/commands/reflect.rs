//! End-of-day reflection commands.

use chrono::Local;
use clap::Subcommand;

use bloomtime_core::reflection::upsert;
use bloomtime_core::{Database, Mood, ProgressStore, Reflection};

use super::CliResult;

#[derive(Subcommand)]
pub enum ReflectAction {
    /// Record today's reflection (replaces an earlier one for today)
    Add {
        /// Mood: down, meh, okay, happy or thrilled
        mood: String,
        /// Free-form note
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Print all reflections
    List,
}

fn parse_mood(s: &str) -> CliResult<Mood> {
    match s {
        "down" => Ok(Mood::Down),
        "meh" => Ok(Mood::Meh),
        "okay" => Ok(Mood::Okay),
        "happy" => Ok(Mood::Happy),
        "thrilled" => Ok(Mood::Thrilled),
        _ => Err(format!("unknown mood: {s}").into()),
    }
}

pub fn run(action: ReflectAction) -> CliResult {
    let db = Database::open()?;

    match action {
        ReflectAction::Add { mood, note } => {
            let store = ProgressStore::open()?;
            let reflection = Reflection {
                date: Local::now().date_naive(),
                mood: parse_mood(&mood)?,
                note,
                tasks_completed: store.stats().today_completed,
            };
            let mut reflections = db.load_reflections()?;
            upsert(&mut reflections, reflection.clone());
            db.save_reflections(&reflections)?;
            println!("{}", serde_json::to_string_pretty(&reflection)?);
        }
        ReflectAction::List => {
            let reflections = db.load_reflections()?;
            println!("{}", serde_json::to_string_pretty(&reflections)?);
        }
    }

    Ok(())
}
