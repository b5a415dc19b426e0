//! Badge catalog commands.

use clap::Subcommand;

use bloomtime_core::{BadgeId, ProgressStore};

use super::CliResult;

#[derive(Subcommand)]
pub enum BadgeAction {
    /// Print the badge catalog with earned flags
    List,
}

pub fn run(action: BadgeAction) -> CliResult {
    match action {
        BadgeAction::List => {
            let store = ProgressStore::open()?;
            let earned = &store.stats().earned_badges;
            let catalog: Vec<serde_json::Value> = BadgeId::ALL
                .into_iter()
                .map(|badge| {
                    serde_json::json!({
                        "id": badge,
                        "title": badge.title(),
                        "icon": badge.icon(),
                        "description": badge.description(),
                        "requirement": badge.requirement(),
                        "earned": earned.contains(&badge),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
    }

    Ok(())
}
