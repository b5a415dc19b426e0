//! Cosmetic unlock commands.

use clap::Subcommand;

use bloomtime_core::{Backdrop, FlowerStyle, ProgressStore};

use super::CliResult;

#[derive(Subcommand)]
pub enum UnlockAction {
    /// Print both cosmetic catalogs with unlocked flags
    List,
}

pub fn run(action: UnlockAction) -> CliResult {
    match action {
        UnlockAction::List => {
            let store = ProgressStore::open()?;
            let points = store.stats().total_points;

            let flowers: Vec<serde_json::Value> = FlowerStyle::ALL
                .into_iter()
                .map(|f| {
                    serde_json::json!({
                        "id": f,
                        "title": f.title(),
                        "icon": f.icon(),
                        "required_points": f.required_points(),
                        "unlocked": points >= f.required_points(),
                    })
                })
                .collect();
            let backdrops: Vec<serde_json::Value> = Backdrop::ALL
                .into_iter()
                .map(|b| {
                    serde_json::json!({
                        "id": b,
                        "title": b.title(),
                        "icon": b.icon(),
                        "required_points": b.required_points(),
                        "unlocked": points >= b.required_points(),
                    })
                })
                .collect();

            let out = serde_json::json!({
                "total_points": points,
                "flowers": flowers,
                "backdrops": backdrops,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}
