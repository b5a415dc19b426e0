pub mod badge;
pub mod config;
pub mod reflect;
pub mod stats;
pub mod task;
pub mod timer;
pub mod unlock;

use bloomtime_core::{Database, Event, ProgressStore, Task, TaskTimer};

type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Write a task back into the persisted list, replacing by id.
fn upsert_task(db: &Database, task: &Task) -> CliResult {
    let mut tasks = db.load_tasks()?;
    match tasks.iter_mut().find(|t| t.id == task.id) {
        Some(existing) => *existing = task.clone(),
        None => tasks.push(task.clone()),
    }
    db.save_tasks(&tasks)?;
    Ok(())
}

/// Handle a timer that just completed: persist the finished task, retire
/// the active timer, and credit the progress store. The credit fires here
/// and nowhere else, so a completion is never double-counted.
fn settle_completion(db: &Database, timer: &TaskTimer) -> CliResult<Vec<Event>> {
    upsert_task(db, timer.task())?;
    db.clear_active_timer()?;
    let mut store = ProgressStore::open()?;
    Ok(store.complete_task()?)
}

fn print_events(events: &[Event]) -> CliResult {
    for event in events {
        println!("{}", serde_json::to_string_pretty(event)?);
    }
    Ok(())
}
