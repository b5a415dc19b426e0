//! Task management commands.

use chrono::{NaiveDate, Utc};
use clap::Subcommand;

use bloomtime_core::task::{indicators_for, summarize, tasks_on};
use bloomtime_core::{
    Config, Database, Priority, SortOrder, Task, TaskCategory, TaskQuery, TaskStatus, TaskTimer,
    VisualStyle,
};

use super::{print_events, settle_completion, upsert_task, CliResult};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Countdown budget in minutes (default from config)
        #[arg(long)]
        duration: Option<u32>,
        /// Category: study, exercise, reading or other
        #[arg(long)]
        category: Option<String>,
        /// Timer visual: flower or sun
        #[arg(long)]
        visual: Option<String>,
        /// Priority: low, medium or high
        #[arg(long)]
        priority: Option<String>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// List tasks
    List {
        /// Filter by status: pending, in_progress or completed
        #[arg(long)]
        status: Option<String>,
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
        /// Sort order: newest, oldest or priority (default: newest)
        #[arg(long, default_value = "newest")]
        sort: String,
    },
    /// Get task details
    Get {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
    /// Start a pending task's countdown (supersedes any active timer)
    Start {
        /// Task ID
        id: String,
    },
    /// Pause the active countdown
    Pause,
    /// Resume the active countdown
    Resume,
    /// Complete the active task immediately
    Complete,
    /// Per-status counts over the task list
    Summary,
    /// Tasks created on a date (YYYY-MM-DD, default today), with counts
    Calendar {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn parse_category(s: &str) -> CliResult<TaskCategory> {
    match s {
        "study" => Ok(TaskCategory::Study),
        "exercise" => Ok(TaskCategory::Exercise),
        "reading" => Ok(TaskCategory::Reading),
        "other" => Ok(TaskCategory::Other),
        _ => Err(format!("unknown category: {s}").into()),
    }
}

fn parse_status(s: &str) -> CliResult<TaskStatus> {
    match s {
        "pending" => Ok(TaskStatus::Pending),
        "in_progress" => Ok(TaskStatus::InProgress),
        "completed" => Ok(TaskStatus::Completed),
        _ => Err(format!("unknown status: {s}").into()),
    }
}

pub fn run(action: TaskAction) -> CliResult {
    let db = Database::open()?;

    match action {
        TaskAction::Add {
            title,
            duration,
            category,
            visual,
            priority,
            notes,
        } => {
            let defaults = Config::load_or_default().tasks;
            let mut task = Task::new(title, duration.unwrap_or(defaults.duration_min))?;
            task.category = match category {
                Some(ref s) => parse_category(s)?,
                None => defaults.category,
            };
            task.visual = match visual.as_deref() {
                Some("flower") => VisualStyle::Flower,
                Some("sun") => VisualStyle::Sun,
                Some(other) => return Err(format!("unknown visual: {other}").into()),
                None => defaults.visual,
            };
            task.priority = match priority.as_deref() {
                Some("low") => Priority::Low,
                Some("medium") => Priority::Medium,
                Some("high") => Priority::High,
                Some(other) => return Err(format!("unknown priority: {other}").into()),
                None => defaults.priority,
            };
            task.notes = notes;
            upsert_task(&db, &task)?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List {
            status,
            category,
            sort,
        } => {
            let query = TaskQuery {
                status: status.as_deref().map(parse_status).transpose()?,
                category: category.as_deref().map(parse_category).transpose()?,
                sort: match sort.as_str() {
                    "newest" => SortOrder::Newest,
                    "oldest" => SortOrder::Oldest,
                    "priority" => SortOrder::Priority,
                    other => return Err(format!("unknown sort order: {other}").into()),
                },
            };
            let tasks = query.apply(&db.load_tasks()?);
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        TaskAction::Get { id } => match db.load_tasks()?.into_iter().find(|t| t.id == id) {
            Some(task) => println!("{}", serde_json::to_string_pretty(&task)?),
            None => println!("Task not found: {id}"),
        },
        TaskAction::Delete { id } => {
            let mut tasks = db.load_tasks()?;
            let before = tasks.len();
            tasks.retain(|t| t.id != id);
            if tasks.len() == before {
                println!("Task not found: {id}");
            } else {
                db.save_tasks(&tasks)?;
                // A deleted task must not keep ticking.
                if let Some(active) = db.load_active_timer()? {
                    if active.task().id == id {
                        db.clear_active_timer()?;
                    }
                }
                println!("Task deleted: {id}");
            }
        }
        TaskAction::Start { id } => {
            let tasks = db.load_tasks()?;
            let task = tasks
                .iter()
                .find(|t| t.id == id)
                .ok_or_else(|| format!("Task not found: {id}"))?;

            // Park any previously active timer before replacing it, so its
            // progress lands back in the task list and its tick source dies.
            // If the catch-up finishes it, that completion is credited here.
            if let Some(mut previous) = db.load_active_timer()? {
                if previous.task().id == id {
                    // Already the active task: make sure it's ticking.
                    match previous.resume() {
                        Some(event) => {
                            db.save_active_timer(&previous)?;
                            println!("{}", serde_json::to_string_pretty(&event)?);
                        }
                        None => {
                            println!("{}", serde_json::to_string_pretty(&previous.snapshot())?)
                        }
                    }
                    return Ok(());
                }
                match previous.sync(Utc::now()) {
                    Some(completion) => {
                        let credits = settle_completion(&db, &previous)?;
                        print_events(
                            &std::iter::once(completion).chain(credits).collect::<Vec<_>>(),
                        )?;
                    }
                    None => {
                        previous.pause();
                        upsert_task(&db, previous.task())?;
                    }
                }
            }

            // A parked in-progress task resumes where it left off; only a
            // completed task can no longer be started.
            let mut timer = TaskTimer::new(task.clone());
            let event = match task.status {
                TaskStatus::Pending => timer.start(),
                TaskStatus::InProgress => timer.resume(),
                TaskStatus::Completed => None,
            }
            .ok_or_else(|| format!("Task is already completed: {id}"))?;
            upsert_task(&db, timer.task())?;
            db.save_active_timer(&timer)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TaskAction::Pause => {
            let mut timer = require_active(&db)?;
            if let Some(completion) = timer.sync(Utc::now()) {
                let credits = settle_completion(&db, &timer)?;
                print_events(&std::iter::once(completion).chain(credits).collect::<Vec<_>>())?;
                return Ok(());
            }
            match timer.pause() {
                Some(event) => {
                    upsert_task(&db, timer.task())?;
                    db.save_active_timer(&timer)?;
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
                None => println!("{}", serde_json::to_string_pretty(&timer.snapshot())?),
            }
        }
        TaskAction::Resume => {
            let mut timer = require_active(&db)?;
            match timer.resume() {
                Some(event) => {
                    db.save_active_timer(&timer)?;
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
                None => println!("{}", serde_json::to_string_pretty(&timer.snapshot())?),
            }
        }
        TaskAction::Complete => {
            let mut timer = require_active(&db)?;
            let completion = timer.sync(Utc::now()).or_else(|| timer.complete());
            match completion {
                Some(event) => {
                    let credits = settle_completion(&db, &timer)?;
                    print_events(&std::iter::once(event).chain(credits).collect::<Vec<_>>())?;
                }
                None => println!("{}", serde_json::to_string_pretty(&timer.snapshot())?),
            }
        }
        TaskAction::Summary => {
            let summary = summarize(&db.load_tasks()?);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        TaskAction::Calendar { date } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let tasks = db.load_tasks()?;
            let out = serde_json::json!({
                "indicators": indicators_for(&tasks, date),
                "tasks": tasks_on(&tasks, date),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}

fn require_active(db: &Database) -> CliResult<TaskTimer> {
    db.load_active_timer()?
        .ok_or_else(|| "No active timer".into())
}
