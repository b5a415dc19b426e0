//! SQLite-backed key-value persistence.
//!
//! Two logical JSON records carry the application state: the task list and
//! the user stats. Reflections and the active timer get their own keys.
//! A missing or malformed record falls back to its documented default
//! rather than failing the caller.

use rusqlite::{params, Connection};

use super::data_dir;
use crate::error::{Result, StorageError};
use crate::progress::UserStats;
use crate::reflection::Reflection;
use crate::task::Task;
use crate::timer::TaskTimer;

const TASKS_KEY: &str = "tasks";
const STATS_KEY: &str = "stats";
const REFLECTIONS_KEY: &str = "reflections";
const ACTIVE_TIMER_KEY: &str = "active_timer";

/// SQLite database holding the persisted application records.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/bloomtime/bloomtime.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        Self::open_at(&data_dir()?.join("bloomtime.db"))
    }

    /// Open a database at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &std::path::Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(StorageError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );",
            )
            .map_err(StorageError::from)?;
        Ok(())
    }

    // ── Raw key-value access ─────────────────────────────────────────

    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn kv_delete(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    // ── Typed records ────────────────────────────────────────────────

    fn load_record<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        // Malformed state falls back to the default rather than propagating.
        match self.kv_get(key)? {
            Some(json) => Ok(serde_json::from_str(&json).unwrap_or_default()),
            None => Ok(T::default()),
        }
    }

    fn save_record<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value).map_err(|e| StorageError::EncodeFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.kv_set(key, &json)?;
        Ok(())
    }

    pub fn load_tasks(&self) -> Result<Vec<Task>> {
        self.load_record(TASKS_KEY)
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        self.save_record(TASKS_KEY, &tasks)
    }

    pub fn load_stats(&self) -> Result<UserStats> {
        self.load_record(STATS_KEY)
    }

    pub fn save_stats(&self, stats: &UserStats) -> Result<()> {
        self.save_record(STATS_KEY, stats)
    }

    pub fn load_reflections(&self) -> Result<Vec<Reflection>> {
        self.load_record(REFLECTIONS_KEY)
    }

    pub fn save_reflections(&self, reflections: &[Reflection]) -> Result<()> {
        self.save_record(REFLECTIONS_KEY, &reflections)
    }

    /// The one persisted timer. Saving replaces any previous timer, so only
    /// a single tick source can ever be live.
    pub fn load_active_timer(&self) -> Result<Option<TaskTimer>> {
        match self.kv_get(ACTIVE_TIMER_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json).ok()),
            None => Ok(None),
        }
    }

    pub fn save_active_timer(&self, timer: &TaskTimer) -> Result<()> {
        self.save_record(ACTIVE_TIMER_KEY, timer)
    }

    pub fn clear_active_timer(&self) -> Result<()> {
        self.kv_delete(ACTIVE_TIMER_KEY)?;
        Ok(())
    }
}
