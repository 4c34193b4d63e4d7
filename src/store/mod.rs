//! Flat JSON persistence for habits and completion logs
//!
//! Two files under the data directory, each loaded and rewritten whole:
//! no partial updates, no transactions, no migrations. Stored text that
//! fails to parse is replaced by a built-in default (sample habits, empty
//! log) and never surfaced as an error.

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::model::{default_habits, CompletionLog, Habit};

const HABITS_FILE: &str = "habits.json";
const LOGS_FILE: &str = "logs.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub struct HabitStore {
    habits_path: PathBuf,
    logs_path: PathBuf,
}

impl HabitStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(data_dir).map_err(|source| StoreError::CreateDir {
            path: data_dir.to_path_buf(),
            source,
        })?;

        Ok(Self {
            habits_path: data_dir.join(HABITS_FILE),
            logs_path: data_dir.join(LOGS_FILE),
        })
    }

    // ============================================
    // HABITS
    // ============================================

    /// Load the habit collection, in stored order.
    ///
    /// A missing or unparsable file yields the built-in sample habits.
    pub fn load_habits(&self) -> Vec<Habit> {
        let Ok(text) = fs::read_to_string(&self.habits_path) else {
            debug!(
                "no habit file at {}, using defaults",
                self.habits_path.display()
            );
            return default_habits(now_millis());
        };

        match serde_json::from_str(&text) {
            Ok(habits) => habits,
            Err(err) => {
                warn!(
                    "unparsable habit data at {} ({}), using defaults",
                    self.habits_path.display(),
                    err
                );
                default_habits(now_millis())
            }
        }
    }

    /// Overwrite the stored habit collection.
    pub fn store_habits(&self, habits: &[Habit]) -> Result<(), StoreError> {
        write_json(&self.habits_path, habits)
    }

    // ============================================
    // COMPLETION LOGS
    // ============================================

    /// Load the completion log.
    ///
    /// A missing or unparsable file yields an empty log.
    pub fn load_logs(&self) -> CompletionLog {
        let Ok(text) = fs::read_to_string(&self.logs_path) else {
            debug!(
                "no log file at {}, starting empty",
                self.logs_path.display()
            );
            return CompletionLog::new();
        };

        match serde_json::from_str(&text) {
            Ok(logs) => logs,
            Err(err) => {
                warn!(
                    "unparsable log data at {} ({}), starting empty",
                    self.logs_path.display(),
                    err
                );
                CompletionLog::new()
            }
        }
    }

    /// Overwrite the stored completion log.
    pub fn store_logs(&self, logs: &CompletionLog) -> Result<(), StoreError> {
        write_json(&self.logs_path, logs)
    }
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let text = serde_json::to_string_pretty(value).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, text).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
