//! Runtime configuration for todo front ends.
//!
//! # Responsibility
//! - Resolve database location and logging settings from the environment.
//!
//! # Invariants
//! - Blank values behave exactly like unset ones.
//! - Logging stays off unless a log directory is configured.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "TODO_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "TODO_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "TODO_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "todo_screen.sqlite3";

/// Where todo rows live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageLocation,
    pub log_level: String,
    /// `None` disables file logging.
    pub log_dir: Option<String>,
}

impl AppConfig {
    /// Reads `TODO_DB_PATH`, `TODO_LOG_LEVEL` and `TODO_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let storage = non_blank(DB_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));

        Self {
            storage: StorageLocation::File(storage),
            log_level: non_blank(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: non_blank(LOG_DIR_ENV),
        }
    }

    /// Switches storage to a throwaway in-memory database.
    pub fn in_memory(mut self) -> Self {
        self.storage = StorageLocation::Memory;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, StorageLocation, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(
            config.storage,
            StorageLocation::File(std::env::temp_dir().join("todo_screen.sqlite3"))
        );
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[(DB_PATH_ENV, "  "), (LOG_DIR_ENV, "")]);
        assert!(matches!(config.storage, StorageLocation::File(_)));
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn explicit_values_are_trimmed() {
        let config = config_from(&[
            (DB_PATH_ENV, " /data/todos.db "),
            (LOG_LEVEL_ENV, "warn"),
            (LOG_DIR_ENV, "/var/log/todo"),
        ]);
        assert_eq!(
            config.storage,
            StorageLocation::File(PathBuf::from("/data/todos.db"))
        );
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/todo"));
        assert_eq!(config.in_memory().storage, StorageLocation::Memory);
    }
}
