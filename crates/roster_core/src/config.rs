//! Runtime configuration resolution.
//!
//! # Responsibility
//! - Resolve database and logging settings for orchestration layers.
//!
//! # Invariants
//! - Precedence is explicit override > environment variable > default.
//! - Blank values are treated as unset at every level.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_FILE_NAME: &str = "roster.sqlite3";
pub const ENV_DB_PATH: &str = "ROSTER_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "ROSTER_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "ROSTER_LOG_DIR";

/// Caller-supplied values that win over the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub db_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Location of the SQLite database file.
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging stays disabled when `None`.
    pub log_dir: Option<PathBuf>,
}

impl RosterConfig {
    /// Resolves configuration against the process environment.
    pub fn from_env(overrides: ConfigOverrides) -> Self {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Resolves configuration with an injectable environment lookup.
    pub fn resolve(overrides: ConfigOverrides, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = overrides
            .db_path
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| non_blank(lookup(ENV_DB_PATH)).map(PathBuf::from))
            .unwrap_or_else(|| std::env::temp_dir().join(DB_FILE_NAME));

        let log_level = non_blank(overrides.log_level)
            .or_else(|| non_blank(lookup(ENV_LOG_LEVEL)))
            .unwrap_or_else(|| default_log_level().to_string());

        let log_dir = overrides
            .log_dir
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| non_blank(lookup(ENV_LOG_DIR)).map(PathBuf::from));

        Self {
            db_path,
            log_level,
            log_dir,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{ConfigOverrides, RosterConfig, DB_FILE_NAME, ENV_DB_PATH, ENV_LOG_LEVEL};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = RosterConfig::resolve(ConfigOverrides::default(), lookup_from(&[]));

        assert_eq!(config.db_path, std::env::temp_dir().join(DB_FILE_NAME));
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn environment_is_used_and_blank_values_are_ignored() {
        let config = RosterConfig::resolve(
            ConfigOverrides::default(),
            lookup_from(&[(ENV_DB_PATH, " /data/roster.db "), (ENV_LOG_LEVEL, "   ")]),
        );

        assert_eq!(config.db_path, PathBuf::from("/data/roster.db"));
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn overrides_win_over_environment() {
        let overrides = ConfigOverrides {
            db_path: Some(PathBuf::from("/explicit.db")),
            log_level: Some("warn".to_string()),
            log_dir: None,
        };
        let config = RosterConfig::resolve(
            overrides,
            lookup_from(&[(ENV_DB_PATH, "/env.db"), (ENV_LOG_LEVEL, "trace")]),
        );

        assert_eq!(config.db_path, PathBuf::from("/explicit.db"));
        assert_eq!(config.log_level, "warn");
    }
}
