//! Application Configuration
//!
//! Everything comes from the environment (a `.env` file is honoured), with
//! defaults rooted in the app data directory.

use std::path::Path;

use crate::service::DeletePolicy;

pub const DATABASE_URL_VAR: &str = "KANBAN_DATABASE_URL";
pub const LOG_LEVEL_VAR: &str = "KANBAN_LOG_LEVEL";
pub const DELETE_POLICY_VAR: &str = "KANBAN_DELETE_POLICY";

const DEFAULT_DB_FILE: &str = "kanban.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Store connection string: `sqlite://<path>`, a bare path, or `:memory:`
    pub database_url: String,
    pub log_level: tracing::Level,
    pub delete_policy: DeletePolicy,
}

impl AppConfig {
    /// Load from the process environment, reading `.env` first if present
    pub fn from_env(data_dir: &Path) -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(data_dir, |key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(data_dir: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_url = lookup(DATABASE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| format!("sqlite://{}", data_dir.join(DEFAULT_DB_FILE).display()));

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                eprintln!("Ignoring invalid {}={:?}, using info", LOG_LEVEL_VAR, raw);
                tracing::Level::INFO
            }),
            None => tracing::Level::INFO,
        };

        let delete_policy = match lookup(DELETE_POLICY_VAR) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                eprintln!("Ignoring {}={:?} ({}), using orphan", DELETE_POLICY_VAR, raw, e);
                DeletePolicy::default()
            }),
            None => DeletePolicy::default(),
        };

        Self { database_url, log_level, delete_policy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let dir = PathBuf::from("/data/kanban");
        let config = AppConfig::from_lookup(&dir, lookup_from(&[]));
        assert_eq!(config.database_url, "sqlite:///data/kanban/kanban.db");
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert_eq!(config.delete_policy, DeletePolicy::Orphan);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(
            Path::new("/unused"),
            lookup_from(&[
                (DATABASE_URL_VAR, ":memory:"),
                (LOG_LEVEL_VAR, "debug"),
                (DELETE_POLICY_VAR, "cascade"),
            ]),
        );
        assert_eq!(config.database_url, ":memory:");
        assert_eq!(config.log_level, tracing::Level::DEBUG);
        assert_eq!(config.delete_policy, DeletePolicy::Cascade);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(
            Path::new("/d"),
            lookup_from(&[(DATABASE_URL_VAR, "  "), (LOG_LEVEL_VAR, "loud"), (DELETE_POLICY_VAR, "purge")]),
        );
        assert_eq!(config.database_url, "sqlite:///d/kanban.db");
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert_eq!(config.delete_policy, DeletePolicy::Orphan);
    }
}
