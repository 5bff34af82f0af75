use std::time::Duration;

use crate::database::DEFAULT_CHECKOUT_TIMEOUT;

pub const DATABASE_ENV_VAR: &str = "TOURNAMENT_DATABASE";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
    pub connection_timeout: Duration,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "tournament.db".to_string(),
            pool_size: 4,
            connection_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }
}

impl DatabaseSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            path: std::env::var(DATABASE_ENV_VAR).unwrap_or(defaults.path),
            ..defaults
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::from_env(),
        }
    }

    /// An explicit path (e.g. from the command line) wins over the environment.
    pub fn with_database_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.database.path = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DatabaseSettings::default();
        assert_eq!(settings.path, "tournament.db");
        assert_eq!(settings.pool_size, 4);
        assert_eq!(settings.connection_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_default_config_reads_environment_like_new() {
        let from_default = AppConfig::default();
        let from_new = AppConfig::new();
        assert_eq!(from_default.database.path, from_new.database.path);
    }

    #[test]
    fn test_explicit_path_overrides() {
        let base = AppConfig {
            database: DatabaseSettings::default(),
        };

        let config = base.clone().with_database_path(Some(":memory:".to_string()));
        assert_eq!(config.database.path, ":memory:");

        let config = base.with_database_path(None);
        assert_eq!(config.database.path, "tournament.db");
    }
}
