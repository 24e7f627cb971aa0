// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    allowed_origins: Vec<String>,
    search_result_limit: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const MAX_SEARCH_RESULT_LIMIT: u32 = 500;

fn default_database_url() -> String {
    "sqlite://knowledge_base.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_database_max_connections() -> u32 {
    16
}

fn default_search_result_limit() -> u32 {
    50
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

fn parse_u32(key: &'static str, raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::Invalid(format!("{key} must be a positive integer")))
}

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env` file
    /// first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => parse_u32("DATABASE_MAX_CONNECTIONS", &raw)?,
            None => default_database_max_connections(),
        };
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS must be at least 1".into(),
            ));
        }

        let search_result_limit = match lookup("SEARCH_RESULT_LIMIT") {
            Some(raw) => parse_u32("SEARCH_RESULT_LIMIT", &raw)?,
            None => default_search_result_limit(),
        };
        if !(1..=MAX_SEARCH_RESULT_LIMIT).contains(&search_result_limit) {
            return Err(ConfigError::Invalid(format!(
                "SEARCH_RESULT_LIMIT must be between 1 and {MAX_SEARCH_RESULT_LIMIT}"
            )));
        }

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            allowed_origins,
            search_result_limit,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Allowed CORS origins; a single `*` allows any origin.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn search_result_limit(&self) -> u32 {
        self.search_result_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| values.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url(), "sqlite://knowledge_base.db?mode=rwc");
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.search_result_limit(), 50);
        assert_eq!(config.database_max_connections(), 16);
        assert_eq!(config.allowed_origins(), ["http://localhost:3000".to_string()]);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SEARCH_RESULT_LIMIT", "5"),
            ("ALLOWED_ORIGINS", "https://a.example, https://b.example"),
        ])
        .unwrap();
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.search_result_limit(), 5);
        assert_eq!(config.allowed_origins().len(), 2);
        assert_eq!(config.allowed_origins()[1], "https://b.example");
    }

    #[test]
    fn rejects_out_of_range_search_limit() {
        assert!(matches!(
            config_from(&[("SEARCH_RESULT_LIMIT", "0")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config_from(&[("SEARCH_RESULT_LIMIT", "many")]),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_blank_database_url() {
        assert!(matches!(
            config_from(&[("DATABASE_URL", "  ")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));
    }
}
