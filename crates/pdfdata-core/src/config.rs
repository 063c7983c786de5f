//! Configuration module
//!
//! Configuration is read from the process environment (after loading an optional
//! `.env` file). Parsing goes through [`Config::from_lookup`] so it can be exercised
//! without touching global state.

use std::env;
use std::str::FromStr;

const SERVER_PORT: u16 = 4000;
const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const MAX_FORM_BYTES: usize = 64 * 1024;

/// Which record store backs the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow::anyhow!(
                "Unknown STORE_BACKEND '{}', expected 'postgres' or 'memory'",
                other
            )),
        }
    }
}

/// Server-level settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub environment: String,
    /// `pretty` or `json`
    pub log_format: String,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub base: BaseConfig,
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub max_form_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";

        let cors_origins_str = lookup("CORS_ORIGINS").unwrap_or_else(|| "*".to_string());
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }
        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let store_backend = match lookup("STORE_BACKEND") {
            Some(value) => value.parse()?,
            None => StoreBackend::Postgres,
        };

        let database_url = lookup("DATABASE_URL").filter(|s| !s.trim().is_empty());
        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be set when STORE_BACKEND is postgres"
            ));
        }

        let base = BaseConfig {
            server_port: lookup("PORT")
                .unwrap_or_else(|| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: lookup("DB_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            environment,
            log_format: lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
        };

        Ok(Config {
            base,
            store_backend,
            database_url,
            max_form_bytes: lookup("MAX_FORM_BYTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(MAX_FORM_BYTES),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.base.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.base.cors_origins
    }

    pub fn db_max_connections(&self) -> u32 {
        self.base.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.base.db_timeout_seconds
    }

    pub fn environment(&self) -> &str {
        &self.base.environment
    }

    pub fn log_format(&self) -> &str {
        &self.base.log_format
    }

    pub fn store_backend(&self) -> StoreBackend {
        self.store_backend
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn max_form_bytes(&self) -> usize {
        self.max_form_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, anyhow::Error> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_with_database_url() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/pdfs")]).unwrap();
        assert_eq!(config.server_port(), 4000);
        assert_eq!(config.store_backend(), StoreBackend::Postgres);
        assert_eq!(config.database_url(), Some("postgres://localhost/pdfs"));
        assert_eq!(config.db_max_connections(), 20);
        assert_eq!(config.db_timeout_seconds(), 30);
        assert_eq!(config.max_form_bytes(), 64 * 1024);
        assert_eq!(config.cors_origins(), ["*".to_string()]);
        assert_eq!(config.log_format(), "pretty");
        assert!(!config.is_production());
    }

    #[test]
    fn test_postgres_requires_database_url() {
        let err = config_from(&[]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_memory_backend_without_database_url() {
        let config = config_from(&[("STORE_BACKEND", "memory"), ("PORT", "8080")]).unwrap();
        assert_eq!(config.store_backend(), StoreBackend::Memory);
        assert_eq!(config.database_url(), None);
        assert_eq!(config.server_port(), 8080);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(config_from(&[("STORE_BACKEND", "sqlite")]).is_err());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("STORE_BACKEND", "memory"), ("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_production_refuses_wildcard_cors() {
        assert!(config_from(&[("STORE_BACKEND", "memory"), ("ENVIRONMENT", "production")]).is_err());

        let config = config_from(&[
            ("STORE_BACKEND", "memory"),
            ("APP_ENV", "prod"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
        ])
        .unwrap();
        assert!(config.is_production());
        assert_eq!(
            config.cors_origins(),
            ["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }
}
