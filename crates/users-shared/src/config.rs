//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_API_PREFIX, DEFAULT_DB_PATH, DEFAULT_PORT};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Path the users routes are nested under. Empty mounts them at the root.
    pub api_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    /// SQLite file path, or `:memory:` for a throwaway store.
    pub path: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl AppConfig {
    /// Loads defaults, then `config/default`, `config/{APP_ENV}`, `APP__*`
    /// variables and finally the `PORT` / `DB_PATH` shortcuts.
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("APP").separator("__").try_parsing(true))
            .set_override_option("app.port", std::env::var("PORT").ok())?
            .set_override_option("database.path", std::env::var("DB_PATH").ok())?
            .build()?;
        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Built-in defaults only; no files or environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    /// Rejects settings the server cannot start with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.database.path.trim().is_empty() {
            return Err(AppError::InvalidConfig("database.path must not be empty".into()));
        }
        if self.database.max_connections == 0 {
            return Err(AppError::InvalidConfig("database.max_connections must be at least 1".into()));
        }
        Ok(())
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", i64::from(DEFAULT_PORT))?
            .set_default("app.name", "users-server")?
            .set_default("app.api_prefix", DEFAULT_API_PREFIX)?
            .set_default("database.path", DEFAULT_DB_PATH)?
            .set_default("database.max_connections", 5)?
            .set_default("database.acquire_timeout_secs", 3)
    }
}
