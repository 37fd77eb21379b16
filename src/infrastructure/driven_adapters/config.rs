//! Application Configuration
//!
//! Loads configuration from built-in defaults, files and environment variables.

use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Instance metadata endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataConfig {
    pub endpoint: String,
    pub api_version: String,
    pub format: String,
    pub timeout_secs: u64,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub format: LogFormat,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub metadata: MetadataConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::from_sources(
            vec![
                // Shipped defaults file, if present
                File::with_name("config/default").required(false),
                // Environment-specific config, if present
                File::with_name(&format!("config/{run_mode}")).required(false),
            ],
            Self::environment(),
        )
    }

    /// Layer `files` in order over the built-in defaults, then `env` on top
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or a value has the wrong type.
    pub fn from_sources<S>(files: Vec<S>, env: Environment) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let mut builder = Self::defaults()?;
        for file in files {
            builder = builder.add_source(file);
        }

        builder.add_source(env).build()?.try_deserialize()
    }

    /// Environment variables such as `APP__SERVER__PORT`
    #[must_use]
    pub fn environment() -> Environment {
        Environment::with_prefix("APP").separator("__").try_parsing(true)
    }

    /// Builder seeded with values matching the Azure metadata endpoint
    ///
    /// # Errors
    ///
    /// Never fails in practice; `set_default` only errors on invalid keys.
    pub fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 80)?
            .set_default("metadata.endpoint", "http://169.254.169.254/metadata/instance")?
            .set_default("metadata.api_version", "2017-12-01")?
            .set_default("metadata.format", "json")?
            .set_default("metadata.timeout_secs", 2)?
            .set_default("log.format", "pretty")
    }
}
