//! Configuration management
//!
//! Settings are read from environment variables (and a `.env` file when one
//! is present) and validated once before use.

use std::env;
use std::str::FromStr;

use crate::constants::{DEFAULT_LOG_FILTER, DEFAULT_LOG_FORMAT, env_vars};

/// Main configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Tracing filter directives, `RUST_LOG` syntax
    pub filter: String,
    pub format: LogFormat,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue(env_vars::LOG_FORMAT.to_string())),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            log: LogConfig::from_env()?,
        })
    }
}

impl LogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var(env_vars::RUST_LOG).ok(),
            env::var(env_vars::LOG_FORMAT).ok(),
        )
    }

    fn from_values(filter: Option<String>, format: Option<String>) -> Result<Self, ConfigError> {
        let filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let format = format
            .unwrap_or_else(|| DEFAULT_LOG_FORMAT.to_string())
            .parse::<LogFormat>()?;

        Ok(Self { filter, format })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
