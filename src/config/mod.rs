//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! and an optional TOML file using the `config` and `dotenvy` crates. Configuration
//! is loaded with the `ROLE_FLOW` prefix and nested values use double underscores
//! as separators.
//!
//! # Example
//!
//! ```no_run
//! use research_role_flow::config::AppConfig;
//! use research_role_flow::domain::traversal::TraversalEngine;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let engine = TraversalEngine::standard().with_history_policy(config.flow.history_on_back);
//! ```

mod error;
mod flow;
mod logging;

pub use error::{ConfigError, ValidationError};
pub use flow::FlowConfig;
pub use logging::{LogFormat, LoggingConfig};

use std::path::Path;

use serde::Deserialize;

const ENV_PREFIX: &str = "ROLE_FLOW";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Traversal behavior
    #[serde(default)]
    pub flow: FlowConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ROLE_FLOW` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ROLE_FLOW__FLOW__HISTORY_ON_BACK=truncate` -> `flow.history_on_back = truncate`
    /// - `ROLE_FLOW__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on top
    ///
    /// The file format is inferred from its extension (`.toml`, `.json`, ...).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or values cannot be parsed
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(true))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    fn environment() -> config::Environment {
        config::Environment::default()
            .prefix(ENV_PREFIX)
            .separator("__")
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the log filter directive does not parse.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }
}
