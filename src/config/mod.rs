//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RAFIQ` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use rafiq::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Logging with filter {}", config.logging.level);
//! ```

mod dialogue;
mod environment;
mod error;
mod logging;
mod sources;

pub use dialogue::{DialogueConfig, MAX_YEARS_OF_EXPERIENCE};
pub use environment::Environment;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use sources::{CatalogConfig, ProfilesConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Flow catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Profile source
    #[serde(default)]
    pub profiles: ProfilesConfig,

    /// Dialogue engine settings
    #[serde(default)]
    pub dialogue: DialogueConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RAFIQ` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RAFIQ__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    /// - `RAFIQ__PROFILES__PATH=./profiles.yaml` -> `profiles.path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RAFIQ")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.catalog.validate()?;
        self.profiles.validate()?;
        self.dialogue.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
