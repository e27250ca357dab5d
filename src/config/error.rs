//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Log filter directive cannot be empty")]
    EmptyLogLevel,

    #[error("Configured path for {0} is empty")]
    EmptyPath(&'static str),

    #[error("Years of experience must be at most {max}, got {actual}")]
    YearsOutOfRange { max: u32, actual: u32 },
}
