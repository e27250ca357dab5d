//! Catalog and profile source locations

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the flow catalog comes from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// YAML catalog replacing the built-in one
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_path("catalog", self.path.as_ref())
    }
}

/// Where user profiles come from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProfilesConfig {
    /// YAML profile document; the built-in demo users are used when unset
    pub path: Option<PathBuf>,
}

impl ProfilesConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_path("profiles", self.path.as_ref())
    }
}

fn validate_path(section: &'static str, path: Option<&PathBuf>) -> Result<(), ValidationError> {
    match path {
        Some(p) if p.as_os_str().is_empty() => Err(ValidationError::EmptyPath(section)),
        _ => Ok(()),
    }
}
