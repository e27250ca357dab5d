//! Profile documents: a YAML mapping of user id to raw profile.
//!
//! ```yaml
//! fatima_hassan:
//!   name: Fatima Hassan
//!   days_since_last_refresh: 14
//!   # ...remaining feature fields
//! ```
//!
//! Entries keep document order. Parsing only checks the document shape;
//! feature validation happens per user so one bad entry does not hide the
//! others.

use serde_yaml::{Mapping, Value};

use crate::domain::foundation::UserId;
use crate::domain::profile::{ProfileError, RawProfile, UserProfile};

/// A parsed, not yet validated, profile document.
#[derive(Debug, Clone, Default)]
pub(crate) struct ProfileDocument {
    entries: Vec<(UserId, Value)>,
}

impl ProfileDocument {
    pub(crate) fn parse(source: &str) -> Result<Self, ProfileError> {
        let mapping: Mapping = serde_yaml::from_str(source)
            .map_err(|e| ProfileError::source(format!("Malformed profile document: {}", e)))?;

        let mut entries = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let key = key
                .as_str()
                .ok_or_else(|| ProfileError::source("Profile keys must be user id strings"))?;
            let id = UserId::new(key)
                .map_err(|e| ProfileError::source(format!("Invalid user id: {}", e)))?;
            entries.push((id, value));
        }
        Ok(Self { entries })
    }

    /// Validates a single user's entry.
    pub(crate) fn profile(&self, id: &UserId) -> Result<UserProfile, ProfileError> {
        let (_, value) = self
            .entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .ok_or_else(|| ProfileError::UnknownUser(id.clone()))?;
        validate(id, value)
    }

    /// Validates every entry, failing on the first invalid one.
    pub(crate) fn profiles(&self) -> Result<Vec<UserProfile>, ProfileError> {
        self.entries
            .iter()
            .map(|(id, value)| validate(id, value))
            .collect()
    }
}

fn validate(id: &UserId, value: &Value) -> Result<UserProfile, ProfileError> {
    let raw: RawProfile = serde_yaml::from_value(value.clone())
        .map_err(|e| ProfileError::invalid_feature_vector(id, "profile", e.to_string()))?;
    UserProfile::from_raw(id.clone(), raw)
}
