//! User profile: identity, display name and feature vector.

use serde::{Deserialize, Serialize};

use super::errors::ProfileError;
use super::features::{FeatureVector, Industry, RawFeatureVector};
use crate::domain::foundation::UserId;

/// A user as seen by the nudge engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    id: UserId,
    name: String,
    features: FeatureVector,
}

impl UserProfile {
    /// Creates a profile from already-validated parts.
    pub fn new(id: UserId, name: impl Into<String>, features: FeatureVector) -> Self {
        Self {
            id,
            name: name.into(),
            features,
        }
    }

    /// Validates a raw profile document.
    ///
    /// # Errors
    ///
    /// - `InvalidFeatureVector` if the name or any feature is missing or malformed
    pub fn from_raw(id: UserId, raw: RawProfile) -> Result<Self, ProfileError> {
        let name = raw
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| ProfileError::invalid_feature_vector(&id, "name", "missing display name"))?;

        let features = raw
            .features
            .validate()
            .map_err(|e| ProfileError::from_validation(&id, e))?;

        Ok(Self::new(id, name, features))
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn features(&self) -> &FeatureVector {
        &self.features
    }

    pub fn industry(&self) -> &Industry {
        &self.features.industry
    }

    /// Variables every message template may reference: `name` plus each
    /// feature field.
    pub fn variables(&self) -> Vec<(&'static str, String)> {
        let mut vars = vec![("name", self.name.clone())];
        vars.extend(self.features.variables());
        vars
    }
}

/// Unvalidated profile document from an external source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub features: RawFeatureVector,
}

/// Listing entry for profile pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub id: UserId,
    pub name: String,
    pub industry: Industry,
}

impl From<&UserProfile> for ProfileSummary {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            industry: profile.features.industry.clone(),
        }
    }
}
