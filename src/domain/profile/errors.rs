//! Profile loading errors.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, UserId, ValidationError};

/// Errors raised while obtaining a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// A required feature is absent or semantically invalid.
    #[error("Invalid feature vector for '{user}': field '{field}' {reason}")]
    InvalidFeatureVector {
        user: String,
        field: String,
        reason: String,
    },

    /// The source has no profile for this user.
    #[error("Unknown user: {0}")]
    UnknownUser(UserId),

    /// The source itself failed (I/O, parse).
    #[error("Profile source unavailable: {0}")]
    Source(String),
}

impl ProfileError {
    pub fn invalid_feature_vector(
        user: &UserId,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ProfileError::InvalidFeatureVector {
            user: user.to_string(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Wraps a field validation failure with the user it belongs to.
    pub fn from_validation(user: &UserId, err: ValidationError) -> Self {
        let field = err.field().to_string();
        let reason = match &err {
            ValidationError::EmptyField { .. } => "is missing".to_string(),
            ValidationError::OutOfRange { min, max, actual, .. } => {
                format!("must be between {} and {}, got {}", min, max, actual)
            }
            ValidationError::InvalidFormat { reason, .. } => reason.clone(),
        };
        ProfileError::InvalidFeatureVector {
            user: user.to_string(),
            field,
            reason,
        }
    }

    pub fn source(message: impl Into<String>) -> Self {
        ProfileError::Source(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ProfileError::InvalidFeatureVector { .. } => ErrorCode::InvalidFeatureVector,
            ProfileError::UnknownUser(_) => ErrorCode::UnknownUser,
            ProfileError::Source(_) => ErrorCode::ProfileSourceUnavailable,
        }
    }
}
