//! Error vocabulary shared by the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Error codes organized by category.
///
/// Every module error maps onto one of these so a presentation layer can
/// branch on the failure kind without matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidFeatureVector,

    // Not found errors
    UnknownUser,
    UnknownFlow,
    UnknownStep,
    NoFlowForAction,

    // State errors
    MissingScores,
    DegenerateScores,

    // Authoring errors
    CatalogInvalid,
    TemplateSubstitution,

    // Infrastructure errors
    ProfileSourceUnavailable,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidFeatureVector => "INVALID_FEATURE_VECTOR",
            ErrorCode::UnknownUser => "UNKNOWN_USER",
            ErrorCode::UnknownFlow => "UNKNOWN_FLOW",
            ErrorCode::UnknownStep => "UNKNOWN_STEP",
            ErrorCode::NoFlowForAction => "NO_FLOW_FOR_ACTION",
            ErrorCode::MissingScores => "MISSING_SCORES",
            ErrorCode::DegenerateScores => "DEGENERATE_SCORES",
            ErrorCode::CatalogInvalid => "CATALOG_INVALID",
            ErrorCode::TemplateSubstitution => "TEMPLATE_SUBSTITUTION",
            ErrorCode::ProfileSourceUnavailable => "PROFILE_SOURCE_UNAVAILABLE",
        };
        write!(f, "{}", s)
    }
}
