//! Scoring errors.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised by a scorer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// A required feature is absent or semantically invalid.
    #[error("Invalid feature vector: {0}")]
    InvalidFeatureVector(#[from] ValidationError),

    /// Raw scores cannot be normalized (all zero, negative or not finite).
    #[error("Raw scores cannot be normalized")]
    DegenerateScores,
}

impl ScoringError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ScoringError::InvalidFeatureVector(_) => ErrorCode::InvalidFeatureVector,
            ScoringError::DegenerateScores => ErrorCode::DegenerateScores,
        }
    }
}
