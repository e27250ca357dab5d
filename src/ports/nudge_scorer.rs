//! Nudge Scorer Port - Interface for recommendation models.
//!
//! The dialogue engine only consumes `ActionScores`; whatever produces them
//! sits behind this trait. Today that is the deterministic
//! `RuleBasedScorer`; a trained model would be another implementation.
//!
//! # Contract
//!
//! - Pure: the same features always yield the same scores
//! - Normalized scores sum to 1.0
//! - Exactly one top action, ties resolved by registration order

use crate::domain::profile::{FeatureVector, RawFeatureVector};
use crate::domain::scoring::{ActionScores, ScoringError};

/// Port for scoring candidate actions.
pub trait NudgeScorer: Send + Sync {
    /// Score every registered action for a validated feature vector.
    fn score(&self, features: &FeatureVector) -> Result<ActionScores, ScoringError>;

    /// Validate an unvalidated feature document, then score it.
    ///
    /// # Errors
    ///
    /// - `InvalidFeatureVector` if a field is absent or malformed
    fn score_raw(&self, raw: &RawFeatureVector) -> Result<ActionScores, ScoringError> {
        let features = raw.validate()?;
        self.score(&features)
    }
}
