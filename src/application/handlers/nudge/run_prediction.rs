//! RunPredictionHandler - Scores the session's profile.

use std::sync::Arc;
use tracing::info;

use crate::domain::scoring::{ActionScores, ScoringError};
use crate::domain::session::Session;
use crate::ports::NudgeScorer;

/// Result of a prediction run.
#[derive(Debug, Clone)]
pub struct RunPredictionResult {
    pub scores: ActionScores,
}

/// Handler for scoring a session's profile.
pub struct RunPredictionHandler {
    scorer: Arc<dyn NudgeScorer>,
}

impl RunPredictionHandler {
    pub fn new(scorer: Arc<dyn NudgeScorer>) -> Self {
        Self { scorer }
    }

    /// Scores the profile and records the result on the session.
    pub fn handle(&self, session: &mut Session) -> Result<RunPredictionResult, ScoringError> {
        let scores = self.scorer.score(session.profile().features())?;

        info!(
            session_id = %session.id(),
            top = %scores.top(),
            confidence = scores.confidence(),
            expected_outcome = scores.expected_outcome(),
            "Scored profile"
        );

        session.record_scores(scores.clone());
        Ok(RunPredictionResult { scores })
    }
}
