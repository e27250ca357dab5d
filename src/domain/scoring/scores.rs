//! Normalized action scores.

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::errors::ScoringError;
use crate::domain::foundation::Percentage;

/// Score of one action within a single scoring run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionScore {
    pub action: Action,
    /// Pre-normalization score produced by the rule or model.
    pub raw: f64,
    /// Normalized probability-like score in `[0, 1]`.
    pub score: f64,
}

/// Result of one scoring run.
///
/// # Invariants
///
/// - `scores` holds one entry per action, in registration order
/// - normalized scores sum to 1.0 (within floating point error)
/// - `top` is the first action holding the maximum normalized score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionScores {
    scores: Vec<ActionScore>,
    top: Action,
}

impl ActionScores {
    /// Normalizes raw scores so they sum to one and picks the top action.
    ///
    /// # Errors
    ///
    /// - `DegenerateScores` if the list is empty, any raw score is negative
    ///   or non-finite, or all raw scores are zero
    pub fn from_raw(raw: Vec<(Action, f64)>) -> Result<Self, ScoringError> {
        if raw.is_empty() || raw.iter().any(|(_, r)| !r.is_finite() || *r < 0.0) {
            return Err(ScoringError::DegenerateScores);
        }

        let total: f64 = raw.iter().map(|(_, r)| r).sum();
        if total <= 0.0 {
            return Err(ScoringError::DegenerateScores);
        }

        let scores: Vec<ActionScore> = raw
            .into_iter()
            .map(|(action, r)| ActionScore {
                action,
                raw: r,
                score: r / total,
            })
            .collect();

        let mut best = scores[0];
        for candidate in &scores[1..] {
            if candidate.score > best.score {
                best = *candidate;
            }
        }

        Ok(Self {
            top: best.action,
            scores,
        })
    }

    /// The recommended action.
    pub fn top(&self) -> Action {
        self.top
    }

    /// Normalized score of the top action.
    pub fn confidence(&self) -> f64 {
        self.get(self.top).unwrap_or_default()
    }

    /// Expected outcome metric label of the top action.
    pub fn expected_outcome(&self) -> &'static str {
        self.top.expected_outcome()
    }

    /// Normalized score for an action, if it was scored.
    pub fn get(&self, action: Action) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.action == action)
            .map(|s| s.score)
    }

    /// An action's normalized score as a rounded whole percentage.
    pub fn percent(&self, action: Action) -> Option<Percentage> {
        self.get(action).map(Percentage::from_fraction)
    }

    /// Scores in registration order.
    pub fn all(&self) -> &[ActionScore] {
        &self.scores
    }

    /// Scores sorted by descending normalized score; ties keep registration
    /// order.
    pub fn ranked(&self) -> Vec<ActionScore> {
        let mut ranked = self.scores.clone();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}
