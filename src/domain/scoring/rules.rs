//! Rule-based placeholder model.
//!
//! Maps feature thresholds to raw scores: a flat baseline below each trigger
//! and linear interpolation above it. The constants reproduce the scoring
//! behavior downstream tests and dashboards were calibrated against, so
//! changing them changes recommendations.

use super::action::Action;
use super::errors::ScoringError;
use super::scores::ActionScores;
use crate::domain::profile::FeatureVector;
use crate::ports::NudgeScorer;

/// Days without a refresh before the refresh rule triggers.
pub const REFRESH_TRIGGER_DAYS: u32 = 7;
const REFRESH_BASELINE: f64 = 0.15;
const REFRESH_BASE: f64 = 0.65;
const REFRESH_PER_DAY: f64 = 0.02;

/// Completeness below which the add-skill rule triggers.
pub const COMPLETENESS_TARGET: u8 = 70;
const ADD_SKILL_BASELINE: f64 = 0.10;
const ADD_SKILL_BASE: f64 = 0.50;
const ADD_SKILL_PER_POINT: f64 = 0.01;

const APPLY_SEARCHING_NOT_APPLYING: f64 = 0.70;
const APPLY_LOW_ACTIVITY: f64 = 0.45;
const APPLY_BASELINE: f64 = 0.20;
const APPLY_SEARCH_TRIGGER: u32 = 3;

/// Deterministic scorer standing in for a trained model.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedScorer;

impl RuleBasedScorer {
    pub fn new() -> Self {
        Self
    }

    /// Raw, pre-normalization scores in registration order.
    pub fn raw_scores(&self, features: &FeatureVector) -> Vec<(Action, f64)> {
        Action::ALL
            .into_iter()
            .map(|action| (action, raw_score(action, features)))
            .collect()
    }
}

impl NudgeScorer for RuleBasedScorer {
    fn score(&self, features: &FeatureVector) -> Result<ActionScores, ScoringError> {
        ActionScores::from_raw(self.raw_scores(features))
    }
}

fn raw_score(action: Action, f: &FeatureVector) -> f64 {
    match action {
        Action::RefreshCv => {
            if f.days_since_last_refresh <= REFRESH_TRIGGER_DAYS {
                REFRESH_BASELINE
            } else {
                let overdue = f.days_since_last_refresh - REFRESH_TRIGGER_DAYS;
                REFRESH_BASE + REFRESH_PER_DAY * f64::from(overdue)
            }
        }
        Action::AddSkill => {
            let completeness = f.profile_completeness.value();
            if completeness >= COMPLETENESS_TARGET {
                ADD_SKILL_BASELINE
            } else {
                let gap = COMPLETENESS_TARGET - completeness;
                ADD_SKILL_BASE + ADD_SKILL_PER_POINT * f64::from(gap)
            }
        }
        Action::ApplyJob => {
            if f.job_searches > APPLY_SEARCH_TRIGGER && f.applications_count == 0 {
                APPLY_SEARCHING_NOT_APPLYING
            } else if f.job_searches > 0 && f.applications_count < 2 {
                APPLY_LOW_ACTIVITY
            } else {
                APPLY_BASELINE
            }
        }
    }
}
