//! Scoring module - turns a feature vector into ranked action scores.
//!
//! # Design Philosophy
//!
//! Scoring is a pure function: no state, no side effects. The rule-based
//! scorer is a placeholder behind the `NudgeScorer` port so a trained model
//! can replace it without the dialogue engine noticing.

mod action;
mod errors;
mod rules;
mod scores;

pub use action::Action;
pub use errors::ScoringError;
pub use rules::{RuleBasedScorer, COMPLETENESS_TARGET, REFRESH_TRIGGER_DAYS};
pub use scores::{ActionScore, ActionScores};
