//! Dialogue engine errors.

use thiserror::Error;

use crate::domain::flow::{CatalogError, FlowId, StepId};
use crate::domain::foundation::ErrorCode;

/// Errors surfaced by the dialogue engine.
///
/// A response with no matching rule is not an error; see
/// `ResponseOutcome::Ignored`. Every variant leaves the session's position,
/// selections and assistant messages as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogueError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Template for {flow}/{step} references unbound variable '{placeholder}'")]
    TemplateSubstitution {
        flow: FlowId,
        step: StepId,
        placeholder: String,
    },

    #[error("No scores recorded for this session")]
    MissingScores,
}

impl DialogueError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DialogueError::Catalog(err) => err.code(),
            DialogueError::TemplateSubstitution { .. } => ErrorCode::TemplateSubstitution,
            DialogueError::MissingScores => ErrorCode::MissingScores,
        }
    }
}
