//! Catalog lookup and loading errors.

use thiserror::Error;

use super::ids::{FlowId, StepId};
use crate::domain::foundation::ErrorCode;
use crate::domain::scoring::Action;

/// Errors raised by the flow catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown flow: {0}")]
    UnknownFlow(FlowId),

    #[error("Unknown step '{step}' in flow '{flow}'")]
    UnknownStep { flow: FlowId, step: StepId },

    #[error("No flow is registered for action {0}")]
    NoFlowForAction(Action),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Inconsistent catalog: {0}")]
    Inconsistent(String),
}

impl CatalogError {
    pub fn inconsistent(reason: impl Into<String>) -> Self {
        CatalogError::Inconsistent(reason.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::UnknownFlow(_) => ErrorCode::UnknownFlow,
            CatalogError::UnknownStep { .. } => ErrorCode::UnknownStep,
            CatalogError::NoFlowForAction(_) => ErrorCode::NoFlowForAction,
            CatalogError::Parse(_) | CatalogError::Inconsistent(_) => ErrorCode::CatalogInvalid,
        }
    }
}

impl From<serde_yaml::Error> for CatalogError {
    fn from(err: serde_yaml::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}
