//! Flow and step identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a flow in the catalog (e.g. `refresh_cv`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowId(String);

impl FlowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a step within a flow (e.g. `show_skills`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(String);

impl StepId {
    /// Every flow starts at this step.
    pub const INITIAL: &'static str = "initial";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn initial() -> Self {
        Self(Self::INITIAL.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A (flow, step) pair: the dialogue state machine's position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub flow: FlowId,
    pub step: StepId,
}

impl Position {
    pub fn new(flow: FlowId, step: StepId) -> Self {
        Self { flow, step }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.flow, self.step)
    }
}
