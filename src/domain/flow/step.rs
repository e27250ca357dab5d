//! Step definitions: one node of a flow graph.

use serde::{Deserialize, Serialize};

use super::ids::{FlowId, Position, StepId};
use super::template::MessageTemplate;

/// The responses a step accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseOptions {
    /// A fixed, ordered list of button labels.
    Buttons { labels: Vec<String> },

    /// Accumulation mode: any skill from the user's industry list toggles
    /// a selection; `confirm` advances once `min_selections` are held.
    Skills {
        min_selections: usize,
        confirm: String,
    },
}

impl ResponseOptions {
    pub fn is_accumulation(&self) -> bool {
        matches!(self, ResponseOptions::Skills { .. })
    }

    /// Labels the step offers independent of the user's industry.
    pub fn static_labels(&self) -> Vec<&str> {
        match self {
            ResponseOptions::Buttons { labels } => labels.iter().map(String::as_str).collect(),
            ResponseOptions::Skills { confirm, .. } => vec![confirm.as_str()],
        }
    }
}

/// Where a transition leads.
///
/// A bare step id stays within the current flow; the map form switches the
/// active flow as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransitionTarget {
    Step(StepId),
    Flow { flow: FlowId, step: StepId },
}

impl TransitionTarget {
    /// Resolves the target relative to the flow it is declared in.
    pub fn resolve(&self, current: &FlowId) -> Position {
        match self {
            TransitionTarget::Step(step) => Position::new(current.clone(), step.clone()),
            TransitionTarget::Flow { flow, step } => Position::new(flow.clone(), step.clone()),
        }
    }
}

/// One explicit rule: responding with `on` moves to `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub on: String,
    pub to: TransitionTarget,
}

/// Variables computed on entry to a step, beyond the profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedVariables {
    /// Completeness and skill-count deltas from the accumulated selections.
    SkillsSummary,
}

impl DerivedVariables {
    /// Names this derivation binds.
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            DerivedVariables::SkillsSummary => &[
                "new_completeness",
                "improvement",
                "old_skills",
                "new_skills",
                "skills_added",
            ],
        }
    }
}

/// A message template plus the responses it accepts and where they lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    pub message: MessageTemplate,
    pub responses: ResponseOptions,
    #[serde(default)]
    pub transitions: Vec<Transition>,
    #[serde(default)]
    pub derive: Option<DerivedVariables>,
}

impl Step {
    pub fn is_accumulation(&self) -> bool {
        self.responses.is_accumulation()
    }

    /// The transition rule for a response label, if one is declared.
    pub fn transition_for(&self, response: &str) -> Option<&TransitionTarget> {
        self.transitions
            .iter()
            .find(|t| t.on == response)
            .map(|t| &t.to)
    }

    /// Minimum selections and confirmation label for accumulation steps.
    pub fn confirmation(&self) -> Option<(usize, &str)> {
        match &self.responses {
            ResponseOptions::Skills {
                min_selections,
                confirm,
            } => Some((*min_selections, confirm.as_str())),
            ResponseOptions::Buttons { .. } => None,
        }
    }
}
