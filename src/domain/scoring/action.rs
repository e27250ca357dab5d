//! Recommendable actions (nudges).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A recommended next step for the user.
///
/// The declaration order is the registration order: scorers evaluate actions
/// in this order and ties on the top score go to the earliest action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Refresh the CV so it surfaces in "recently updated" lists.
    RefreshCv,
    /// Add skills to raise profile completeness.
    AddSkill,
    /// Apply to matching jobs.
    ApplyJob,
}

impl Action {
    /// All actions in registration order.
    pub const ALL: [Action; 3] = [Action::RefreshCv, Action::AddSkill, Action::ApplyJob];

    /// Stable identifier, matching the serde representation.
    pub fn id(&self) -> &'static str {
        match self {
            Action::RefreshCv => "refresh_cv",
            Action::AddSkill => "add_skill",
            Action::ApplyJob => "apply_job",
        }
    }

    /// Outcome metric this action is expected to move. Display only.
    pub fn expected_outcome(&self) -> &'static str {
        match self {
            Action::RefreshCv => "emp_cv_views",
            Action::AddSkill => "emp_contact_flips",
            Action::ApplyJob => "emp_reveals",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Action {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| ValidationError::invalid_format("action", format!("unknown action '{}'", s)))
    }
}
