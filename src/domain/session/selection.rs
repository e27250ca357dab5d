//! Multi-select accumulation set.

use serde::{Deserialize, Serialize};

/// Labels the user has selected in an accumulation step, in selection order.
///
/// # Invariants
///
/// - No label appears twice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSelection(Vec<String>);

impl SkillSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the label if absent, removes it if present. Returns whether the
    /// label is selected afterwards.
    pub fn toggle(&mut self, label: &str) -> bool {
        match self.0.iter().position(|s| s == label) {
            Some(index) => {
                self.0.remove(index);
                false
            }
            None => {
                self.0.push(label.to_string());
                true
            }
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|s| s == label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
