//! Dialogue configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::dialogue::DEFAULT_YEARS_OF_EXPERIENCE;

/// Upper bound accepted for `years_of_experience`
pub const MAX_YEARS_OF_EXPERIENCE: u32 = 60;

/// Dialogue engine settings
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueConfig {
    /// Value bound to `{years}` in message templates
    #[serde(default = "default_years")]
    pub years_of_experience: u32,
}

impl DialogueConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.years_of_experience > MAX_YEARS_OF_EXPERIENCE {
            return Err(ValidationError::YearsOutOfRange {
                max: MAX_YEARS_OF_EXPERIENCE,
                actual: self.years_of_experience,
            });
        }
        Ok(())
    }
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            years_of_experience: default_years(),
        }
    }
}

fn default_years() -> u32 {
    DEFAULT_YEARS_OF_EXPERIENCE
}
