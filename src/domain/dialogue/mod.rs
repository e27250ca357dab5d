//! Dialogue module - the conversation state machine.
//!
//! - `DialogueEngine` - Starts flows, applies responses, lists options
//! - `ResponseOutcome` - What a response did
//! - `SkillsSummary` - Derived variables for the skills confirmation step

mod engine;
mod errors;
mod skills_summary;

pub use engine::{DialogueEngine, ResponseOutcome, DEFAULT_YEARS_OF_EXPERIENCE};
pub use errors::DialogueError;
pub use skills_summary::{SkillsSummary, POINTS_PER_SKILL};
