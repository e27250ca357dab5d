//! Nudge handlers: one per operation a presentation layer drives.

mod get_available_responses;
mod load_profile;
mod reset_conversation;
mod respond;
mod run_prediction;
mod start_nudge;

pub use get_available_responses::GetAvailableResponsesHandler;
pub use load_profile::{LoadProfileCommand, LoadProfileHandler, LoadProfileResult};
pub use reset_conversation::{ResetConversationHandler, ResetConversationResult};
pub use respond::{RespondCommand, RespondHandler, RespondResult};
pub use run_prediction::{RunPredictionHandler, RunPredictionResult};
pub use start_nudge::{StartNudgeCommand, StartNudgeHandler, StartNudgeResult};
