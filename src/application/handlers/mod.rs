//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod nudge;

pub use nudge::{
    GetAvailableResponsesHandler, LoadProfileCommand, LoadProfileHandler, LoadProfileResult,
    ResetConversationHandler, ResetConversationResult, RespondCommand, RespondHandler,
    RespondResult, RunPredictionHandler, RunPredictionResult, StartNudgeCommand,
    StartNudgeHandler, StartNudgeResult,
};
