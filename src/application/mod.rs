//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Sessions are owned by the caller and passed into each handler.

pub mod handlers;

pub use handlers::{
    GetAvailableResponsesHandler, LoadProfileCommand, LoadProfileHandler, LoadProfileResult,
    ResetConversationHandler, ResetConversationResult, RespondCommand, RespondHandler,
    RespondResult, RunPredictionHandler, RunPredictionResult, StartNudgeCommand,
    StartNudgeHandler, StartNudgeResult,
};
