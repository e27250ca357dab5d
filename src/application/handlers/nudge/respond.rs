//! RespondHandler - Applies a user's response to the active flow.

use std::sync::Arc;

use crate::domain::dialogue::{DialogueEngine, DialogueError, ResponseOutcome};
use crate::domain::session::Session;

/// Command carrying the label the user picked.
#[derive(Debug, Clone)]
pub struct RespondCommand {
    pub response: String,
}

/// Result of a response.
#[derive(Debug, Clone)]
pub struct RespondResult {
    pub outcome: ResponseOutcome,
    /// The assistant message appended by a transition, if any.
    pub message: Option<String>,
}

/// Handler for user responses.
pub struct RespondHandler {
    engine: Arc<DialogueEngine>,
}

impl RespondHandler {
    pub fn new(engine: Arc<DialogueEngine>) -> Self {
        Self { engine }
    }

    pub fn handle(&self, session: &mut Session, cmd: RespondCommand) -> Result<RespondResult, DialogueError> {
        let outcome = self.engine.respond(session, &cmd.response)?;
        let message = match outcome {
            ResponseOutcome::Advanced { .. } => session
                .transcript()
                .last()
                .filter(|m| m.is_assistant())
                .map(|m| m.content().to_string()),
            _ => None,
        };
        Ok(RespondResult { outcome, message })
    }
}
