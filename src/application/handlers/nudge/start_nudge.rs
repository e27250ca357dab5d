//! StartNudgeHandler - Opens the dialogue flow for an action.

use std::sync::Arc;

use crate::domain::dialogue::{DialogueEngine, DialogueError};
use crate::domain::flow::Position;
use crate::domain::scoring::Action;
use crate::domain::session::Session;

/// Command to start a nudge flow.
#[derive(Debug, Clone, Default)]
pub struct StartNudgeCommand {
    /// Flow to open; the session's top-scored action when `None`.
    pub action: Option<Action>,
}

/// Result of starting a flow.
#[derive(Debug, Clone)]
pub struct StartNudgeResult {
    pub action: Action,
    pub position: Position,
    /// The rendered opening message.
    pub message: String,
}

/// Handler for starting nudge flows.
pub struct StartNudgeHandler {
    engine: Arc<DialogueEngine>,
}

impl StartNudgeHandler {
    pub fn new(engine: Arc<DialogueEngine>) -> Self {
        Self { engine }
    }

    pub fn handle(&self, session: &mut Session, cmd: StartNudgeCommand) -> Result<StartNudgeResult, DialogueError> {
        let action = match cmd.action {
            Some(action) => action,
            None => session.scores().ok_or(DialogueError::MissingScores)?.top(),
        };

        let position = self.engine.start_flow(session, action)?;
        let message = session
            .transcript()
            .last()
            .map(|m| m.content().to_string())
            .unwrap_or_default();

        Ok(StartNudgeResult {
            action,
            position,
            message,
        })
    }
}
