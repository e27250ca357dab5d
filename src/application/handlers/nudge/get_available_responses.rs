//! GetAvailableResponsesHandler - Lists the responses the current step accepts.

use std::sync::Arc;

use crate::domain::dialogue::{DialogueEngine, DialogueError};
use crate::domain::session::Session;

/// Query handler for available responses.
pub struct GetAvailableResponsesHandler {
    engine: Arc<DialogueEngine>,
}

impl GetAvailableResponsesHandler {
    pub fn new(engine: Arc<DialogueEngine>) -> Self {
        Self { engine }
    }

    pub fn handle(&self, session: &Session) -> Result<Vec<String>, DialogueError> {
        self.engine.available_responses(session)
    }
}
