//! ResetConversationHandler - Clears a session's conversation.

use tracing::info;

use crate::domain::session::Session;

/// Result of a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetConversationResult {
    /// Transcript entries discarded.
    pub cleared_messages: usize,
}

/// Handler for conversation resets. The profile and scores survive.
#[derive(Debug, Default)]
pub struct ResetConversationHandler;

impl ResetConversationHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, session: &mut Session) -> ResetConversationResult {
        let cleared_messages = session.transcript().len();
        session.reset();

        info!(
            session_id = %session.id(),
            cleared_messages,
            "Reset conversation"
        );
        ResetConversationResult { cleared_messages }
    }
}
