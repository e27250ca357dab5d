//! Session aggregate.
//!
//! A session is the per-user conversation state: the loaded profile, the
//! transcript, the dialogue position, the latest scores and the in-progress
//! skill selection. It is owned by the caller and threaded through every
//! engine call; nothing here is shared between sessions.

use serde::{Deserialize, Serialize};

use super::message::Message;
use super::selection::SkillSelection;
use crate::domain::flow::Position;
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::profile::UserProfile;
use crate::domain::scoring::ActionScores;

/// Per-user conversation state.
///
/// # Invariants
///
/// - `transcript` is append-only between resets
/// - `selections` is only non-empty while positioned on an accumulation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    profile: UserProfile,
    transcript: Vec<Message>,
    position: Option<Position>,
    scores: Option<ActionScores>,
    selections: SkillSelection,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Session {
    /// Starts a session for a freshly loaded profile.
    pub fn new(profile: UserProfile) -> Self {
        let now = Timestamp::now();
        Self {
            id: SessionId::new(),
            profile,
            transcript: Vec::new(),
            position: None,
            scores: None,
            selections: SkillSelection::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Current (flow, step), or `None` when no flow is active.
    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn scores(&self) -> Option<&ActionScores> {
        self.scores.as_ref()
    }

    pub fn selections(&self) -> &SkillSelection {
        &self.selections
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn has_active_flow(&self) -> bool {
        self.position.is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Stores the latest scoring run.
    pub fn record_scores(&mut self, scores: ActionScores) {
        self.scores = Some(scores);
        self.touch();
    }

    /// Clears the transcript, position and selections. The profile and the
    /// latest scores are kept.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.position = None;
        self.selections.clear();
        self.touch();
    }

    /// Switches the session to another user. Everything tied to the previous
    /// user, including scores, is dropped.
    pub fn load_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
        self.scores = None;
        self.reset();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dialogue engine mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn push(&mut self, message: Message) {
        self.transcript.push(message);
        self.touch();
    }

    pub(crate) fn move_to(&mut self, position: Position) {
        self.position = Some(position);
        self.touch();
    }

    pub(crate) fn selections_mut(&mut self) -> &mut SkillSelection {
        &mut self.selections
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
