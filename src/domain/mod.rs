//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `profile` - User profiles and their behavioral feature vectors
//! - `scoring` - Actions and the rule-based nudge scorer
//! - `flow` - Declarative catalog of dialogue flows
//! - `dialogue` - State machine driving a session through a flow
//! - `session` - Per-user conversation state

pub mod dialogue;
pub mod flow;
pub mod foundation;
pub mod profile;
pub mod scoring;
pub mod session;
