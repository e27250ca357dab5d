//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error vocabulary used across
//! the scoring, flow and dialogue modules.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{SessionId, UserId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
