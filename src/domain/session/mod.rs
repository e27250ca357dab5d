//! Session domain module.
//!
//! - `Session` - Per-user conversation state threaded through the engine
//! - `Message` / `Role` - Append-only transcript entries
//! - `SkillSelection` - Accumulated multi-select input

mod aggregate;
mod message;
mod selection;

pub use aggregate::Session;
pub use message::{Message, MessageId, Role};
pub use selection::SkillSelection;
