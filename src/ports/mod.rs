//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `NudgeScorer` - Model that scores candidate actions
//! - `ProfileSource` - Lookup of user profiles by identifier

mod nudge_scorer;
mod profile_source;

pub use nudge_scorer::NudgeScorer;
pub use profile_source::ProfileSource;
