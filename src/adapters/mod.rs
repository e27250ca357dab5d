//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `profile` - Profile sources (in-memory demo users, YAML file)

pub mod profile;

pub use profile::{FileProfileSource, InMemoryProfileSource};
