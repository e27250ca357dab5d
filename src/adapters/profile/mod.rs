//! Profile source adapters.
//!
//! - `InMemoryProfileSource` - Fixed list, including the demo users
//! - `FileProfileSource` - YAML document on disk

mod document;
mod file;
mod in_memory;

pub use file::FileProfileSource;
pub use in_memory::InMemoryProfileSource;
