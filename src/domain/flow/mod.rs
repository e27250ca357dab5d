//! Flow catalog: dialogue flows as data.
//!
//! - `FlowId` / `StepId` / `Position` - Identifiers into the catalog
//! - `Step` - Message template, accepted responses, transition rules
//! - `FlowCatalog` - Validated registry plus the industry skills data set
//! - `MessageTemplate` - `{placeholder}` templates parsed at load time

mod catalog;
mod errors;
mod ids;
mod step;
mod template;

pub use catalog::{Flow, FlowCatalog, IndustrySkills, ALWAYS_BOUND};
pub use errors::CatalogError;
pub use ids::{FlowId, Position, StepId};
pub use step::{DerivedVariables, ResponseOptions, Step, Transition, TransitionTarget};
pub use template::{MessageTemplate, TemplateError, TemplateVariables};
