//! Profile domain module.
//!
//! Validated behavioral features and user identity. Loading profiles is an
//! external concern (see `ports::ProfileSource`); this module only defines
//! what a valid profile is.

mod errors;
mod features;
mod user;

pub use errors::ProfileError;
pub use features::{FeatureVector, Industry, RawFeatureVector};
pub use user::{ProfileSummary, RawProfile, UserProfile};
