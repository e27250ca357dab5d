//! Profile Source Port - Interface for obtaining user feature vectors.
//!
//! Where profiles live (a database, an analytics export, a fixture file) is
//! outside the core. Implementations return validated profiles or a
//! `ProfileError` explaining which field was unusable.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::profile::{ProfileError, ProfileSummary, UserProfile};

/// Port for loading user profiles.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Load and validate a single profile.
    ///
    /// # Errors
    ///
    /// - `UnknownUser` if the source has no such user
    /// - `InvalidFeatureVector` if the stored document fails validation
    /// - `Source` if the backing store cannot be read
    async fn load(&self, user_id: &UserId) -> Result<UserProfile, ProfileError>;

    /// List the available profiles in a stable order.
    async fn list(&self) -> Result<Vec<ProfileSummary>, ProfileError>;
}
