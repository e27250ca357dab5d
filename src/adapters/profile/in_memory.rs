//! In-memory profile source.
//!
//! Holds validated profiles in insertion order. `demo()` loads the five
//! built-in demo users.

use async_trait::async_trait;

use super::document::ProfileDocument;
use crate::domain::foundation::UserId;
use crate::domain::profile::{ProfileError, ProfileSummary, UserProfile};
use crate::ports::ProfileSource;

/// Profile source backed by a fixed list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileSource {
    profiles: Vec<UserProfile>,
}

impl InMemoryProfileSource {
    pub fn new(profiles: Vec<UserProfile>) -> Self {
        Self { profiles }
    }

    /// The built-in demo users.
    pub fn demo() -> Self {
        let profiles = ProfileDocument::parse(include_str!("demo_profiles.yaml"))
            .and_then(|doc| doc.profiles())
            .unwrap_or_else(|e| panic!("Built-in demo profiles are invalid: {}", e));
        Self::new(profiles)
    }

    /// Adds a profile, replacing any existing one with the same id.
    pub fn insert(&mut self, profile: UserProfile) {
        match self.profiles.iter_mut().find(|p| p.id() == profile.id()) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }
}

#[async_trait]
impl ProfileSource for InMemoryProfileSource {
    async fn load(&self, user_id: &UserId) -> Result<UserProfile, ProfileError> {
        self.profiles
            .iter()
            .find(|p| p.id() == user_id)
            .cloned()
            .ok_or_else(|| ProfileError::UnknownUser(user_id.clone()))
    }

    async fn list(&self) -> Result<Vec<ProfileSummary>, ProfileError> {
        Ok(self.profiles.iter().map(ProfileSummary::from).collect())
    }
}
