//! YAML file profile source.
//!
//! Reads the file on every call so edits are picked up without a restart.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::document::ProfileDocument;
use crate::domain::foundation::UserId;
use crate::domain::profile::{ProfileError, ProfileSummary, UserProfile};
use crate::ports::ProfileSource;

/// Profile source backed by a YAML document on disk.
#[derive(Debug, Clone)]
pub struct FileProfileSource {
    path: PathBuf,
}

impl FileProfileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn document(&self) -> Result<ProfileDocument, ProfileError> {
        let source = fs::read_to_string(&self.path).await.map_err(|e| {
            ProfileError::source(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        ProfileDocument::parse(&source)
    }
}

#[async_trait]
impl ProfileSource for FileProfileSource {
    async fn load(&self, user_id: &UserId) -> Result<UserProfile, ProfileError> {
        self.document().await?.profile(user_id)
    }

    async fn list(&self) -> Result<Vec<ProfileSummary>, ProfileError> {
        let profiles = self.document().await?.profiles()?;
        Ok(profiles.iter().map(ProfileSummary::from).collect())
    }
}
