//! LoadProfileHandler - Loads a user profile into a session.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::UserId;
use crate::domain::profile::{ProfileError, ProfileSummary};
use crate::domain::session::Session;
use crate::ports::ProfileSource;

/// Command to load a user's profile.
#[derive(Debug, Clone)]
pub struct LoadProfileCommand {
    pub user_id: UserId,
}

/// Result of loading a profile into a fresh session.
#[derive(Debug, Clone)]
pub struct LoadProfileResult {
    pub session: Session,
}

/// Handler for loading profiles.
pub struct LoadProfileHandler {
    profiles: Arc<dyn ProfileSource>,
}

impl LoadProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileSource>) -> Self {
        Self { profiles }
    }

    /// Loads the profile and starts a new session for it.
    pub async fn handle(&self, cmd: LoadProfileCommand) -> Result<LoadProfileResult, ProfileError> {
        let profile = self.profiles.load(&cmd.user_id).await?;
        let session = Session::new(profile);

        info!(
            session_id = %session.id(),
            user_id = %cmd.user_id,
            industry = %session.profile().industry(),
            "Loaded profile"
        );
        Ok(LoadProfileResult { session })
    }

    /// Loads the profile into an existing session, discarding the previous
    /// user's conversation and scores.
    ///
    /// On error the session is left untouched.
    pub async fn switch(&self, session: &mut Session, cmd: LoadProfileCommand) -> Result<(), ProfileError> {
        let profile = self.profiles.load(&cmd.user_id).await?;
        let previous = session.profile().id().clone();
        session.load_profile(profile);

        info!(
            session_id = %session.id(),
            from = %previous,
            to = %cmd.user_id,
            "Switched profile"
        );
        Ok(())
    }

    /// Profiles available to load, in source order.
    pub async fn list(&self) -> Result<Vec<ProfileSummary>, ProfileError> {
        self.profiles.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::profile::InMemoryProfileSource;
    use async_trait::async_trait;
    use crate::domain::profile::UserProfile;

    struct UnavailableSource;

    #[async_trait]
    impl ProfileSource for UnavailableSource {
        async fn load(&self, _user_id: &UserId) -> Result<UserProfile, ProfileError> {
            Err(ProfileError::source("connection refused"))
        }

        async fn list(&self) -> Result<Vec<ProfileSummary>, ProfileError> {
            Err(ProfileError::source("connection refused"))
        }
    }

    fn handler() -> LoadProfileHandler {
        LoadProfileHandler::new(Arc::new(InMemoryProfileSource::demo()))
    }

    fn cmd(id: &str) -> LoadProfileCommand {
        LoadProfileCommand {
            user_id: UserId::new(id).unwrap(),
        }
    }

    #[tokio::test]
    async fn creates_idle_session() {
        let result = handler().handle(cmd("layla_mansour")).await.unwrap();

        assert_eq!(result.session.profile().name(), "Layla Mansour");
        assert!(result.session.transcript().is_empty());
        assert!(result.session.scores().is_none());
    }

    #[tokio::test]
    async fn unknown_user_fails() {
        let err = handler().handle(cmd("ghost")).await.unwrap_err();
        assert!(matches!(err, ProfileError::UnknownUser(_)));
    }

    #[tokio::test]
    async fn switch_replaces_profile() {
        let handler = handler();
        let mut session = handler.handle(cmd("fatima_hassan")).await.unwrap().session;

        handler.switch(&mut session, cmd("omar_khalil")).await.unwrap();

        assert_eq!(session.profile().id().as_str(), "omar_khalil");
    }

    #[tokio::test]
    async fn failed_switch_keeps_session() {
        let handler = handler();
        let mut session = handler.handle(cmd("fatima_hassan")).await.unwrap().session;

        let failing = LoadProfileHandler::new(Arc::new(UnavailableSource));
        let err = failing.switch(&mut session, cmd("omar_khalil")).await.unwrap_err();

        assert!(matches!(err, ProfileError::Source(_)));
        assert_eq!(session.profile().id().as_str(), "fatima_hassan");
    }

    #[tokio::test]
    async fn lists_demo_users() {
        assert_eq!(handler().list().await.unwrap().len(), 5);
    }
}
