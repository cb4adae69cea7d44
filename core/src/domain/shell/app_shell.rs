use tracing::info;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::UserProfile, ports::ProfileService, value_objects::CreateProfileInput},
    shell::entities::{ActiveSession, ShellState, Tab},
};

/// Top-level state of the application: no profile, or one of three tabs.
#[derive(Debug, Clone, Default)]
pub struct AppShell {
    session: Option<ActiveSession>,
}

impl AppShell {
    /// Opens on the Meals tab when a stored profile exists.
    pub async fn start<P: ProfileService>(profiles: &P) -> Self {
        let session = profiles.load_profile().await.map(ActiveSession::new);
        Self { session }
    }

    pub fn state(&self) -> ShellState {
        self.session
            .as_ref()
            .map_or(ShellState::NoProfile, |session| session.tab.into())
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.session.as_ref().map(|session| &session.profile)
    }

    pub fn session(&self) -> Option<&ActiveSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut ActiveSession> {
        self.session.as_mut()
    }

    /// Saves the setup form and moves to the Meals tab.
    ///
    /// On a validation or storage error the shell stays where it was.
    pub async fn complete_setup<P: ProfileService>(
        &mut self,
        profiles: &P,
        input: CreateProfileInput,
    ) -> Result<&UserProfile, CoreError> {
        let profile = profiles.create_profile(input).await?;
        info!("Session started");
        let session = self.session.insert(ActiveSession::new(profile));
        Ok(&session.profile)
    }

    /// Switches the visible tab. Views and their pending requests are kept.
    pub fn select_tab(&mut self, tab: Tab) -> Result<(), CoreError> {
        let session = self.session.as_mut().ok_or(CoreError::ProfileRequired)?;
        session.tab = tab;
        Ok(())
    }

    /// Clears the stored profile once `confirm` agrees.
    ///
    /// Returns `Ok(false)` when the user declined; nothing changes then.
    pub async fn reset<P, F>(&mut self, profiles: &P, confirm: F) -> Result<bool, CoreError>
    where
        P: ProfileService,
        F: FnOnce() -> bool,
    {
        if self.session.is_none() {
            return Err(CoreError::ProfileRequired);
        }
        if !confirm() {
            return Ok(false);
        }

        profiles.reset_profile().await?;
        self.session = None;
        Ok(true)
    }
}
