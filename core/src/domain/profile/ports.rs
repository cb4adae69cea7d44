use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::UserProfile, value_objects::CreateProfileInput},
};

/// Persistent home of the single active profile.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    /// Absent or unreadable data yields `None`, never an error.
    fn load(&self) -> impl Future<Output = Option<UserProfile>> + Send;

    /// Overwrites any previously stored profile.
    fn save(&self, profile: UserProfile) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait ProfileService: Send + Sync {
    fn load_profile(&self) -> impl Future<Output = Option<UserProfile>> + Send;

    /// Validates the setup form and persists the resulting profile.
    fn create_profile(
        &self,
        input: CreateProfileInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn reset_profile(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
