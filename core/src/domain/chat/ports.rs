use std::future::Future;

use crate::domain::profile::entities::UserProfile;

/// Service trait for the conversational assistant
pub trait ChatService: Send + Sync {
    /// Never fails: an empty reply or a failed call is replaced by a fixed
    /// user-facing text so the conversation always gets an answer.
    fn chat(&self, message: String, profile: &UserProfile) -> impl Future<Output = String> + Send;
}
