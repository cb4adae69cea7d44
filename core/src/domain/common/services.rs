use crate::domain::{llm::ports::LLMClient, profile::ports::ProfileRepository};

/// Aggregates the adapters every domain service works through.
///
/// The gateway operations (meal plan, scan, chat) and the profile operations
/// are implemented on this type in their own modules.
#[derive(Debug, Clone)]
pub struct Service<PR, LLM>
where
    PR: ProfileRepository,
    LLM: LLMClient,
{
    pub(crate) profile_repository: PR,
    pub(crate) llm_client: LLM,
    pub(crate) region: String,
}

impl<PR, LLM> Service<PR, LLM>
where
    PR: ProfileRepository,
    LLM: LLMClient,
{
    pub fn new(profile_repository: PR, llm_client: LLM, region: String) -> Self {
        Self {
            profile_repository,
            llm_client,
            region,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}
