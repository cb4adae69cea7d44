use tracing::{error, instrument, warn};

use crate::domain::{
    chat::{
        entities::{CONNECTION_FALLBACK, EMPTY_REPLY_FALLBACK},
        helpers::build_chat_persona,
        ports::ChatService,
    },
    common::services::Service,
    llm::ports::LLMClient,
    profile::{entities::UserProfile, ports::ProfileRepository},
};

impl<PR, LLM> ChatService for Service<PR, LLM>
where
    PR: ProfileRepository,
    LLM: LLMClient,
{
    #[instrument(skip_all, fields(message_len = message.len()))]
    async fn chat(&self, message: String, profile: &UserProfile) -> String {
        let persona = build_chat_persona(profile, &self.region);

        match self.llm_client.generate_free_text(message, persona).await {
            Ok(reply) if reply.trim().is_empty() => {
                warn!("Chat reply was empty");
                EMPTY_REPLY_FALLBACK.to_string()
            }
            Ok(reply) => reply,
            Err(e) => {
                error!("Chat error: {}", e);
                CONNECTION_FALLBACK.to_string()
            }
        }
    }
}
