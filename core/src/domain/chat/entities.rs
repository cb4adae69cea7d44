use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

pub const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I couldn't understand that. Could you try again?";
pub const CONNECTION_FALLBACK: &str =
    "I'm having trouble connecting right now. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One turn of the assistant conversation. Lives only as long as the chat view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: generate_uuid_v7(),
            role,
            text: text.into(),
            timestamp,
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let message = ChatMessage::new(ChatRole::Model, "Hi", Utc::now());
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "model");
        assert!(!message.is_from_user());
    }

    #[test]
    fn every_message_gets_its_own_id() {
        let now = Utc::now();
        let first = ChatMessage::new(ChatRole::User, "a", now);
        let second = ChatMessage::new(ChatRole::User, "a", now);
        assert_ne!(first.id, second.id);
    }
}
