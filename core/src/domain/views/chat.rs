use chrono::{DateTime, Utc};

use crate::domain::chat::entities::{ChatMessage, ChatRole};

/// State behind the Assistant tab.
///
/// Messages are append-only for the lifetime of the view.
#[derive(Debug, Clone)]
pub struct ChatView {
    messages: Vec<ChatMessage>,
    in_flight: bool,
}

impl ChatView {
    pub fn new(profile_name: &str) -> Self {
        let welcome = format!(
            "Hello {}! I'm here to help with any nutrition questions. How are you feeling today?",
            profile_name
        );

        Self {
            messages: vec![ChatMessage::new(ChatRole::Model, welcome, Utc::now())],
            in_flight: false,
        }
    }

    /// Records the user's message and returns the text to send.
    ///
    /// Blank input and input while a reply is pending are ignored.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.in_flight {
            return None;
        }

        self.push(ChatRole::User, text.to_string());
        self.in_flight = true;
        Some(text.to_string())
    }

    pub fn receive(&mut self, reply: String) {
        self.push(ChatRole::Model, reply);
        self.in_flight = false;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    fn push(&mut self, role: ChatRole, text: String) {
        let timestamp = self.next_timestamp();
        self.messages.push(ChatMessage::new(role, text, timestamp));
    }

    // wall clock can step backwards; the sequence must not
    fn next_timestamp(&self) -> DateTime<Utc> {
        let now = Utc::now();
        match self.messages.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        }
    }
}
