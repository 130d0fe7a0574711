//! Chatbot widget state: open flag, message log, in-flight request.
//!
//! The widget only relays one request/response per message; everything
//! conversational happens behind the configured endpoint.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

pub const MAX_MESSAGE_CHARS: usize = 500;
pub const GREETING: &str = "Hi! Ask me anything about my projects, experience, or this site.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
    /// Delivery failure shown inline in the log.
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content: content.into() }
    }
}

#[derive(Clone, Debug)]
pub struct ChatState {
    pub open: bool,
    pub pending: bool,
    pub messages: Vec<ChatMessage>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { open: false, pending: false, messages: vec![ChatMessage::new(ChatRole::Assistant, GREETING)] }
    }
}

impl ChatState {
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Record an outgoing message and mark a request in flight.
    ///
    /// Returns the cleaned text to send, or `None` when the input is blank
    /// or a request is already pending.
    pub fn begin_send(&mut self, raw: &str) -> Option<String> {
        if self.pending {
            return None;
        }
        let text = normalize_message(raw)?;
        self.messages.push(ChatMessage::new(ChatRole::User, text.clone()));
        self.pending = true;
        Some(text)
    }

    pub fn receive_reply(&mut self, reply: &str) {
        self.messages.push(ChatMessage::new(ChatRole::Assistant, reply.trim()));
        self.pending = false;
    }

    pub fn receive_error(&mut self, error: &str) {
        self.messages.push(ChatMessage::new(ChatRole::Error, error));
        self.pending = false;
    }
}

/// Trim and cap user input. Blank input yields `None`.
pub fn normalize_message(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_MESSAGE_CHARS).collect())
}
