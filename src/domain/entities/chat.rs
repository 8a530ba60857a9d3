use chrono::{DateTime, Utc};

use crate::application::app_error::{AppError, AppResult};
use crate::domain::entities::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Id<ChatMessage>,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(text: String, sender: Sender) -> Self {
        Self {
            id: Id::generate(),
            text,
            sender,
            timestamp: Utc::now(),
        }
    }
}

/// Message log of the assistant widget. At most one bot reply may be
/// outstanding; user input is refused until it lands.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    pending_reply: bool,
}

impl Conversation {
    pub fn new(greeting: String) -> Self {
        Self {
            messages: vec![ChatMessage::new(greeting, Sender::Bot)],
            pending_reply: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending_reply
    }

    pub fn push_user(&mut self, text: &str) -> AppResult<&ChatMessage> {
        if text.trim().is_empty() {
            return Err(AppError::EmptyMessage);
        }
        if self.pending_reply {
            return Err(AppError::ReplyPending);
        }
        self.messages
            .push(ChatMessage::new(text.to_string(), Sender::User));
        self.pending_reply = true;
        Ok(&self.messages[self.messages.len() - 1])
    }

    pub fn push_reply(&mut self, text: String) {
        self.messages.push(ChatMessage::new(text, Sender::Bot));
        self.pending_reply = false;
    }
}
