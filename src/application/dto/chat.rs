use chrono::{DateTime, Utc};

use crate::domain::entities::chat::{ChatMessage, Sender};

#[derive(Debug, Clone)]
pub struct ChatMessageDTO {
    pub id: String,
    pub text: String,
    pub from_bot: bool,
    pub timestamp: DateTime<Utc>,
}

impl From<&ChatMessage> for ChatMessageDTO {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id.value.clone(),
            text: message.text.clone(),
            from_bot: message.sender == Sender::Bot,
            timestamp: message.timestamp,
        }
    }
}
