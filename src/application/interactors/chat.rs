use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::application::app_error::AppResult;
use crate::application::dto::chat::ChatMessageDTO;
use crate::application::interface::assistant::Responder;
use crate::domain::entities::chat::Conversation;

#[derive(Clone)]
pub struct ChatInteractor {
    responder: Arc<dyn Responder>,
    greeting: String,
    conversation: Arc<Mutex<Conversation>>,
    reply_delay: Duration,
}

impl ChatInteractor {
    pub fn new(responder: Arc<dyn Responder>, greeting: String, reply_delay: Duration) -> Self {
        Self {
            responder,
            conversation: Arc::new(Mutex::new(Conversation::new(greeting.clone()))),
            greeting,
            reply_delay,
        }
    }

    /// Starts a fresh conversation. A reply still in flight lands in the
    /// discarded one.
    pub fn reset(&mut self) {
        self.conversation = Arc::new(Mutex::new(Conversation::new(self.greeting.clone())));
        debug!("Conversation reset");
    }

    /// Appends the user's message and schedules the bot reply after the
    /// configured delay. Fails while a previous reply is still pending.
    pub async fn send(&self, text: &str) -> AppResult<JoinHandle<()>> {
        let question = {
            let mut conversation = self.conversation.lock().await;
            conversation.push_user(text)?.text.clone()
        };
        debug!("Question queued for the assistant");

        let responder = self.responder.clone();
        let conversation = self.conversation.clone();
        let delay = self.reply_delay;
        Ok(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let answer = responder.respond(&question);
            conversation.lock().await.push_reply(answer);
            info!("Assistant reply delivered");
        }))
    }

    pub async fn history(&self) -> Vec<ChatMessageDTO> {
        let conversation = self.conversation.lock().await;
        conversation
            .messages()
            .iter()
            .map(ChatMessageDTO::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use mockall::mock;
    use rstest::rstest;

    use crate::adapter::assistant::keyword::KeywordResponder;
    use crate::application::app_error::AppError;
    use crate::application::interactors::chat::ChatInteractor;
    use crate::application::interface::assistant::Responder;

    mock! {
        pub ResponderMock {}

        impl Responder for ResponderMock {
            fn respond(&self, question: &str) -> String;
        }
    }

    const DELAY: Duration = Duration::from_millis(50);

    fn chat() -> ChatInteractor {
        ChatInteractor::new(
            Arc::new(KeywordResponder::default()),
            "Hello!".to_string(),
            DELAY,
        )
    }

    #[rstest]
    #[tokio::test]
    async fn test_send_appends_question_then_reply() {
        let chat = chat();

        let handle = chat.send("Tell me about React hooks").await.unwrap();
        assert_eq!(chat.history().await.len(), 2);

        handle.await.unwrap();

        let history = chat.history().await;
        assert_eq!(history.len(), 3);
        assert!(!history[1].from_bot);
        assert!(history[2].from_bot);
        assert!(history[2].text.starts_with("React is a powerful library"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_second_message_rejected_while_pending() {
        let chat = chat();
        let handle = chat.send("career?").await.unwrap();

        let second = chat.send("coding?").await;

        assert!(matches!(second, Err(AppError::ReplyPending)));
        handle.await.unwrap();
        assert!(chat.send("coding?").await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn test_reset_starts_from_greeting() {
        let mut chat = chat();
        chat.send("career?").await.unwrap().await.unwrap();

        chat.reset();

        let history = chat.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].text, "Hello!");
        assert!(chat.send("coding?").await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn test_reset_ignores_reply_in_flight() {
        let mut chat = chat();
        let handle = chat.send("react?").await.unwrap();

        chat.reset();
        handle.await.unwrap();

        assert_eq!(chat.history().await.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        let chat = chat();
        assert!(matches!(chat.send("   ").await, Err(AppError::EmptyMessage)));
        assert_eq!(chat.history().await.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_responder_receives_original_text() {
        let mut responder = MockResponderMock::new();
        responder
            .expect_respond()
            .withf(|q| q.contains("What is Rust?"))
            .times(1)
            .returning(|_| "A systems language.".to_string());
        let chat = ChatInteractor::new(Arc::new(responder), "Hi".to_string(), Duration::ZERO);

        chat.send("What is Rust?").await.unwrap().await.unwrap();

        assert_eq!(chat.history().await[2].text, "A systems language.");
    }
}
