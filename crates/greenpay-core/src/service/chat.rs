//! Chat service: validates a message, records both turns, and returns the
//! canned reply.

use greenpay_types::chat::{BotReply, Turn};
use greenpay_types::error::ChatError;
use tracing::debug;

use crate::repository::chat::ChatRepository;
use crate::responder::KeywordResponder;

/// Orchestrates one chat exchange.
///
/// Generic over `ChatRepository` (greenpay-core never depends on greenpay-infra).
pub struct ChatService<C: ChatRepository> {
    chat_repo: C,
    responder: KeywordResponder,
}

impl<C: ChatRepository> ChatService<C> {
    /// Create a chat service with the given repository and responder.
    pub fn new(chat_repo: C, responder: KeywordResponder) -> Self {
        Self {
            chat_repo,
            responder,
        }
    }

    /// Access the chat repository.
    pub fn chat_repo(&self) -> &C {
        &self.chat_repo
    }

    /// Access the responder.
    pub fn responder(&self) -> &KeywordResponder {
        &self.responder
    }

    /// Handle a user message for `session_key`.
    ///
    /// The message is trimmed; an empty result is rejected before it reaches
    /// the responder. The reply is computed first, then the user turn and the
    /// bot turn are appended together so concurrent exchanges on the same
    /// session never interleave.
    pub async fn send_message(
        &self,
        session_key: &str,
        message: &str,
    ) -> Result<BotReply, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let topic = self.responder.classify(message);
        let reply = self.responder.respond(message);
        debug!(session_key, %topic, "matched chat topic");

        self.chat_repo
            .record_exchange(session_key, Turn::user(message), Turn::bot(&reply))
            .await?;

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use greenpay_types::chat::{ChatSession, TurnKind};
    use greenpay_types::error::RepositoryError;

    use super::*;

    #[derive(Default)]
    struct FakeChatRepo {
        sessions: Mutex<HashMap<String, ChatSession>>,
    }

    impl ChatRepository for FakeChatRepo {
        async fn record_turn(&self, session_key: &str, turn: Turn) -> Result<(), RepositoryError> {
            let mut sessions = self.sessions.lock().unwrap();
            sessions
                .entry(session_key.to_string())
                .or_insert_with(|| ChatSession::new(session_key))
                .messages
                .push(turn);
            Ok(())
        }

        async fn record_exchange(
            &self,
            session_key: &str,
            user: Turn,
            bot: Turn,
        ) -> Result<(), RepositoryError> {
            let mut sessions = self.sessions.lock().unwrap();
            let session = sessions
                .entry(session_key.to_string())
                .or_insert_with(|| ChatSession::new(session_key));
            session.messages.push(user);
            session.messages.push(bot);
            Ok(())
        }

        async fn get_session(
            &self,
            session_key: &str,
        ) -> Result<Option<ChatSession>, RepositoryError> {
            Ok(self.sessions.lock().unwrap().get(session_key).cloned())
        }

        async fn count_sessions(&self) -> Result<u64, RepositoryError> {
            Ok(self.sessions.lock().unwrap().len() as u64)
        }

        async fn count_turns(&self) -> Result<u64, RepositoryError> {
            Ok(self
                .sessions
                .lock()
                .unwrap()
                .values()
                .map(|s| s.messages.len() as u64)
                .sum())
        }
    }

    fn service() -> ChatService<FakeChatRepo> {
        ChatService::new(FakeChatRepo::default(), KeywordResponder::default())
    }

    #[tokio::test]
    async fn test_send_message_records_both_turns() {
        let svc = service();
        let reply = svc.send_message("s1", "  hello  ").await.unwrap();
        assert!(reply.message.starts_with("Hello!"));

        let session = svc.chat_repo().get_session("s1").await.unwrap().unwrap();
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].kind, TurnKind::User);
        assert_eq!(session.messages[0].message, "hello");
        assert_eq!(session.messages[1].kind, TurnKind::Bot);
        assert_eq!(session.messages[1].message, reply.message);
        assert_eq!(session.messages[1].suggestions.as_ref(), Some(&reply.suggestions));
    }

    #[tokio::test]
    async fn test_empty_message_is_rejected_without_recording() {
        let svc = service();
        let err = svc.send_message("s1", "   ").await.unwrap_err();
        assert!(matches!(err, ChatError::EmptyMessage));
        assert_eq!(svc.chat_repo().count_sessions().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_fallback_echoes_trimmed_message() {
        let svc = service();
        let reply = svc.send_message("s1", " xyzzy123 ").await.unwrap();
        assert!(reply.message.contains("\"xyzzy123\""));
    }

    #[tokio::test]
    async fn test_sessions_are_keyed_independently() {
        let svc = service();
        svc.send_message("a", "hi").await.unwrap();
        svc.send_message("a", "pricing").await.unwrap();
        svc.send_message("b", "bye").await.unwrap();
        assert_eq!(svc.chat_repo().count_sessions().await.unwrap(), 2);
        assert_eq!(svc.chat_repo().count_turns().await.unwrap(), 6);
    }
}
