//! ChatRepository trait definition.

use greenpay_types::chat::{ChatSession, Turn};
use greenpay_types::error::RepositoryError;

/// Repository trait for chat session and turn persistence.
pub trait ChatRepository: Send + Sync {
    /// Append a turn to a session, creating the session on first use.
    fn record_turn(
        &self,
        session_key: &str,
        turn: Turn,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Append a user turn and the bot turn answering it as one atomic step,
    /// creating the session on first use. No other turn can land between them.
    fn record_exchange(
        &self,
        session_key: &str,
        user: Turn,
        bot: Turn,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Get a session by key.
    fn get_session(
        &self,
        session_key: &str,
    ) -> impl std::future::Future<Output = Result<Option<ChatSession>, RepositoryError>> + Send;

    /// Count sessions.
    fn count_sessions(
        &self,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Count turns across all sessions.
    fn count_turns(&self)
    -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
