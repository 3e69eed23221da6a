//! In-memory store implementing `ChatRepository`, `SubmissionRepository`
//! and `StatsRepository`.
//!
//! All collections and both id counters sit behind one mutex, so every
//! mutation (a whole chat exchange, or the duplicate-email check and its
//! insert) is atomic with respect to concurrent requests, and counts are read
//! from a single consistent view. The lock is never held across an
//! `.await`. State lives as long as the process.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use greenpay_core::repository::chat::ChatRepository;
use greenpay_core::repository::stats::StatsRepository;
use greenpay_core::repository::submission::SubmissionRepository;
use greenpay_types::chat::{ChatSession, Turn};
use greenpay_types::error::RepositoryError;
use greenpay_types::stats::StoreCounts;
use greenpay_types::submission::{
    ContactStatus, ContactSubmission, NewContact, NewsletterSubscription, SubscriptionStatus,
};

#[derive(Debug, Default)]
struct StoreState {
    sessions: HashMap<String, ChatSession>,
    contacts: Vec<ContactSubmission>,
    subscribers: Vec<NewsletterSubscription>,
    last_contact_id: u64,
    last_subscription_id: u64,
}

/// Process-lifetime store shared by all request handlers.
///
/// Cloning is cheap and yields a handle to the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the state. Every write appends a fully built record, so the data
    /// behind a poisoned lock is still consistent and is used as-is.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StoreState {
    fn session_mut(&mut self, session_key: &str) -> &mut ChatSession {
        self.sessions
            .entry(session_key.to_string())
            .or_insert_with(|| {
                tracing::debug!(session_key, "chat session created");
                ChatSession::new(session_key)
            })
    }

    fn turn_count(&self) -> u64 {
        self.sessions
            .values()
            .map(|session| session.messages.len() as u64)
            .sum()
    }
}

impl ChatRepository for MemoryStore {
    async fn record_turn(&self, session_key: &str, turn: Turn) -> Result<(), RepositoryError> {
        self.lock().session_mut(session_key).messages.push(turn);
        Ok(())
    }

    async fn record_exchange(
        &self,
        session_key: &str,
        user: Turn,
        bot: Turn,
    ) -> Result<(), RepositoryError> {
        let mut state = self.lock();
        let session = state.session_mut(session_key);
        session.messages.push(user);
        session.messages.push(bot);
        Ok(())
    }

    async fn get_session(&self, session_key: &str) -> Result<Option<ChatSession>, RepositoryError> {
        Ok(self.lock().sessions.get(session_key).cloned())
    }

    async fn count_sessions(&self) -> Result<u64, RepositoryError> {
        Ok(self.lock().sessions.len() as u64)
    }

    async fn count_turns(&self) -> Result<u64, RepositoryError> {
        Ok(self.lock().turn_count())
    }
}

impl StatsRepository for MemoryStore {
    async fn counts(&self) -> Result<StoreCounts, RepositoryError> {
        let state = self.lock();
        Ok(StoreCounts {
            sessions: state.sessions.len() as u64,
            turns: state.turn_count(),
            contacts: state.contacts.len() as u64,
            subscribers: state.subscribers.len() as u64,
        })
    }
}

impl SubmissionRepository for MemoryStore {
    async fn insert_contact(&self, contact: NewContact) -> Result<ContactSubmission, RepositoryError> {
        let mut state = self.lock();
        state.last_contact_id += 1;
        let submission = ContactSubmission {
            id: state.last_contact_id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            company: contact.company,
            message: contact.message,
            submitted_at: Utc::now(),
            status: ContactStatus::New,
        };
        state.contacts.push(submission.clone());
        Ok(submission)
    }

    async fn insert_subscription(
        &self,
        email: &str,
    ) -> Result<NewsletterSubscription, RepositoryError> {
        let mut state = self.lock();
        if state.subscribers.iter().any(|sub| sub.email == email) {
            return Err(RepositoryError::Conflict(format!(
                "email '{email}' already subscribed"
            )));
        }

        state.last_subscription_id += 1;
        let subscription = NewsletterSubscription {
            id: state.last_subscription_id,
            email: email.to_string(),
            subscribed_at: Utc::now(),
            status: SubscriptionStatus::Active,
        };
        state.subscribers.push(subscription.clone());
        Ok(subscription)
    }

    async fn count_contacts(&self) -> Result<u64, RepositoryError> {
        Ok(self.lock().contacts.len() as u64)
    }

    async fn count_subscriptions(&self) -> Result<u64, RepositoryError> {
        Ok(self.lock().subscribers.len() as u64)
    }
}
