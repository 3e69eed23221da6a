//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by the REST API.
//! Services are generic over repository traits, but AppState pins them to
//! the in-memory store. Both services share one `MemoryStore` handle.

use std::sync::Arc;

use greenpay_core::responder::KeywordResponder;
use greenpay_core::service::chat::ChatService;
use greenpay_core::service::submission::SubmissionService;
use greenpay_infra::memory::MemoryStore;
use greenpay_types::config::ServerConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteChatService = ChatService<MemoryStore>;

pub type ConcreteSubmissionService = SubmissionService<MemoryStore>;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub submission_service: Arc<ConcreteSubmissionService>,
    /// Handle to the store both services write to, for aggregate reads.
    pub store: MemoryStore,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build the state around a fresh, empty store.
    pub fn new(config: ServerConfig) -> Self {
        let store = MemoryStore::new();

        let chat_service = ChatService::new(store.clone(), KeywordResponder::default());
        let submission_service = SubmissionService::new(store.clone());

        Self {
            chat_service: Arc::new(chat_service),
            submission_service: Arc::new(submission_service),
            store,
            config: Arc::new(config),
        }
    }
}
