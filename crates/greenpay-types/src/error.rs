use thiserror::Error;

/// Errors related to chat message handling.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Message is required")]
    EmptyMessage,

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors related to contact form and newsletter submissions.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// A required field was missing or blank. Holds the title-cased field name.
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Email already subscribed")]
    AlreadySubscribed,

    #[error("storage error: {0}")]
    StorageError(String),
}

impl SubmissionError {
    /// Whether this error was caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SubmissionError::MissingField(_) | SubmissionError::AlreadySubscribed
        )
    }
}

/// Errors from repository operations (used by trait definitions in greenpay-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("conflict: {0}")]
    Conflict(String),
}

impl From<RepositoryError> for ChatError {
    fn from(e: RepositoryError) -> Self {
        ChatError::StorageError(e.to_string())
    }
}
