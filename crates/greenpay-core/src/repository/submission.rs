//! SubmissionRepository trait definition.

use greenpay_types::error::RepositoryError;
use greenpay_types::submission::{ContactSubmission, NewContact, NewsletterSubscription};

/// Repository trait for contact submissions and newsletter subscriptions.
///
/// Implementations assign ids: 1-based, strictly increasing, never reused.
pub trait SubmissionRepository: Send + Sync {
    /// Store a validated contact submission with status `new`.
    fn insert_contact(
        &self,
        contact: NewContact,
    ) -> impl std::future::Future<Output = Result<ContactSubmission, RepositoryError>> + Send;

    /// Store a newsletter subscription with status `active`.
    ///
    /// Returns `RepositoryError::Conflict` if the exact email is already
    /// stored. The check and the insert must be atomic.
    fn insert_subscription(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<NewsletterSubscription, RepositoryError>> + Send;

    /// Count contact submissions.
    fn count_contacts(
        &self,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Count newsletter subscriptions.
    fn count_subscriptions(
        &self,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
