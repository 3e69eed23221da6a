//! Submission service: validation for contact forms and newsletter signups.

use greenpay_types::error::{RepositoryError, SubmissionError};
use greenpay_types::submission::{
    ContactForm, ContactSubmission, NewContact, NewsletterSubscription,
};
use tracing::info;

use crate::repository::submission::SubmissionRepository;

/// Validates submissions and hands them to the repository.
pub struct SubmissionService<S: SubmissionRepository> {
    repo: S,
}

impl<S: SubmissionRepository> SubmissionService<S> {
    pub fn new(repo: S) -> Self {
        Self { repo }
    }

    /// Access the submission repository.
    pub fn repo(&self) -> &S {
        &self.repo
    }

    /// Validate and store a contact form.
    ///
    /// Name, email and message must be non-blank. The first missing one, in
    /// that order, is reported. Optional fields default to empty strings.
    pub async fn submit_contact(
        &self,
        form: ContactForm,
    ) -> Result<ContactSubmission, SubmissionError> {
        let contact = validate_contact(form)?;
        let submission = self
            .repo
            .insert_contact(contact)
            .await
            .map_err(|e| SubmissionError::StorageError(e.to_string()))?;

        info!(submission_id = submission.id, "contact submission recorded");
        Ok(submission)
    }

    /// Subscribe `email` to the newsletter.
    ///
    /// The email is trimmed; duplicates are matched exactly (case-sensitive).
    pub async fn subscribe(&self, email: &str) -> Result<NewsletterSubscription, SubmissionError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(SubmissionError::MissingField("Email"));
        }

        let subscription = self
            .repo
            .insert_subscription(email)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => SubmissionError::AlreadySubscribed,
            })?;

        info!(subscription_id = subscription.id, "newsletter subscription recorded");
        Ok(subscription)
    }
}

/// Check required fields in declaration order and normalize the form.
fn validate_contact(form: ContactForm) -> Result<NewContact, SubmissionError> {
    let name = required(form.name, "Name")?;
    let email = required(form.email, "Email")?;
    let message = required(form.message, "Message")?;

    Ok(NewContact {
        name,
        email,
        message,
        phone: form.phone.unwrap_or_default(),
        company: form.company.unwrap_or_default(),
    })
}

fn required(value: Option<String>, field: &'static str) -> Result<String, SubmissionError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(SubmissionError::MissingField(field)),
    }
}
