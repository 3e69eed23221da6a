//! Contact form and newsletter submission types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Processing status of a contact submission. Every submission starts as `new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
}

/// Status of a newsletter subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Active,
}

/// Raw contact form fields as submitted by the site.
///
/// Every field is optional at this level; required-field checks happen in
/// the submission service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

/// Validated contact fields, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
    pub phone: String,
    pub company: String,
}

/// A stored contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
    pub status: ContactStatus,
}

/// A stored newsletter subscription. Emails are unique across the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    pub id: u64,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
    pub status: SubscriptionStatus,
}
