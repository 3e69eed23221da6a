//! Contact form endpoint.
//!
//! POST /api/contact - Validate and record a contact form submission.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use greenpay_types::submission::ContactForm;

use crate::http::error::AppError;
use crate::state::AppState;

const CONTACT_ACK: &str =
    "Thank you for your message! Our team will get back to you within 24 hours.";

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
    pub submission_id: u64,
}

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(form) = payload?;

    let submission = state.submission_service.submit_contact(form).await?;

    Ok(Json(ContactResponse {
        success: true,
        message: CONTACT_ACK,
        submission_id: submission.id,
    }))
}
