//! Newsletter endpoint.
//!
//! POST /api/newsletter - Subscribe an email address.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NewsletterRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NewsletterResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /api/newsletter
///
/// 400 when the email is blank or already subscribed.
pub async fn subscribe(
    State(state): State<AppState>,
    payload: Result<Json<NewsletterRequest>, JsonRejection>,
) -> Result<Json<NewsletterResponse>, AppError> {
    let Json(req) = payload?;

    state
        .submission_service
        .subscribe(req.email.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(NewsletterResponse {
        success: true,
        message: "Successfully subscribed to our newsletter!",
    }))
}
