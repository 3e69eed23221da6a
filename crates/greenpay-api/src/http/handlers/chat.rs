//! Chat endpoint.
//!
//! POST /api/chat - Answer a message with a canned reply and record the exchange.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use greenpay_types::chat::DEFAULT_SESSION_KEY;

use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub suggestions: Vec<String>,
    pub session_id: String,
}

/// POST /api/chat
///
/// `session_id` defaults to `"default"`. A blank or missing message is a 400.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(req) = payload?;

    let session_id = req
        .session_id
        .unwrap_or_else(|| DEFAULT_SESSION_KEY.to_string());
    let message = req.message.unwrap_or_default();

    let reply = state
        .chat_service
        .send_message(&session_id, &message)
        .await?;

    Ok(Json(ChatResponse {
        success: true,
        response: reply.message,
        suggestions: reply.suggestions,
        session_id,
    }))
}
