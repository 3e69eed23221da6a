//! Site statistics endpoint.
//!
//! GET /api/stats - One consistent snapshot of the store counts plus the
//! configured display figures.

use axum::Json;
use axum::extract::State;

use greenpay_core::service::stats::collect_stats;
use greenpay_types::stats::SiteStats;

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<SiteStats>, AppError> {
    let stats = collect_stats(&state.store, &state.config.display)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to collect stats: {e}")))?;

    Ok(Json(stats))
}
