//! Axum router configuration with middleware.
//!
//! JSON routes live under `/api/`. `/` serves the configured entry document
//! and every other unmatched path falls through to the static content root.
//! Middleware: CORS (any origin), request tracing with a per-request id.

use axum::Router;
use axum::extract::Request;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %Uuid::now_v7(),
        )
    });

    let api_routes = Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/contact", post(handlers::contact::submit_contact))
        .route("/newsletter", post(handlers::newsletter::subscribe))
        .route("/stats", get(handlers::stats::get_stats))
        .route("/health", get(handlers::health::health_check));

    let index = ServeFile::new(state.config.index_path());
    let static_files = ServeDir::new(&state.config.web_dir);
    tracing::info!(path = %state.config.web_dir.display(), "static file serving enabled");

    Router::new()
        .nest("/api", api_routes)
        .route_service("/", index)
        .fallback_service(static_files)
        .layer(cors)
        .layer(trace)
        .with_state(state)
}
