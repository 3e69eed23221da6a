//! HTTP layer for the GreenPay backend.
//!
//! Axum-based JSON API under `/api/`, static site serving for everything
//! else, and permissive CORS.

pub mod error;
pub mod handlers;
pub mod router;
