//! Repository trait definitions (ports) for the GreenPay backend.
//!
//! Implementations live in greenpay-infra. All traits use native async fn in
//! traits (RPITIT, Rust 2024 edition) so a persistent backend can replace the
//! in-memory store without touching the services.

pub mod chat;
pub mod stats;
pub mod submission;
