//! Shared domain types for the GreenPay demo backend.
//!
//! This crate contains the types used across the workspace: chat turns and
//! sessions, contact and newsletter submissions, the stats snapshot, server
//! configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod stats;
pub mod submission;
