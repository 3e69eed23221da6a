//! Infrastructure implementations for the GreenPay backend.
//!
//! Provides the in-memory store behind the repository traits from
//! `greenpay-core` and the TOML config loader.

pub mod config;
pub mod memory;
