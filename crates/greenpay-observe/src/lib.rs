//! Tracing setup for the GreenPay backend.

pub mod tracing_setup;
