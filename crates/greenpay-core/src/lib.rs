//! Responder, repository traits, and services for the GreenPay backend.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements. It depends only on `greenpay-types` -- never on
//! `greenpay-infra` or any IO crate.

pub mod repository;
pub mod responder;
pub mod service;
