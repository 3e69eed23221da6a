//! HTTP request handlers for the JSON API.

pub mod chat;
pub mod contact;
pub mod health;
pub mod newsletter;
pub mod stats;
