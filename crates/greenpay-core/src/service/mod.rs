//! Services coordinating the responder and the repositories.

pub mod chat;
pub mod stats;
pub mod submission;
