//! Chat session, turn, and reply types.
//!
//! A session is an ordered list of turns keyed by a caller-supplied session
//! key. Every user message produces two turns: the user's text and the bot's
//! canned reply.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;

/// Session key used when the caller does not supply one.
pub const DEFAULT_SESSION_KEY: &str = "default";

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnKind {
    User,
    Bot,
}

/// The category a message was matched to by the responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Greetings,
    Services,
    Payment,
    Account,
    Pricing,
    Security,
    Contact,
    Help,
    Thanks,
    Goodbye,
    Fallback,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::Greetings => "greetings",
            Topic::Services => "services",
            Topic::Payment => "payment",
            Topic::Account => "account",
            Topic::Pricing => "pricing",
            Topic::Security => "security",
            Topic::Contact => "contact",
            Topic::Help => "help",
            Topic::Thanks => "thanks",
            Topic::Goodbye => "goodbye",
            Topic::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// A canned bot reply: the text plus ordered follow-up suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReply {
    pub message: String,
    pub suggestions: Vec<String>,
}

/// One message within a chat session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    #[serde(rename = "type")]
    pub kind: TurnKind,
    pub message: String,
    /// Follow-up suggestions (bot turns only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// A turn carrying the user's text.
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            kind: TurnKind::User,
            message: message.into(),
            suggestions: None,
            timestamp: Utc::now(),
        }
    }

    /// A turn carrying the bot's reply and its suggestions.
    pub fn bot(reply: &BotReply) -> Self {
        Self {
            kind: TurnKind::Bot,
            message: reply.message.clone(),
            suggestions: Some(reply.suggestions.clone()),
            timestamp: Utc::now(),
        }
    }
}

/// A chat conversation. Lives for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub key: String,
    pub messages: Vec<Turn>,
    pub created_at: DateTime<Utc>,
}

impl ChatSession {
    /// Create an empty session for `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            messages: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_kind_serde() {
        assert_eq!(serde_json::to_string(&TurnKind::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&TurnKind::Bot).unwrap(), "\"bot\"");
    }

    #[test]
    fn test_topic_serde() {
        let json = serde_json::to_string(&Topic::Greetings).unwrap();
        assert_eq!(json, "\"greetings\"");
        assert_eq!(Topic::Fallback.to_string(), "fallback");
    }

    #[test]
    fn test_bot_turn_serializes_type_and_suggestions() {
        let reply = BotReply {
            message: "Hi there".to_string(),
            suggestions: vec!["Pricing".to_string()],
        };
        let json = serde_json::to_value(Turn::bot(&reply)).unwrap();
        assert_eq!(json["type"], "bot");
        assert_eq!(json["message"], "Hi there");
        assert_eq!(json["suggestions"][0], "Pricing");
    }

    #[test]
    fn test_user_turn_omits_suggestions() {
        let json = serde_json::to_value(Turn::user("hello")).unwrap();
        assert_eq!(json["type"], "user");
        assert!(json.get("suggestions").is_none());
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = ChatSession::new("abc");
        assert_eq!(session.key, "abc");
        assert!(session.messages.is_empty());
    }
}
