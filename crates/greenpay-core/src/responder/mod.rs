//! Keyword-matched canned replies.
//!
//! The responder walks an ordered list of categories and returns the reply of
//! the first one whose keywords appear in the case-folded message. Order is
//! the tie-break: "hello, what's your pricing?" is a greeting, not a pricing
//! question. Messages matching nothing get a fallback reply that quotes them.

pub mod catalog;

use greenpay_types::chat::{BotReply, Topic};

/// A fixed reply text and its follow-up suggestions.
#[derive(Debug, Clone)]
pub struct CannedReply {
    pub message: &'static str,
    pub suggestions: &'static [&'static str],
}

impl CannedReply {
    fn to_reply(&self) -> BotReply {
        BotReply {
            message: self.message.to_string(),
            suggestions: self.suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A named group of trigger keywords mapped to one canned reply.
#[derive(Debug, Clone)]
pub struct Category {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub reply: CannedReply,
}

impl Category {
    /// Whether any keyword occurs as a substring of the already case-folded message.
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|keyword| normalized.contains(keyword))
    }
}

/// Reply used when no category matches. `{message}` is replaced with the
/// caller's original text.
#[derive(Debug, Clone)]
pub struct FallbackReply {
    pub template: &'static str,
    pub suggestions: &'static [&'static str],
}

impl FallbackReply {
    fn render(&self, message: &str) -> BotReply {
        BotReply {
            message: self.template.replace("{message}", message),
            suggestions: self.suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered keyword-category responder. Immutable once built.
#[derive(Debug, Clone)]
pub struct KeywordResponder {
    categories: Vec<Category>,
    fallback: FallbackReply,
}

impl KeywordResponder {
    /// Build a responder from an ordered category list and a fallback.
    pub fn new(categories: Vec<Category>, fallback: FallbackReply) -> Self {
        Self {
            categories,
            fallback,
        }
    }

    /// The categories in evaluation order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Which topic `message` resolves to.
    pub fn classify(&self, message: &str) -> Topic {
        self.find(message)
            .map(|category| category.topic)
            .unwrap_or(Topic::Fallback)
    }

    /// Produce the canned reply for `message`.
    pub fn respond(&self, message: &str) -> BotReply {
        match self.find(message) {
            Some(category) => category.reply.to_reply(),
            None => self.fallback.render(message),
        }
    }

    fn find(&self, message: &str) -> Option<&Category> {
        let normalized = message.to_lowercase();
        self.categories
            .iter()
            .find(|category| category.matches(&normalized))
    }
}

impl Default for KeywordResponder {
    /// The GreenPay support catalog.
    fn default() -> Self {
        Self::new(catalog::categories(), catalog::fallback())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responder() -> KeywordResponder {
        KeywordResponder::default()
    }

    #[test]
    fn test_category_order() {
        let topics: Vec<Topic> = responder().categories().iter().map(|c| c.topic).collect();
        assert_eq!(
            topics,
            vec![
                Topic::Greetings,
                Topic::Services,
                Topic::Payment,
                Topic::Account,
                Topic::Pricing,
                Topic::Security,
                Topic::Contact,
                Topic::Help,
                Topic::Thanks,
                Topic::Goodbye,
            ]
        );
    }

    #[test]
    fn test_greeting() {
        let r = responder();
        assert_eq!(r.classify("Hello there"), Topic::Greetings);
        assert_eq!(r.classify("GOOD MORNING"), Topic::Greetings);
        let reply = r.respond("hey");
        assert!(reply.message.starts_with("Hello! Welcome to GreenPay."));
        assert_eq!(
            reply.suggestions,
            vec![
                "Tell me about your services",
                "How secure is GreenPay?",
                "What are your pricing plans?",
            ]
        );
    }

    #[test]
    fn test_greeting_beats_pricing() {
        let r = responder();
        assert_eq!(r.classify("hello, what about pricing"), Topic::Greetings);
        assert_eq!(r.respond("hello pricing"), r.respond("hello"));
    }

    #[test]
    fn test_greeting_beats_help() {
        assert_eq!(responder().classify("hello, I need help"), Topic::Greetings);
    }

    #[test]
    fn test_services_before_payment() {
        assert_eq!(responder().classify("payment products"), Topic::Services);
    }

    #[test]
    fn test_each_table_category() {
        let r = responder();
        assert_eq!(r.classify("what do you offer"), Topic::Services);
        assert_eq!(r.classify("money transfer"), Topic::Payment);
        assert_eq!(r.classify("login"), Topic::Account);
        assert_eq!(r.classify("COST"), Topic::Pricing);
        assert_eq!(r.classify("encryption"), Topic::Security);
        assert_eq!(r.classify("email"), Topic::Contact);
        assert_eq!(r.classify("trouble"), Topic::Help);
    }

    #[test]
    fn test_thanks_wins_over_goodbye() {
        let r = responder();
        assert_eq!(r.classify("thanks"), Topic::Thanks);
        assert_eq!(r.classify("Thank you"), Topic::Thanks);
        assert!(r.respond("thanks").message.starts_with("You're very welcome!"));
    }

    #[test]
    fn test_goodbye_has_no_suggestions() {
        let r = responder();
        assert_eq!(r.classify("ok bye"), Topic::Goodbye);
        assert_eq!(r.classify("see you"), Topic::Goodbye);
        assert!(r.respond("goodbye").suggestions.is_empty());
    }

    #[test]
    fn test_substring_matching_is_literal() {
        // "hi" is a greeting keyword and matches inside other words.
        assert_eq!(responder().classify("this"), Topic::Greetings);
    }

    #[test]
    fn test_fallback_echoes_original_text() {
        let r = responder();
        assert_eq!(r.classify("xyzzy123"), Topic::Fallback);
        let reply = r.respond("XyZzY123");
        assert!(reply.message.contains("\"XyZzY123\""));
        assert!(reply.message.contains("support@greenpay.com"));
        assert_eq!(
            reply.suggestions,
            vec!["Contact support", "Browse help center", "Schedule a demo"]
        );
    }

    #[test]
    fn test_respond_is_deterministic() {
        let r = responder();
        assert_eq!(r.respond("security?"), r.respond("security?"));
    }

    #[test]
    fn test_custom_table() {
        let r = KeywordResponder::new(
            vec![Category {
                topic: Topic::Help,
                keywords: &["sos"],
                reply: CannedReply {
                    message: "on it",
                    suggestions: &[],
                },
            }],
            FallbackReply {
                template: "no idea about {message}",
                suggestions: &["retry"],
            },
        );
        assert_eq!(r.respond("SOS").message, "on it");
        assert_eq!(r.respond("hello").message, "no idea about hello");
    }
}
