//! `greenpay ask` -- run the keyword responder once from the terminal.

use anyhow::{Result, bail};
use console::style;

use greenpay_core::responder::KeywordResponder;
use greenpay_types::chat::{BotReply, Topic};

/// Print the canned reply for `message`.
pub fn ask(message: &str, json: bool) -> Result<()> {
    let message = message.trim();
    if message.is_empty() {
        bail!("Message is required");
    }

    let responder = KeywordResponder::default();
    let topic = responder.classify(message);
    let reply = responder.respond(message);

    if json {
        println!("{}", serde_json::to_string_pretty(&reply_json(topic, &reply))?);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("topic:").dim(), style(topic).cyan().bold());
    for line in reply.message.lines() {
        println!("  {line}");
    }
    if !reply.suggestions.is_empty() {
        println!();
        for suggestion in &reply.suggestions {
            println!("  {} {}", style("\u{203A}").green(), suggestion);
        }
    }
    println!();

    Ok(())
}

/// Machine-readable form of one answer.
fn reply_json(topic: Topic, reply: &BotReply) -> serde_json::Value {
    serde_json::json!({
        "topic": topic,
        "response": reply.message,
        "suggestions": reply.suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_rejects_blank_message() {
        let err = ask("  ", false).unwrap_err();
        assert_eq!(err.to_string(), "Message is required");
    }

    #[test]
    fn test_reply_json_for_pricing_question() {
        let responder = KeywordResponder::default();
        let message = "how much does it cost?";
        let json = reply_json(responder.classify(message), &responder.respond(message));

        assert_eq!(json["topic"], "pricing");
        assert!(
            json["response"]
                .as_str()
                .unwrap()
                .starts_with("GreenPay offers transparent, competitive pricing")
        );
        assert_eq!(
            json["suggestions"],
            serde_json::json!(["Compare plans", "Volume discounts", "Contact sales"])
        );
    }

    #[test]
    fn test_reply_json_for_unknown_message() {
        let responder = KeywordResponder::default();
        let json = reply_json(responder.classify("xyzzy123"), &responder.respond("xyzzy123"));

        assert_eq!(json["topic"], "fallback");
        assert!(json["response"].as_str().unwrap().contains("\"xyzzy123\""));
    }
}
