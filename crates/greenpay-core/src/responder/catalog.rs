//! GreenPay support catalog: keyword sets and canned replies.

use greenpay_types::chat::Topic;

use super::{CannedReply, Category, FallbackReply};

/// Categories in evaluation order.
///
/// Thanks and goodbye come after the product categories. "thanks" appears in
/// both keyword sets, so it always resolves to the thanks reply.
pub fn categories() -> Vec<Category> {
    vec![
        Category {
            topic: Topic::Greetings,
            keywords: &[
                "hello",
                "hi",
                "hey",
                "good morning",
                "good afternoon",
                "good evening",
            ],
            reply: CannedReply {
                message: "Hello! Welcome to GreenPay. I'm here to help you with any questions about our banking solutions. How can I assist you today?",
                suggestions: &[
                    "Tell me about your services",
                    "How secure is GreenPay?",
                    "What are your pricing plans?",
                ],
            },
        },
        Category {
            topic: Topic::Services,
            keywords: &[
                "service",
                "services",
                "what do you offer",
                "features",
                "products",
            ],
            reply: CannedReply {
                message: "GreenPay offers comprehensive banking solutions including:\n\n\u{2022} Digital Payment Processing\n\u{2022} Mobile Banking Applications\n\u{2022} Secure Transaction Management\n\u{2022} Real-time Analytics Dashboard\n\u{2022} Multi-currency Support\n\u{2022} API Integration\n\nWhich service would you like to know more about?",
                suggestions: &["Digital Payments", "Mobile Banking", "Analytics Dashboard"],
            },
        },
        Category {
            topic: Topic::Payment,
            keywords: &["payment", "pay", "transaction", "money", "transfer", "billing"],
            reply: CannedReply {
                message: "Our payment processing system supports:\n\n\u{2022} Credit/Debit Cards (Visa, MasterCard, Amex)\n\u{2022} Digital Wallets (PayPal, Apple Pay, Google Pay)\n\u{2022} Bank Transfers\n\u{2022} Cryptocurrency payments\n\u{2022} International transactions\n\nAll payments are processed with bank-level security and real-time fraud detection.",
                suggestions: &["Security features", "Transaction fees", "Integration help"],
            },
        },
        Category {
            topic: Topic::Account,
            keywords: &["account", "profile", "login", "register", "signup", "sign up"],
            reply: CannedReply {
                message: "Getting started with GreenPay is easy!\n\n1. Create your merchant account (free signup)\n2. Complete identity verification\n3. Integrate our payment gateway\n4. Start accepting payments\n\nWould you like me to guide you through the registration process?",
                suggestions: &["Start registration", "Required documents", "Integration guide"],
            },
        },
        Category {
            topic: Topic::Pricing,
            keywords: &["price", "pricing", "cost", "fee", "charge", "rate"],
            reply: CannedReply {
                message: "GreenPay offers transparent, competitive pricing:\n\n\u{2022} Starter Plan: 2.9% + $0.30 per transaction\n\u{2022} Business Plan: 2.7% + $0.30 per transaction\n\u{2022} Enterprise Plan: Custom rates for high volume\n\nNo setup fees, no monthly fees, no hidden charges. You only pay when you get paid!",
                suggestions: &["Compare plans", "Volume discounts", "Contact sales"],
            },
        },
        Category {
            topic: Topic::Security,
            keywords: &[
                "security",
                "safe",
                "secure",
                "protection",
                "privacy",
                "encryption",
            ],
            reply: CannedReply {
                message: "Security is our top priority at GreenPay:\n\n\u{2022} PCI DSS Level 1 Compliance\n\u{2022} 256-bit SSL encryption\n\u{2022} Two-factor authentication\n\u{2022} Real-time fraud monitoring\n\u{2022} Secure tokenization\n\u{2022} Regular security audits\n\nYour data and transactions are protected with bank-level security.",
                suggestions: &[
                    "Compliance certifications",
                    "Fraud protection",
                    "Data privacy",
                ],
            },
        },
        Category {
            topic: Topic::Contact,
            keywords: &["contact", "reach", "phone", "email", "address", "location"],
            reply: CannedReply {
                message: "You can reach our support team:\n\n\u{1F4E7} Email: support@greenpay.com\n\u{1F4DE} Phone: +1 (555) 123-4567\n\u{1F4AC} Live Chat: Available 24/7\n\u{1F310} Help Center: help.greenpay.com\n\nOur team typically responds within 2 hours during business hours.",
                suggestions: &["Schedule a call", "Email support", "Help center"],
            },
        },
        Category {
            topic: Topic::Help,
            keywords: &["help", "support", "assistance", "problem", "issue", "trouble"],
            reply: CannedReply {
                message: "I'm here to help! I can assist you with:\n\n\u{2022} Account setup and verification\n\u{2022} Payment processing questions\n\u{2022} Technical integration support\n\u{2022} Pricing and plan information\n\u{2022} Security and compliance\n\u{2022} General product questions\n\nWhat specific area do you need help with?",
                suggestions: &["Account setup", "Technical support", "Billing questions"],
            },
        },
        Category {
            topic: Topic::Thanks,
            keywords: &["thank"],
            reply: CannedReply {
                message: "You're very welcome! I'm glad I could help. Is there anything else you'd like to know about GreenPay's services?",
                suggestions: &[
                    "Learn more about services",
                    "Contact sales team",
                    "Start free trial",
                ],
            },
        },
        Category {
            topic: Topic::Goodbye,
            keywords: &["bye", "goodbye", "see you", "thanks"],
            reply: CannedReply {
                message: "Thank you for your interest in GreenPay! Have a great day, and don't hesitate to reach out if you have any more questions. We're here to help you succeed!",
                suggestions: &[],
            },
        },
    ]
}

/// Reply for messages no category claims.
pub fn fallback() -> FallbackReply {
    FallbackReply {
        template: "I understand you're asking about \"{message}\". While I may not have specific information on that topic, our support team can provide detailed assistance. You can reach them at support@greenpay.com or +1 (555) 123-4567.",
        suggestions: &["Contact support", "Browse help center", "Schedule a demo"],
    }
}
