//! Canned reply resolution.

use std::sync::LazyLock;

use regex::Regex;

/// Reply when no rule matches.
pub const FALLBACK_REPLY: &str = "I'm sorry, I didn't understand that. Ask about shipping, returns, orders, or contact info — or type 'help' for options.";

/// Ordered keyword rules; the first matching rule wins, so greetings beat
/// the shipping rule even when a message mentions both.
static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (
            r"(hi|hello|hey|good morning|good afternoon)",
            "Hello! 👋 How can I help you today? I can answer questions about orders, shipping, returns, and product info.",
        ),
        (
            r"(shipping|deliver|delivery|ship)",
            "Our standard shipping typically takes 3-5 business days. You can upgrade to express at checkout.",
        ),
        (
            r"(return|refund|exchange)",
            "You can return items within 30 days of delivery. Please ensure items are unused and in original packaging.",
        ),
        (
            r"(order|track)",
            r#"To track your order, go to the "Orders" page (click on your profile) and enter your order number. Need help finding it?"#,
        ),
        (
            r"(hours|open|close)",
            "Our support team is available Mon-Fri, 9am-5pm; orders ship during business days.",
        ),
        (
            r"(help|support|contact)",
            "You can reach our support team via the Contact page or email support@stylehub.example. Would you like the Contact page link?",
        ),
    ]
    .into_iter()
    .map(|(pattern, reply)| (Regex::new(pattern).expect("Invalid regex"), reply))
    .collect()
});

/// Resolve the canned reply for a user message.
///
/// Pure and deterministic: the lower-cased message is tested against the
/// rule table in priority order, and unmatched input gets
/// [`FALLBACK_REPLY`].
#[must_use]
pub fn resolve_reply(input: &str) -> &'static str {
    let query = input.to_lowercase();
    RULES
        .iter()
        .find(|(rule, _)| rule.is_match(&query))
        .map_or(FALLBACK_REPLY, |(_, reply)| *reply)
}
