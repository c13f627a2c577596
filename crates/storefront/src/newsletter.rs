//! Newsletter signup validation.
//!
//! Local-only: the storefront validates the email and confirms, nothing is
//! submitted anywhere.

use stylehub_core::Email;

/// Outcome of a subscribe attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// The address is acceptable; the input should be cleared.
    Success {
        /// The validated address.
        email: Email,
    },
    /// The address was rejected; the input keeps its value and focus.
    Error {
        /// User-facing message.
        message: String,
    },
}

/// Validate a subscribe request from the email input's raw value.
#[must_use]
pub fn subscribe(raw: &str) -> SubscribeOutcome {
    let value = raw.trim();

    if value.is_empty() {
        return SubscribeOutcome::Error {
            message: "Please enter an email address.".to_owned(),
        };
    }

    match Email::parse(value) {
        Ok(email) => SubscribeOutcome::Success { email },
        Err(_) => SubscribeOutcome::Error {
            message: "Please provide a valid email address.".to_owned(),
        },
    }
}
