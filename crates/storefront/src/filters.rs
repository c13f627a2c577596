//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use stylehub_core::money;

/// Formats an amount as a dollar string, e.g. `$8.00`.
///
/// Usage in templates: `{{ cart.subtotal|usd }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn usd(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(money::format_usd(amount))
}
