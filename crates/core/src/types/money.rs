//! Money helpers over decimal arithmetic.
//!
//! All storefront amounts are USD and use [`rust_decimal::Decimal`] so that
//! subtotal and tax arithmetic stays exact.

use rust_decimal::Decimal;

/// A dollar amount from a whole number of cents.
#[must_use]
pub fn usd_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Format an amount for display, e.g. `$8.00`.
///
/// Generic over [`Display`](core::fmt::Display) so template filters can
/// pass amounts by reference.
#[must_use]
pub fn format_usd(amount: impl core::fmt::Display) -> String {
    format!("${amount:.2}")
}

/// Parse a price marker value.
///
/// Unparseable or negative input counts as zero; a bad price on a product
/// element should never break the add-to-cart path.
#[must_use]
pub fn parse_price(raw: &str) -> Decimal {
    raw.trim()
        .parse::<Decimal>()
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO)
}
